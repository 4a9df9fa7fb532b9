use mongodb::bson::{Binary, Bson, DateTime, Document, doc, spec::BinarySubtype};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dao::models::{GameEntity, GameFilter};

/// Game document storing the kick-off as a native BSON date so it can be sorted server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoGameDocument {
    id: Uuid,
    competition_id: Uuid,
    season_id: Uuid,
    home_team_id: Uuid,
    away_team_id: Uuid,
    kickoff: DateTime,
    venue: Option<String>,
}

impl From<GameEntity> for MongoGameDocument {
    fn from(value: GameEntity) -> Self {
        Self {
            id: value.id,
            competition_id: value.competition_id,
            season_id: value.season_id,
            home_team_id: value.home_team_id,
            away_team_id: value.away_team_id,
            kickoff: DateTime::from_system_time(value.kickoff),
            venue: value.venue,
        }
    }
}

impl From<MongoGameDocument> for GameEntity {
    fn from(value: MongoGameDocument) -> Self {
        Self {
            id: value.id,
            competition_id: value.competition_id,
            season_id: value.season_id,
            home_team_id: value.home_team_id,
            away_team_id: value.away_team_id,
            kickoff: value.kickoff.to_system_time(),
            venue: value.venue,
        }
    }
}

/// `Uuid` serializes to generic binary through the raw BSON serializer; filters must match that.
pub fn uuid_as_binary(id: Uuid) -> Binary {
    Binary {
        subtype: BinarySubtype::Generic,
        bytes: id.into_bytes().to_vec(),
    }
}

pub fn doc_id(id: Uuid) -> Document {
    doc! {"id": uuid_as_binary(id)}
}

pub fn field_eq(field: &str, id: Uuid) -> Document {
    let mut filter = Document::new();
    filter.insert(field, uuid_as_binary(id));
    filter
}

pub fn ids_in(field: &str, ids: &[Uuid]) -> Document {
    let values: Vec<Bson> = ids
        .iter()
        .map(|id| Bson::Binary(uuid_as_binary(*id)))
        .collect();
    let mut filter = Document::new();
    filter.insert(field, doc! {"$in": values});
    filter
}

pub fn game_filter(filter: &GameFilter) -> Document {
    let mut query = Document::new();
    if let Some(id) = filter.competition_id {
        query.insert("competition_id", uuid_as_binary(id));
    }
    if let Some(id) = filter.season_id {
        query.insert("season_id", uuid_as_binary(id));
    }
    if let Some(id) = filter.team_id {
        query.insert(
            "$or",
            vec![
                Bson::Document(field_eq("home_team_id", id)),
                Bson::Document(field_eq("away_team_id", id)),
            ],
        );
    }
    query
}

/// Case-insensitive "contains" filter on `name`.
pub fn name_contains(query: &str) -> Document {
    doc! {"name": {"$regex": escape_regex(query), "$options": "i"}}
}

fn escape_regex(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if "\\.+*?()|[]{}^$#&-~".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_metacharacters_are_escaped() {
        assert_eq!(escape_regex("St. Pauli (II)"), r"St\. Pauli \(II\)");
        assert_eq!(escape_regex("plain"), "plain");
    }

    #[test]
    fn team_filter_matches_either_side() {
        let team = Uuid::new_v4();
        let filter = game_filter(&GameFilter::team(team));
        assert!(filter.contains_key("$or"));
        assert!(!filter.contains_key("competition_id"));
    }
}
