//! DTO definitions used by the admin REST API and documentation layer.

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::{
    catalogue::PositionDto,
    game::{CardColourDto, Side},
    validation::{validate_not_blank, validate_rfc3339},
};

/// Competition fields set by administrators.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CompetitionInput {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// Season fields set by administrators.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SeasonInput {
    /// Display label such as `2023/24`.
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
}

/// Team fields set by administrators.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct TeamInput {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub founded: Option<u16>,
    #[serde(default)]
    pub stadium: Option<String>,
}

/// Player fields set by administrators.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct PlayerInput {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    pub position: PositionDto,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, max = 99))]
    pub shirt_number: Option<u8>,
    /// Club the player is registered with; checked against the catalogue.
    #[serde(default)]
    pub team_id: Option<Uuid>,
}

/// Manager fields set by administrators.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ManagerInput {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub team_id: Option<Uuid>,
}

/// Body of the enrollment endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrollTeamRequest {
    pub team_id: Uuid,
}

/// Fixture definition.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct GameInput {
    pub competition_id: Uuid,
    pub season_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    /// RFC 3339 kick-off time, e.g. `2024-08-17T14:00:00Z`.
    #[validate(custom(function = "validate_rfc3339"))]
    pub kickoff: String,
    #[serde(default)]
    pub venue: Option<String>,
}

/// Goal scored during a game.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct GoalInput {
    /// Side credited with the goal.
    pub side: Side,
    #[validate(range(max = 130))]
    pub minute: u8,
    #[serde(default)]
    pub scorer_id: Option<Uuid>,
    #[serde(default)]
    pub assist_id: Option<Uuid>,
    #[serde(default)]
    pub penalty: bool,
    #[serde(default)]
    pub own_goal: bool,
}

/// Card shown during a game.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CardInput {
    pub side: Side,
    #[validate(range(max = 130))]
    pub minute: u8,
    pub player_id: Uuid,
    pub colour: CardColourDto,
}

/// Substitution made during a game.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SubstitutionInput {
    pub side: Side,
    #[validate(range(max = 130))]
    pub minute: u8,
    pub player_in_id: Uuid,
    pub player_out_id: Uuid,
}

/// One player of a submitted lineup.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LineupEntryInput {
    pub player_id: Uuid,
    #[serde(default = "default_starter")]
    pub starter: bool,
    #[serde(default)]
    pub position: Option<PositionDto>,
}

fn default_starter() -> bool {
    true
}

/// Complete replacement of a game lineup.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LineupInput {
    #[serde(default)]
    pub home: Vec<LineupEntryInput>,
    #[serde(default)]
    pub away: Vec<LineupEntryInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_competition_name_is_rejected() {
        let input: CompetitionInput = serde_json::from_str(r#"{"name": "  "}"#).unwrap();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn shirt_number_outside_range_is_rejected() {
        let input: PlayerInput =
            serde_json::from_str(r#"{"name": "Saka", "position": "forward", "shirt_number": 0}"#)
                .unwrap();
        assert!(input.validate().is_err());

        let input: PlayerInput =
            serde_json::from_str(r#"{"name": "Saka", "position": "forward", "shirt_number": 7}"#)
                .unwrap();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn goal_minute_is_capped() {
        let late: GoalInput = serde_json::from_str(r#"{"side": "home", "minute": 131}"#).unwrap();
        assert!(late.validate().is_err());

        let stoppage: GoalInput =
            serde_json::from_str(r#"{"side": "away", "minute": 94}"#).unwrap();
        assert!(stoppage.validate().is_ok());
        assert!(!stoppage.penalty);
    }

    #[test]
    fn game_kickoff_must_parse() {
        let id = Uuid::new_v4();
        let body = format!(
            r#"{{"competition_id":"{id}","season_id":"{id}","home_team_id":"{id}","away_team_id":"{id}","kickoff":"tomorrow"}}"#
        );
        let input: GameInput = serde_json::from_str(&body).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn lineup_entries_default_to_starters() {
        let input: LineupInput =
            serde_json::from_str(&format!(r#"{{"home": [{{"player_id": "{}"}}]}}"#, Uuid::nil()))
                .unwrap();
        assert!(input.home[0].starter);
        assert!(input.away.is_empty());
    }
}
