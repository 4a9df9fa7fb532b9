//! Fixture, score and timeline projections.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dao::models::{
        CardColourEntity, CardEntity, GameEntity, GoalEntity, LineupEntryEntity,
        SubstitutionEntity,
    },
    dto::{catalogue::PositionDto, format_system_time},
};

/// Team reference embedded in game payloads.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct TeamRef {
    pub id: Uuid,
    /// `None` when the team was removed from the catalogue.
    pub name: Option<String>,
}

/// Goals per side.
#[derive(Debug, Clone, Copy, Serialize, ToSchema, PartialEq, Eq, Default)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    /// Count the goals credited to each side.
    pub fn from_goals<'a>(goals: impl IntoIterator<Item = &'a GoalEntity>) -> Self {
        goals.into_iter().fold(Self::default(), |mut score, goal| {
            if goal.home {
                score.home += 1;
            } else {
                score.away += 1;
            }
            score
        })
    }
}

/// Fixture with its current score.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GameSummary {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub season_id: Uuid,
    pub home: TeamRef,
    pub away: TeamRef,
    /// RFC 3339 kick-off time.
    pub kickoff: String,
    pub venue: Option<String>,
    pub score: Score,
}

impl GameSummary {
    pub fn new(game: GameEntity, home: TeamRef, away: TeamRef, score: Score) -> Self {
        Self {
            id: game.id,
            competition_id: game.competition_id,
            season_id: game.season_id,
            home,
            away,
            kickoff: format_system_time(game.kickoff),
            venue: game.venue,
            score,
        }
    }
}

/// Which side an event belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn from_home_flag(home: bool) -> Self {
        if home { Side::Home } else { Side::Away }
    }

    pub fn is_home(self) -> bool {
        matches!(self, Side::Home)
    }
}

/// Card colour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardColourDto {
    Yellow,
    Red,
}

impl From<CardColourEntity> for CardColourDto {
    fn from(value: CardColourEntity) -> Self {
        match value {
            CardColourEntity::Yellow => Self::Yellow,
            CardColourEntity::Red => Self::Red,
        }
    }
}

impl From<CardColourDto> for CardColourEntity {
    fn from(value: CardColourDto) -> Self {
        match value {
            CardColourDto::Yellow => Self::Yellow,
            CardColourDto::Red => Self::Red,
        }
    }
}

/// Event of the match timeline.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimelineEvent {
    Goal {
        id: Uuid,
        minute: u8,
        side: Side,
        scorer_id: Option<Uuid>,
        assist_id: Option<Uuid>,
        penalty: bool,
        own_goal: bool,
    },
    Card {
        id: Uuid,
        minute: u8,
        side: Side,
        player_id: Uuid,
        colour: CardColourDto,
    },
    Substitution {
        id: Uuid,
        minute: u8,
        side: Side,
        player_in_id: Uuid,
        player_out_id: Uuid,
    },
}

impl TimelineEvent {
    pub fn minute(&self) -> u8 {
        match self {
            TimelineEvent::Goal { minute, .. }
            | TimelineEvent::Card { minute, .. }
            | TimelineEvent::Substitution { minute, .. } => *minute,
        }
    }
}

impl From<GoalEntity> for TimelineEvent {
    fn from(value: GoalEntity) -> Self {
        TimelineEvent::Goal {
            id: value.id,
            minute: value.minute,
            side: Side::from_home_flag(value.home),
            scorer_id: value.scorer_id,
            assist_id: value.assist_id,
            penalty: value.penalty,
            own_goal: value.own_goal,
        }
    }
}

impl From<CardEntity> for TimelineEvent {
    fn from(value: CardEntity) -> Self {
        TimelineEvent::Card {
            id: value.id,
            minute: value.minute,
            side: Side::from_home_flag(value.home),
            player_id: value.player_id,
            colour: value.colour.into(),
        }
    }
}

impl From<SubstitutionEntity> for TimelineEvent {
    fn from(value: SubstitutionEntity) -> Self {
        TimelineEvent::Substitution {
            id: value.id,
            minute: value.minute,
            side: Side::from_home_flag(value.home),
            player_in_id: value.player_in_id,
            player_out_id: value.player_out_id,
        }
    }
}

/// Player listed in a lineup.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct LineupPlayer {
    pub player_id: Uuid,
    /// `None` when the player was removed from the catalogue.
    pub name: Option<String>,
    pub starter: bool,
    pub position: Option<PositionDto>,
}

impl LineupPlayer {
    pub fn new(entry: &LineupEntryEntity, name: Option<String>) -> Self {
        Self {
            player_id: entry.player_id,
            name,
            starter: entry.starter,
            position: entry.position.map(Into::into),
        }
    }
}

/// Both lineups, starters listed before substitutes.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct Lineups {
    pub home: Vec<LineupPlayer>,
    pub away: Vec<LineupPlayer>,
}

/// Match centre payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameDetail {
    pub game: GameSummary,
    /// Goals, cards and substitutions ordered by minute.
    pub timeline: Vec<TimelineEvent>,
    pub lineups: Lineups,
}
