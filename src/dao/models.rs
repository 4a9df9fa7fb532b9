use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Competition (league or cup) shared across seasons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompetitionEntity {
    /// Stable identifier for the competition.
    pub id: Uuid,
    /// Display name (e.g. "Premier League").
    pub name: String,
    /// Country or region the competition belongs to.
    pub country: Option<String>,
}

/// Season label such as "2023/24".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonEntity {
    /// Stable identifier for the season.
    pub id: Uuid,
    /// Display name of the season.
    pub name: String,
}

/// Club or national side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamEntity {
    /// Stable identifier for the team.
    pub id: Uuid,
    /// Display name of the team.
    pub name: String,
    /// Abbreviation used in compact listings.
    pub short_name: Option<String>,
    /// Foundation year.
    pub founded: Option<u16>,
    /// Home ground.
    pub stadium: Option<String>,
}

/// Playing position of a squad member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PositionEntity {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// Player registered in the catalogue, optionally attached to a team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerEntity {
    /// Stable identifier for the player.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Preferred position.
    pub position: PositionEntity,
    /// Nationality as free text.
    pub nationality: Option<String>,
    /// Squad number.
    pub shirt_number: Option<u8>,
    /// Current team, if any.
    pub team_id: Option<Uuid>,
}

/// Manager (head coach) registered in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManagerEntity {
    /// Stable identifier for the manager.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Nationality as free text.
    pub nationality: Option<String>,
    /// Team currently managed, if any.
    pub team_id: Option<Uuid>,
}

/// Enrollment of a team into one competition-season.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EnrollmentEntity {
    pub competition_id: Uuid,
    pub season_id: Uuid,
    pub team_id: Uuid,
}

/// Fixture played (or scheduled) inside a competition-season.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Primary key of the game.
    pub id: Uuid,
    /// Competition the game counts for.
    pub competition_id: Uuid,
    /// Season the game counts for.
    pub season_id: Uuid,
    /// Team playing at home.
    pub home_team_id: Uuid,
    /// Visiting team.
    pub away_team_id: Uuid,
    /// Kick-off time.
    pub kickoff: SystemTime,
    /// Venue, when different from the home team's stadium.
    pub venue: Option<String>,
}

impl GameEntity {
    /// Whether `team_id` plays in this game on either side.
    pub fn involves(&self, team_id: Uuid) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// Goal event. `home` tells which side the goal counts for, own goals included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalEntity {
    pub id: Uuid,
    pub game_id: Uuid,
    pub home: bool,
    pub minute: u8,
    pub scorer_id: Option<Uuid>,
    pub assist_id: Option<Uuid>,
    pub penalty: bool,
    pub own_goal: bool,
}

/// Card colour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardColourEntity {
    Yellow,
    Red,
}

/// Disciplinary card shown during a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardEntity {
    pub id: Uuid,
    pub game_id: Uuid,
    pub player_id: Uuid,
    pub home: bool,
    pub minute: u8,
    pub colour: CardColourEntity,
}

/// Substitution performed during a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubstitutionEntity {
    pub id: Uuid,
    pub game_id: Uuid,
    pub home: bool,
    pub minute: u8,
    pub player_in_id: Uuid,
    pub player_out_id: Uuid,
}

/// One line of a game lineup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineupEntryEntity {
    pub game_id: Uuid,
    pub player_id: Uuid,
    pub home: bool,
    /// Starting eleven when true, bench otherwise.
    pub starter: bool,
    pub position: Option<PositionEntity>,
}

/// Kind of catalogue entry a user can favourite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FavouriteKindEntity {
    Competition,
    Team,
    Player,
    Manager,
}

/// Favourite bookmark owned by an opaque user identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FavouriteEntity {
    pub user_id: String,
    pub kind: FavouriteKindEntity,
    pub target_id: Uuid,
    pub created_at: SystemTime,
}

/// Criteria used to narrow game listings. Unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameFilter {
    pub competition_id: Option<Uuid>,
    pub season_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
}

impl GameFilter {
    /// Filter selecting every game of one competition-season.
    pub fn competition_season(competition_id: Uuid, season_id: Uuid) -> Self {
        Self {
            competition_id: Some(competition_id),
            season_id: Some(season_id),
            team_id: None,
        }
    }

    /// Filter selecting every game of one competition, across seasons.
    pub fn competition(competition_id: Uuid) -> Self {
        Self {
            competition_id: Some(competition_id),
            ..Self::default()
        }
    }

    /// Filter selecting every game of one season, across competitions.
    pub fn season(season_id: Uuid) -> Self {
        Self {
            season_id: Some(season_id),
            ..Self::default()
        }
    }

    /// Narrow the filter to games involving `team_id`.
    pub fn with_team(self, team_id: Uuid) -> Self {
        Self {
            team_id: Some(team_id),
            ..self
        }
    }

    /// Filter selecting every game a team took part in.
    pub fn team(team_id: Uuid) -> Self {
        Self {
            team_id: Some(team_id),
            ..Self::default()
        }
    }

    /// Whether `game` satisfies every set criterion.
    pub fn matches(&self, game: &GameEntity) -> bool {
        self.competition_id.is_none_or(|id| game.competition_id == id)
            && self.season_id.is_none_or(|id| game.season_id == id)
            && self.team_id.is_none_or(|id| game.involves(id))
    }
}

/// Raw name-search hits grouped per catalogue kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHitsEntity {
    pub competitions: Vec<CompetitionEntity>,
    pub teams: Vec<TeamEntity>,
    pub players: Vec<PlayerEntity>,
    pub managers: Vec<ManagerEntity>,
}
