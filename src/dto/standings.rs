//! League table payload.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::catalogue::{CompetitionSummary, SeasonSummary},
    standings::StandingsRow,
};

/// One line of the league table.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct StandingsRowDto {
    /// 1-based rank.
    pub position: usize,
    pub team_id: Uuid,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    /// Derived as `played - wins - losses`.
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
}

impl StandingsRowDto {
    /// Project a computed row, naming its team for display.
    pub fn new(position: usize, row: &StandingsRow, team_name: String) -> Self {
        Self {
            position,
            team_id: row.team_id,
            team_name,
            played: row.played,
            wins: row.wins,
            draws: row.draws(),
            losses: row.losses,
            points: row.points,
        }
    }
}

/// League table of one competition-season, sorted by points.
#[derive(Debug, Serialize, ToSchema)]
pub struct StandingsResponse {
    pub competition: CompetitionSummary,
    pub season: SeasonSummary,
    /// Ranked rows; teams level on points keep alphabetical order.
    pub rows: Vec<StandingsRowDto>,
    /// Teams referenced by games but not enrolled in the competition-season.
    pub unknown_team_ids: Vec<Uuid>,
}
