use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Matchday Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::catalogue::list_competitions,
        crate::routes::catalogue::get_competition,
        crate::routes::catalogue::list_enrolled_teams,
        crate::routes::catalogue::list_seasons,
        crate::routes::catalogue::get_season,
        crate::routes::catalogue::list_teams,
        crate::routes::catalogue::get_team,
        crate::routes::catalogue::list_players,
        crate::routes::catalogue::get_player,
        crate::routes::catalogue::list_managers,
        crate::routes::catalogue::get_manager,
        crate::routes::game::list_games,
        crate::routes::game::league_table,
        crate::routes::game::get_game,
        crate::routes::search::search,
        crate::routes::favourites::list_favourites,
        crate::routes::favourites::add_favourite,
        crate::routes::favourites::remove_favourite,
        crate::routes::admin::create_competition,
        crate::routes::admin::update_competition,
        crate::routes::admin::delete_competition,
        crate::routes::admin::enroll_team,
        crate::routes::admin::withdraw_team,
        crate::routes::admin::create_season,
        crate::routes::admin::update_season,
        crate::routes::admin::delete_season,
        crate::routes::admin::create_team,
        crate::routes::admin::update_team,
        crate::routes::admin::delete_team,
        crate::routes::admin::create_player,
        crate::routes::admin::update_player,
        crate::routes::admin::delete_player,
        crate::routes::admin::create_manager,
        crate::routes::admin::update_manager,
        crate::routes::admin::delete_manager,
        crate::routes::admin::create_game,
        crate::routes::admin::update_game,
        crate::routes::admin::delete_game,
        crate::routes::admin::add_goal,
        crate::routes::admin::delete_goal,
        crate::routes::admin::add_card,
        crate::routes::admin::delete_card,
        crate::routes::admin::add_substitution,
        crate::routes::admin::delete_substitution,
        crate::routes::admin::replace_lineup,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::catalogue::CompetitionSummary,
            crate::dto::catalogue::SeasonSummary,
            crate::dto::catalogue::TeamSummary,
            crate::dto::catalogue::TeamDetail,
            crate::dto::catalogue::PlayerSummary,
            crate::dto::catalogue::ManagerSummary,
            crate::dto::catalogue::PositionDto,
            crate::dto::game::GameSummary,
            crate::dto::game::GameDetail,
            crate::dto::game::TeamRef,
            crate::dto::game::Score,
            crate::dto::game::Side,
            crate::dto::game::TimelineEvent,
            crate::dto::game::CardColourDto,
            crate::dto::game::LineupPlayer,
            crate::dto::game::Lineups,
            crate::dto::standings::StandingsResponse,
            crate::dto::standings::StandingsRowDto,
            crate::dto::search::SearchResponse,
            crate::dto::favourites::FavouriteKindDto,
            crate::dto::favourites::AddFavouriteRequest,
            crate::dto::favourites::FavouriteItem,
            crate::dto::admin::CompetitionInput,
            crate::dto::admin::SeasonInput,
            crate::dto::admin::TeamInput,
            crate::dto::admin::PlayerInput,
            crate::dto::admin::ManagerInput,
            crate::dto::admin::EnrollTeamRequest,
            crate::dto::admin::GameInput,
            crate::dto::admin::GoalInput,
            crate::dto::admin::CardInput,
            crate::dto::admin::SubstitutionInput,
            crate::dto::admin::LineupEntryInput,
            crate::dto::admin::LineupInput,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalogue", description = "Competitions, seasons, teams, players and managers"),
        (name = "games", description = "Fixtures, match centre and league tables"),
        (name = "search", description = "Name search"),
        (name = "favourites", description = "Per-user favourites"),
        (name = "admin", description = "Token-protected maintenance endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_table_route() {
        let doc = ApiDoc::openapi();
        assert!(
            doc.paths
                .paths
                .contains_key("/competitions/{competition_id}/seasons/{season_id}/table")
        );
    }
}
