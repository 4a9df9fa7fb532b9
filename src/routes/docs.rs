use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{services::documentation::ApiDoc, state::SharedState};

/// Browser entry point of the interactive API explorer.
pub const SWAGGER_UI_PATH: &str = "/docs";
/// Raw OpenAPI document consumed by the explorer and by client generators.
pub const OPENAPI_JSON_PATH: &str = "/api-doc/openapi.json";

/// Swagger UI over the matchday API, stamped with the running crate version.
pub fn router() -> Router<SharedState> {
    let mut doc = ApiDoc::openapi();
    doc.info.version = env!("CARGO_PKG_VERSION").to_owned();

    SwaggerUi::new(SWAGGER_UI_PATH)
        .url(OPENAPI_JSON_PATH, doc)
        .into()
}
