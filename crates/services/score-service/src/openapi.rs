//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::service::ScoreOutput;
use common::{HealthResponse, ServiceHealth};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::score_handler::get_score,
        crate::handlers::health_handler::health_check,
    ),
    components(schemas(ScoreOutput, HealthResponse, ServiceHealth)),
    tags(
        (name = "Score", description = "Customer credit score"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
