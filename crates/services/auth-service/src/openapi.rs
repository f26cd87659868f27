//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::service::{CreateUserInput, CreatedUserOutput, LoginInput, LoginOutput};
use common::{ErrorResponse, HealthResponse, ServiceHealth};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::login,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            CreateUserInput,
            CreatedUserOutput,
            LoginInput,
            LoginOutput,
            ErrorResponse,
            HealthResponse,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Users", description = "User registration and login"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
