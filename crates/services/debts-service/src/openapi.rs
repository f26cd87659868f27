//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::service::{CreateDebtInput, CreateDebtOutput, DebtOutput};
use common::{ErrorResponse, HealthResponse, ServiceHealth};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::debt_handler::create_debt,
        crate::handlers::debt_handler::get_debts,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            CreateDebtInput,
            CreateDebtOutput,
            DebtOutput,
            ErrorResponse,
            HealthResponse,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Debts", description = "Customer debts"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
