//! API Router with Swagger UI

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::{billing, customers, health, plans, transactions};
use super::AppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        plans::list_plans,
        plans::lookup_plan,
        billing::preview_charge,
        customers::get_statement,
        customers::record_usage,
        customers::list_usage,
        transactions::create_transaction,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            plans::PlanDto,
            billing::PreviewRequest,
            billing::ChargeBreakdownDto,
            customers::UsageDto,
            customers::StatementLineDto,
            customers::StatementResponse,
            customers::RecordUsageRequest,
            customers::UsageRecordDto,
            customers::CustomerUsageResponse,
            transactions::CreateTransactionRequest,
            transactions::TransactionResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Plans", description = "Provider plan catalog and pricing rules"),
        (name = "Billing", description = "Rate usage against a plan without touching customer data"),
        (name = "Customers", description = "Customer call records and billing statements"),
        (name = "Transactions", description = "Charge a customer for the plan behind a phone number"),
    ),
    info(
        title = "Carrier Billing API",
        version = "1.0.0",
        description = "Plan catalog and usage-based billing for a mobile carrier reseller"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        // Plans
        .route("/api/v1/plans", get(plans::list_plans))
        .route("/api/v1/plans/lookup", get(plans::lookup_plan))
        // Billing
        .route("/api/v1/billing/preview", post(billing::preview_charge))
        // Customers
        .route(
            "/api/v1/customers/{customer_id}/statement",
            get(customers::get_statement),
        )
        .route(
            "/api/v1/customers/{customer_id}/usage",
            get(customers::list_usage).post(customers::record_usage),
        )
        // Transactions
        .route("/api/v1/transactions", post(transactions::create_transaction))
        .with_state(state);

    Router::new()
        .merge(swagger_routes)
        .merge(api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
