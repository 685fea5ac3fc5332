//! Customer REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CustomerUsageResponse, RecordUsageRequest, StatementResponse, UsageRecordDto};
use crate::interfaces::http::common::{ApiError, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/customers/{customer_id}/statement",
    tag = "Customers",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Billing statement", body = ApiResponse<StatementResponse>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_statement(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> ApiResult<StatementResponse> {
    let statement = state.billing.customer_statement(customer_id).await?;
    Ok(Json(ApiResponse::success(StatementResponse::from(&statement))))
}

#[utoipa::path(
    post,
    path = "/api/v1/customers/{customer_id}/usage",
    tag = "Customers",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    request_body = RecordUsageRequest,
    responses(
        (status = 201, description = "Call record stored", body = ApiResponse<UsageRecordDto>),
        (status = 422, description = "Negative or malformed usage")
    )
)]
pub async fn record_usage(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<RecordUsageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UsageRecordDto>>), ApiError> {
    let record = state
        .usage
        .record_usage(customer_id, req.duration, req.data_usage, req.recorded_at)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(UsageRecordDto::from(&record))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{customer_id}/usage",
    tag = "Customers",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Call records and totals", body = ApiResponse<CustomerUsageResponse>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_usage(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> ApiResult<CustomerUsageResponse> {
    let usage = state.usage.customer_usage(customer_id).await?;
    Ok(Json(ApiResponse::success(CustomerUsageResponse::from(&usage))))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};

    use crate::interfaces::http::test_support::{get, post_json, seeded_app};

    fn decimal(value: &Value) -> Decimal {
        value.as_str().unwrap().parse().unwrap()
    }

    #[tokio::test]
    async fn statement_rates_each_line() {
        let (status, json) = get(seeded_app().await, "/api/v1/customers/1/statement").await;
        assert_eq!(status, StatusCode::OK);

        let lines = json["data"]["lines"].as_array().unwrap();
        assert_eq!(lines.len(), 2);

        // AT&T Pay for both with 10 minutes and 2 GB on record
        assert_eq!(lines[0]["kind"], "rated");
        assert_eq!(lines[0]["usage"]["total_minutes"], "10");
        assert_eq!(lines[0]["charge"]["total"], "33.26");
        assert_eq!(lines[0]["recorded_amount"], "32.48");

        assert_eq!(lines[1]["kind"], "unlimited");
        assert!(lines[1]["usage"].is_null());
        assert_eq!(lines[1]["charge"]["total"], "64.95");

        // Unlimited lines are listed but left out of the total
        assert_eq!(json["data"]["grand_total"], "33.26");
        assert_eq!(json["data"]["formatted_grand_total"], "$33.26");
        assert_eq!(json["data"]["unlimited_total"], "64.95");
        assert_eq!(json["data"]["not_rateable"], 0);
    }

    #[tokio::test]
    async fn unknown_customer_gets_empty_statement() {
        let (status, json) = get(seeded_app().await, "/api/v1/customers/404/statement").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["data"]["lines"].as_array().unwrap().is_empty());
        assert_eq!(json["data"]["grand_total"], "0.00");
        assert_eq!(json["data"]["formatted_grand_total"], "$0.00");
    }

    #[tokio::test]
    async fn usage_written_over_http_is_rated_on_the_statement() {
        let app = seeded_app().await;
        let body = json!({
            "duration": "5",
            "data_usage": "1.0",
            "recorded_at": "2024-03-04T08:30:00Z"
        });
        let (status, json) = post_json(app.clone(), "/api/v1/customers/1/usage", body).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["customer_id"], 1);
        assert_eq!(json["data"]["recorded_at"], "2024-03-04T08:30:00Z");

        let (status, json) = get(app.clone(), "/api/v1/customers/1/usage").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["records"].as_array().unwrap().len(), 3);
        assert_eq!(decimal(&json["data"]["totals"]["total_minutes"]), dec!(15));
        assert_eq!(decimal(&json["data"]["totals"]["total_data_usage"]), dec!(3));

        // 30.00 + 2.48 + 15 min * 0.06 + 3 GB * 0.09
        let (_, json) = get(app, "/api/v1/customers/1/statement").await;
        assert_eq!(json["data"]["lines"][0]["charge"]["total"], "33.65");
        assert_eq!(json["data"]["grand_total"], "33.65");
    }

    #[tokio::test]
    async fn negative_usage_is_rejected() {
        let app = seeded_app().await;
        let body = json!({ "duration": "-1", "data_usage": "0" });
        let (status, json) = post_json(app.clone(), "/api/v1/customers/1/usage", body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["success"], false);

        let (_, json) = get(app, "/api/v1/customers/1/usage").await;
        assert_eq!(json["data"]["records"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn usage_of_unknown_customer_is_empty() {
        let (status, json) = get(seeded_app().await, "/api/v1/customers/404/usage").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["data"]["records"].as_array().unwrap().is_empty());
        assert_eq!(decimal(&json["data"]["totals"]["total_minutes"]), Decimal::ZERO);
    }
}
