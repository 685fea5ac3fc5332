//! Billing REST API handlers

use axum::{extract::State, Json};

use super::dto::{ChargeBreakdownDto, PreviewRequest};
use crate::interfaces::http::common::{ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/billing/preview",
    tag = "Billing",
    request_body = PreviewRequest,
    responses(
        (status = 200, description = "Charge breakdown", body = ApiResponse<ChargeBreakdownDto>),
        (status = 404, description = "Unknown provider or plan"),
        (status = 422, description = "Negative usage or missing field")
    )
)]
pub async fn preview_charge(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PreviewRequest>,
) -> ApiResult<ChargeBreakdownDto> {
    let breakdown = state
        .billing
        .preview(&req.provider, &req.plan, req.total_minutes, req.total_data_usage)?;

    Ok(Json(ApiResponse::success(ChargeBreakdownDto::from(&breakdown))))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::interfaces::http::test_support::{post_json, seeded_app};

    #[tokio::test]
    async fn rates_pay_for_both() {
        let body = json!({
            "provider": "AT&T",
            "plan": "Pay for both",
            "total_minutes": 10,
            "total_data_usage": 2
        });
        let (status, json) = post_json(seeded_app().await, "/api/v1/billing/preview", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["minutes_price"], "0.60");
        assert_eq!(json["data"]["data_price"], "0.18");
        assert_eq!(json["data"]["total"], "33.26");
        assert_eq!(json["data"]["formatted_total"], "$33.26");
    }

    #[tokio::test]
    async fn unlimited_is_flat() {
        let body = json!({
            "provider": "Metro PCs",
            "plan": "Unlimited",
            "total_minutes": 900,
            "total_data_usage": 80
        });
        let (status, json) = post_json(seeded_app().await, "/api/v1/billing/preview", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["total"], "59.54");
        assert_eq!(json["data"]["minutes_price"], "0.00");
        assert_eq!(json["data"]["data_price"], "0.00");
    }

    #[tokio::test]
    async fn negative_usage_is_422() {
        let body = json!({
            "provider": "AT&T",
            "plan": "Pay for both",
            "total_minutes": -5,
            "total_data_usage": 0
        });
        let (status, json) = post_json(seeded_app().await, "/api/v1/billing/preview", body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "total_minutes: must be non-negative");
    }

    #[tokio::test]
    async fn unknown_provider_is_404() {
        let body = json!({
            "provider": "Sprint",
            "plan": "Unlimited",
            "total_minutes": 0,
            "total_data_usage": 0
        });
        let (status, _) = post_json(seeded_app().await, "/api/v1/billing/preview", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
