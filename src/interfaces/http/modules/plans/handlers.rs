//! Plan catalog REST API handlers

use axum::{extract::Query, Json};

use super::dto::{PlanDto, PlanListQuery, PlanLookupQuery};
use crate::domain::plan::catalog;
use crate::domain::{resolve_entry, Provider};
use crate::interfaces::http::common::{ApiResponse, ApiResult};

#[utoipa::path(
    get,
    path = "/api/v1/plans",
    tag = "Plans",
    params(PlanListQuery),
    responses(
        (status = 200, description = "Catalog plans", body = ApiResponse<Vec<PlanDto>>),
        (status = 404, description = "Unknown provider")
    )
)]
pub async fn list_plans(Query(query): Query<PlanListQuery>) -> ApiResult<Vec<PlanDto>> {
    let provider = query
        .provider
        .as_deref()
        .map(str::parse::<Provider>)
        .transpose()?;

    let plans = catalog::entries()
        .iter()
        .filter(|e| provider.map_or(true, |p| e.rule.provider == p))
        .map(PlanDto::from)
        .collect();

    Ok(Json(ApiResponse::success(plans)))
}

#[utoipa::path(
    get,
    path = "/api/v1/plans/lookup",
    tag = "Plans",
    params(PlanLookupQuery),
    responses(
        (status = 200, description = "Pricing rule", body = ApiResponse<PlanDto>),
        (status = 404, description = "Unknown provider or plan")
    )
)]
pub async fn lookup_plan(Query(query): Query<PlanLookupQuery>) -> ApiResult<PlanDto> {
    let entry = resolve_entry(&query.provider, &query.plan)?;
    Ok(Json(ApiResponse::success(PlanDto::from(entry))))
}
