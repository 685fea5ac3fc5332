//! Transaction REST API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreateTransactionRequest, TransactionResponse};
use crate::domain::PaymentType;
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/transactions",
    tag = "Transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction recorded", body = ApiResponse<TransactionResponse>),
        (status = 404, description = "Unknown phone number or bank account"),
        (status = 422, description = "Invalid request")
    )
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TransactionResponse>>), ApiError> {
    let payment_type: PaymentType = req.payment_type.parse()?;
    let transaction = state
        .transactions
        .make_transaction(req.customer_id, &req.phone_number, payment_type)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(transaction.into())),
    ))
}
