use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use service::customer::domain::{Customer, CustomerDraft};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[utoipa::path(
    get,
    path = "/api/customer-service/customers",
    tag = "customer",
    responses(
        (status = 200, description = "All customers", body = [CustomerDoc]),
        (status = 204, description = "No customers exist")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let customers = state.service.list().await?;
    if customers.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(customers).into_response())
}

#[utoipa::path(
    get,
    path = "/api/customer-service/customers/{id}",
    tag = "customer",
    params(("id" = i64, Path, description = "Customer id, must be positive")),
    responses(
        (status = 200, description = "The customer, or an error body for unknown/invalid ids", body = CustomerDoc)
    )
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Customer>, ApiError> {
    let Path(id) = id?;
    let customer = state.service.get_by_id(id).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    post,
    path = "/api/customer-service/customers",
    tag = "customer",
    request_body = CustomerDraftDoc,
    responses(
        (status = 201, description = "Customer created", body = CustomerDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    draft: Result<Json<CustomerDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let Json(draft) = draft?;
    let created = state.service.create(draft).await?;
    info!(customer_id = created.id, "created customer");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/customer-service/customers/{id}",
    tag = "customer",
    params(("id" = i64, Path, description = "Customer id, must be positive")),
    request_body = CustomerDraftDoc,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    draft: Result<Json<CustomerDraft>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    let Path(id) = id?;
    let Json(draft) = draft?;
    let updated = state.service.update(id, draft).await?;
    info!(customer_id = updated.id, "updated customer");
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/customer-service/customers/{id}",
    tag = "customer",
    params(("id" = i64, Path, description = "Customer id, must be positive")),
    responses(
        (status = 204, description = "Customer deleted")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.service.delete(id).await?;
    info!(customer_id = id, "deleted customer");
    Ok(StatusCode::NO_CONTENT)
}
