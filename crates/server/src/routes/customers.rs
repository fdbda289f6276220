use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;

use service::customer::domain::{Customer, CustomerId, CustomerRegistrationRequest, CustomerUpdateRequest};
use service::customer::repository::CustomerRepository;

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/api/v1/customers", tag = "customers",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CustomerDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list<R: CustomerRepository + 'static>(State(state): State<ServerState<R>>) -> Result<Json<Vec<Customer>>, JsonApiError> {
    let customers = state.customers.get_all_customers().await?;
    info!(count = customers.len(), "list customers");
    Ok(Json(customers))
}

#[utoipa::path(
    post, path = "/api/v1/customers", tag = "customers",
    request_body = crate::openapi::CustomerRegistrationRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create<R: CustomerRepository + 'static>(
    State(state): State<ServerState<R>>,
    Json(input): Json<CustomerRegistrationRequest>,
) -> Result<(StatusCode, Json<Customer>), JsonApiError> {
    let created = state.customers.add_customer(input).await?;
    info!(id = created.id, "created customer");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get<R: CustomerRepository + 'static>(
    State(state): State<ServerState<R>>,
    Path(id): Path<CustomerId>,
) -> Result<Json<Customer>, JsonApiError> {
    Ok(Json(state.customers.get_customer(id).await?))
}

#[utoipa::path(
    put, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerUpdateRequestDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 400, description = "No changes or invalid values", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update<R: CustomerRepository + 'static>(
    State(state): State<ServerState<R>>,
    Path(id): Path<CustomerId>,
    Json(input): Json<CustomerUpdateRequest>,
) -> Result<Json<Customer>, JsonApiError> {
    let updated = state.customers.update_customer(id, input).await?;
    info!(id = updated.id, "updated customer");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete<R: CustomerRepository + 'static>(
    State(state): State<ServerState<R>>,
    Path(id): Path<CustomerId>,
) -> Result<StatusCode, JsonApiError> {
    state.customers.delete_customer_by_id(id).await?;
    info!(id = id, "deleted customer");
    Ok(StatusCode::NO_CONTENT)
}
