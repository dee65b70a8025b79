use crate::error::{RecordServiceError, ServiceError};
use crate::state::{CustomerService, ShowroomState};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::Json;
use showroom_core::RecordId;
use showroom_core::model::Customer;
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

const LIST_CUSTOMERS_PATH: &str = "/";
const ADD_CUSTOMER_PATH: &str = "/";
const UPDATE_CUSTOMER_PATH: &str = "/";
const DELETE_CUSTOMER_PATH: &str = "/{id}";

#[derive(OpenApi)]
#[openapi(paths(list_customers, add_customer, update_customer, delete_customer))]
pub(crate) struct CustomerDocs;

pub(crate) fn routes() -> OpenApiRouter<ShowroomState> {
    OpenApiRouter::new()
        .route(LIST_CUSTOMERS_PATH, get(list_customers))
        .route(ADD_CUSTOMER_PATH, post(add_customer))
        .route(UPDATE_CUSTOMER_PATH, put(update_customer))
        .route(DELETE_CUSTOMER_PATH, delete(delete_customer))
}

#[utoipa::path(
    get,
    path = LIST_CUSTOMERS_PATH,
    responses(
        (status = OK, description = "All customers", body = Vec<Customer>),
    ),
)]
#[instrument(skip_all, err(Debug))]
async fn list_customers(
    State(service): State<CustomerService>,
) -> Result<Json<Vec<Customer>>, ServiceError<RecordServiceError>> {
    Ok(Json(service.list_all().await?))
}

/// No format check on the email; whatever deserializes is stored.
#[utoipa::path(
    post,
    path = ADD_CUSTOMER_PATH,
    responses(
        (status = OK, description = "The customer was stored; any id in the body is ignored"),
    ),
    request_body = Customer,
)]
#[instrument(skip(service, customer), err(Debug), fields(customer.name = customer.name))]
async fn add_customer(
    State(service): State<CustomerService>,
    Json(customer): Json<Customer>,
) -> Result<StatusCode, ServiceError<RecordServiceError>> {
    service.add(customer).await?;
    Ok(StatusCode::OK)
}

/// Inserts rather than updates, like the other PUT endpoints.
#[utoipa::path(
    put,
    path = UPDATE_CUSTOMER_PATH,
    responses(
        (status = OK, description = "The customer was stored as a new row"),
    ),
    request_body = Customer,
)]
#[instrument(skip_all, err(Debug))]
async fn update_customer(
    State(service): State<CustomerService>,
    Json(customer): Json<Customer>,
) -> Result<StatusCode, ServiceError<RecordServiceError>> {
    service.add(customer).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = DELETE_CUSTOMER_PATH,
    responses(
        (status = OK, description = "The customer is gone, whether or not it existed"),
    ),
    params(
        ("id" = RecordId, Path, description = "The customer to delete"),
    ),
)]
#[instrument(skip(service), err(Debug))]
async fn delete_customer(
    State(service): State<CustomerService>,
    Path(id): Path<RecordId>,
) -> Result<StatusCode, ServiceError<RecordServiceError>> {
    service.delete(Customer::with_id(id)).await?;
    Ok(StatusCode::OK)
}
