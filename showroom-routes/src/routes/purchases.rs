use crate::error::{RecordServiceError, ServiceError};
use crate::state::{PurchaseService, ShowroomState};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::Json;
use showroom_core::RecordId;
use showroom_core::model::Purchase;
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

const LIST_PURCHASES_PATH: &str = "/";
const ADD_PURCHASE_PATH: &str = "/";
const UPDATE_PURCHASE_PATH: &str = "/";
const DELETE_PURCHASE_PATH: &str = "/{id}";

#[derive(OpenApi)]
#[openapi(paths(list_purchases, add_purchase, update_purchase, delete_purchase))]
pub(crate) struct PurchaseDocs;

pub(crate) fn routes() -> OpenApiRouter<ShowroomState> {
    OpenApiRouter::new()
        .route(LIST_PURCHASES_PATH, get(list_purchases))
        .route(ADD_PURCHASE_PATH, post(add_purchase))
        .route(UPDATE_PURCHASE_PATH, put(update_purchase))
        .route(DELETE_PURCHASE_PATH, delete(delete_purchase))
}

#[utoipa::path(
    get,
    path = LIST_PURCHASES_PATH,
    responses(
        (status = OK, description = "All purchases", body = Vec<Purchase>),
    ),
)]
#[instrument(skip_all, err(Debug))]
async fn list_purchases(
    State(service): State<PurchaseService>,
) -> Result<Json<Vec<Purchase>>, ServiceError<RecordServiceError>> {
    Ok(Json(service.list_all().await?))
}

/// The referenced customer and car are not checked for existence.
#[utoipa::path(
    post,
    path = ADD_PURCHASE_PATH,
    responses(
        (status = OK, description = "The purchase was stored; any id in the body is ignored"),
    ),
    request_body = Purchase,
)]
#[instrument(skip(service, purchase), err(Debug), fields(
    purchase.customer_id = purchase.customer_id,
    purchase.auto_id = purchase.auto_id,
))]
async fn add_purchase(
    State(service): State<PurchaseService>,
    Json(purchase): Json<Purchase>,
) -> Result<StatusCode, ServiceError<RecordServiceError>> {
    service.add(purchase).await?;
    Ok(StatusCode::OK)
}

/// Inserts rather than updates, like the other PUT endpoints.
#[utoipa::path(
    put,
    path = UPDATE_PURCHASE_PATH,
    responses(
        (status = OK, description = "The purchase was stored as a new row"),
    ),
    request_body = Purchase,
)]
#[instrument(skip_all, err(Debug))]
async fn update_purchase(
    State(service): State<PurchaseService>,
    Json(purchase): Json<Purchase>,
) -> Result<StatusCode, ServiceError<RecordServiceError>> {
    service.add(purchase).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = DELETE_PURCHASE_PATH,
    responses(
        (status = OK, description = "The purchase is gone, whether or not it existed"),
    ),
    params(
        ("id" = RecordId, Path, description = "The purchase to delete"),
    ),
)]
#[instrument(skip(service), err(Debug))]
async fn delete_purchase(
    State(service): State<PurchaseService>,
    Path(id): Path<RecordId>,
) -> Result<StatusCode, ServiceError<RecordServiceError>> {
    service.delete(Purchase::with_id(id)).await?;
    Ok(StatusCode::OK)
}
