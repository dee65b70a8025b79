use crate::error::{RecordServiceError, ServiceError};
use crate::state::{CarService, ShowroomState};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::Json;
use showroom_core::RecordId;
use showroom_core::model::Vehicle;
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

const LIST_CARS_PATH: &str = "/";
const ADD_CAR_PATH: &str = "/";
const UPDATE_CAR_PATH: &str = "/";
const DELETE_CAR_PATH: &str = "/{id}";

#[derive(OpenApi)]
#[openapi(paths(list_cars, add_car, update_car, delete_car))]
pub(crate) struct CarDocs;

pub(crate) fn routes() -> OpenApiRouter<ShowroomState> {
    OpenApiRouter::new()
        .route(LIST_CARS_PATH, get(list_cars))
        .route(ADD_CAR_PATH, post(add_car))
        .route(UPDATE_CAR_PATH, put(update_car))
        .route(DELETE_CAR_PATH, delete(delete_car))
}

/// Every car currently in the archive.
#[utoipa::path(
    get,
    path = LIST_CARS_PATH,
    responses(
        (status = OK, description = "All cars", body = Vec<Vehicle>),
    ),
)]
#[instrument(skip_all, err(Debug))]
async fn list_cars(
    State(service): State<CarService>,
) -> Result<Json<Vec<Vehicle>>, ServiceError<RecordServiceError>> {
    Ok(Json(service.list_all().await?))
}

#[utoipa::path(
    post,
    path = ADD_CAR_PATH,
    responses(
        (status = OK, description = "The car was stored; any id in the body is ignored"),
    ),
    request_body = Vehicle,
)]
#[instrument(skip(service, car), err(Debug), fields(
    car.brand = car.brand,
    car.model = car.model,
))]
async fn add_car(
    State(service): State<CarService>,
    Json(car): Json<Vehicle>,
) -> Result<StatusCode, ServiceError<RecordServiceError>> {
    service.add(car).await?;
    Ok(StatusCode::OK)
}

/// The original service inserts here instead of updating; kept as-is until
/// product intent says otherwise.
#[utoipa::path(
    put,
    path = UPDATE_CAR_PATH,
    responses(
        (status = OK, description = "The car was stored as a new row"),
    ),
    request_body = Vehicle,
)]
#[instrument(skip_all, err(Debug))]
async fn update_car(
    State(service): State<CarService>,
    Json(car): Json<Vehicle>,
) -> Result<StatusCode, ServiceError<RecordServiceError>> {
    service.add(car).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = DELETE_CAR_PATH,
    responses(
        (status = OK, description = "The car is gone, whether or not it existed"),
    ),
    params(
        ("id" = RecordId, Path, description = "The car to delete"),
    ),
)]
#[instrument(skip(service), err(Debug))]
async fn delete_car(
    State(service): State<CarService>,
    Path(id): Path<RecordId>,
) -> Result<StatusCode, ServiceError<RecordServiceError>> {
    service.delete(Vehicle::with_id(id)).await?;
    Ok(StatusCode::OK)
}
