use crate::state::ShowroomState;
use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

mod cars;
mod customers;
mod purchases;

const API_ROOT_PATH: &str = "/api";

const CARS_ROOT_PATH: &str = "/cars";
const CUSTOMERS_ROOT_PATH: &str = "/customers";
const PURCHASES_ROOT_PATH: &str = "/purchases";

#[derive(OpenApi)]
#[openapi(nest(
    (path = "/api/cars", api = cars::CarDocs),
    (path = "/api/customers", api = customers::CustomerDocs),
    (path = "/api/purchases", api = purchases::PurchaseDocs),
))]
struct ApiDoc;

pub fn build(app_state: ShowroomState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes(app_state))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/swagger-ui").url("/api/api-docs/openapi.json", api))
}

pub fn routes<S>(app_state: ShowroomState) -> OpenApiRouter<S> {
    OpenApiRouter::new()
        .nest(
            API_ROOT_PATH,
            OpenApiRouter::new()
                .nest(CARS_ROOT_PATH, cars::routes())
                .nest(CUSTOMERS_ROOT_PATH, customers::routes())
                .nest(PURCHASES_ROOT_PATH, purchases::routes()),
        )
        .with_state(app_state)
}
