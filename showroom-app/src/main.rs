use crate::app::{AppError, AppProperties, AppResult};
use dotenv::dotenv;
use error_stack::ResultExt;
use error_stack::fmt::ColorMode;
use repositories::postgres::ConnectionDetails;
use repositories::postgres::initializer::ArchiveCreator;
use showroom_routes::state::ShowroomState;
use tracing::{debug, error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod app;

#[tokio::main]
async fn main() {
    match try_main().await {
        Ok(_) => info!("showroom service shutting down"),
        Err(e) => {
            error!("showroom service exited with error: {e:?}");
        }
    }
}

fn init_logging() {
    error_stack::Report::set_color_mode(ColorMode::None);

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("SHOWROOM_LOG"))
        .init();
}

async fn try_main() -> AppResult<()> {
    init_logging();

    if let Err(e) = dotenv() {
        warn!("failed to load .env file: {e}");
    }

    let db_connection_str = std::env::var("DATABASE_URL")
        .change_context(AppError)
        .attach("DATABASE_URL is missing")?;

    debug!("initializing archives");
    let archives = ArchiveCreator::default()
        .create(ConnectionDetails::Url(db_connection_str))
        .await
        .change_context(AppError)?;

    let routes = showroom_routes::routes::build(ShowroomState::new(archives));

    app::run(routes, AppProperties { port: 3000 }).await
}
