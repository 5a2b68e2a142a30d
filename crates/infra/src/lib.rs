mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{BookingQuery, IBookingRepo, ICustomerRepo, Repos};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::{info, warn};

/// Everything a usecase needs from the outside world. Created once at
/// startup and handed to every request.
#[derive(Clone)]
pub struct BookingContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl BookingContext {
    async fn create(params: ContextParams) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");

        info!("DB RUNNING MIGRATIONS ...");
        sqlx::migrate!()
            .run(&pool)
            .await
            .expect("Migrations to run against the booking database");
        info!("DB RUNNING MIGRATIONS ... [done]");

        Self {
            repos: Repos::create_postgres(pool),
            config: Config::new(),
            sys: Arc::new(RealSys::new()),
        }
    }

    /// Context backed by in-memory repos, used by tests and when no
    /// database is configured
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> BookingContext {
    match get_psql_connection_string() {
        Some(postgres_connection_string) => {
            BookingContext::create(ContextParams {
                postgres_connection_string,
            })
            .await
        }
        None => {
            warn!("DATABASE_URL env var is not set. Bookings will only be kept in memory.");
            BookingContext::create_inmemory()
        }
    }
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING).ok()
}
