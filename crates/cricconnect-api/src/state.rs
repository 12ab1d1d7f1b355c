use std::sync::Arc;

use tracing::error;

use cricconnect_db::Database;

use crate::config::Config;
use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub config: Config,
}

impl AppStateInner {
    pub fn new(db: Database, config: Config) -> AppState {
        Arc::new(Self { db, config })
    }
}

/// Run a blocking store call off the async runtime. Failures become
/// `ApiError::Persistence` carrying `context` as the client-facing message.
pub async fn run_blocking<F, T>(
    state: &AppState,
    context: &'static str,
    f: F,
) -> Result<T, ApiError>
where
    F: FnOnce(&Database) -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Persistence { context, source: e.into() }
        })?
        .map_err(|source| ApiError::Persistence { context, source })
}
