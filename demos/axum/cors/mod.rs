use std::sync::Arc;

use cors_gate::{Cors, Settings, SettingsError, SharedCors};

pub mod middleware;

#[derive(Clone)]
pub struct AppState {
    pub cors: Arc<SharedCors>,
    pub greeting: &'static str,
}

impl AppState {
    pub fn new(cors: Cors) -> Self {
        Self {
            cors: Arc::new(SharedCors::new(cors)),
            greeting: "Welcome to the Axum CORS example!",
        }
    }
}

/// Builds the policy from `FRONTEND_URL` and friends.
pub fn build_state() -> Result<AppState, SettingsError> {
    let settings = Settings::load()?;
    Ok(AppState::new(settings.build_cors()?))
}
