use std::sync::Arc;

use cors_header_scrutiny::{ConfigError, HeaderScrutiny, ScrutinyOptions};

pub mod middleware;

pub type SharedScrutiny = Arc<HeaderScrutiny>;

#[derive(Clone)]
pub struct AppState {
    pub scrutiny: SharedScrutiny,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ConfigError> {
    let raw = std::env::var("SCRUTINY_EXCLUSION_PATHS").ok();
    let options = ScrutinyOptions::from_parameter(raw.as_deref().or(Some("/hooks")))?;

    let scrutiny = Arc::new(HeaderScrutiny::new(options)?);

    Ok(AppState {
        scrutiny,
        greeting: "Welcome to the Axum header scrutiny example!",
    })
}
