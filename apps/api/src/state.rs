use std::sync::Arc;

use crate::assets::logo::LogoSource;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration; the logo source is built from it at startup.
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable logo backend. Default: HTTP fetch with timeout; reports
    /// degrade to a text header when it yields nothing.
    pub logo: Arc<dyn LogoSource>,
}
