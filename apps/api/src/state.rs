use std::sync::Arc;

use crate::config::Config;
use crate::store::PortfolioSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Where projects, skills and history come from. Default: the fixture snapshot.
    pub source: Arc<dyn PortfolioSource>,
    pub config: Config,
}
