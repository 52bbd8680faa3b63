use axum::extract::FromRef;
use std::sync::Arc;
use std::time::Instant;

use crate::cache::DashboardCache;
use crate::editorial::Editorial;

use super::ServerConfig;

pub type GuardedDashboardCache = Arc<DashboardCache>;
pub type SharedEditorial = Arc<Editorial>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub cache: GuardedDashboardCache,
    pub editorial: SharedEditorial,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        cache: GuardedDashboardCache,
        editorial: SharedEditorial,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            cache,
            editorial,
        }
    }
}

impl FromRef<ServerState> for GuardedDashboardCache {
    fn from_ref(input: &ServerState) -> Self {
        input.cache.clone()
    }
}

impl FromRef<ServerState> for SharedEditorial {
    fn from_ref(input: &ServerState) -> Self {
        input.editorial.clone()
    }
}
