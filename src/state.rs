//! Shared application state for all routes.

use crate::service::ServiceMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceMap>,
}

impl AppState {
    pub fn new(services: ServiceMap) -> Self {
        AppState {
            services: Arc::new(services),
        }
    }
}
