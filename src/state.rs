//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Link service backed by the SQLite repository.
pub type AppLinkService = LinkService<SqliteUrlRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>) -> Self {
        Self { link_service }
    }
}
