use std::sync::Arc;

use crate::{
    clock::{Clock, SystemClock},
    items::service::ItemService,
    repositories::{
        InMemoryItemRepository, InMemoryUserRepository, ItemRepositoryTrait, UserRepositoryTrait,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub items: ItemService,
    pub user_repo: Arc<dyn UserRepositoryTrait + Send + Sync>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// State for the running service: in-memory stores and the UTC clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Same stores with an injected clock, so tests can pin "today".
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let item_repo: Arc<dyn ItemRepositoryTrait + Send + Sync> =
            Arc::new(InMemoryItemRepository::new());
        Self {
            items: ItemService::new(item_repo),
            user_repo: Arc::new(InMemoryUserRepository::new()),
            clock,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
