use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use pawmatch_core::form::FormController;
use pawmatch_core::swipe::SwipeSession;
use pawmatch_store::PetStore;

use crate::config::ServerConfig;

/// The two mutually exclusive panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Swipe,
    Admin,
}

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc`). The swipe session, form
/// controller, and panel mode are the app's per-session view state -- each
/// view owns its state explicitly and re-reads the store rather than
/// sharing snapshots with the others.
#[derive(Clone)]
pub struct AppState {
    /// The persisted pet collection.
    pub store: PetStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The current swipe-through of the deck.
    pub swipe: Arc<RwLock<SwipeSession>>,
    /// The admin panel's create/edit form.
    pub form: Arc<RwLock<FormController>>,
    /// Which panel is showing.
    pub view_mode: Arc<RwLock<ViewMode>>,
}

impl AppState {
    /// Build the app state with a swipe session initialized from the
    /// store's current contents. The app starts on the swipe panel.
    pub async fn initialize(store: PetStore, config: ServerConfig) -> Self {
        let deck = store.get_all().await;
        Self {
            store,
            config: Arc::new(config),
            swipe: Arc::new(RwLock::new(SwipeSession::new(deck))),
            form: Arc::new(RwLock::new(FormController::new())),
            view_mode: Arc::new(RwLock::new(ViewMode::Swipe)),
        }
    }
}
