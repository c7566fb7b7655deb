/// The core application state that holds configuration and shared resources.
///
/// This struct contains all the data that needs to be shared across async
/// tasks in the application.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) to allow safe concurrent reads and
/// occasional writes from multiple tasks.
#[derive(Debug, Clone)]
pub struct State {
    /// The loaded application configuration.
    pub config: ablpanel_bridge::config::Config,
    /// Shared API client for the configured OctoPrint instance.
    pub api: ablpanel_octoprint::api::ApiClient,
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
///
/// This is the recommended way to pass state into async handlers, background
/// tasks, or any context where multiple tasks need read access (and occasional
/// write access).
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
