//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, the push-socket
//! listener, and the message dispatch loop that listens to frontend bridge
//! requests.

use std::{sync::Arc, thread};

use ablpanel_bridge::{MessageFromBackend, MessageToBackend};
use ablpanel_octoprint::api::ApiClient;
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::app::AppContext;
use crate::state::State;

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let config = crate::config::load_config()
        .await
        .expect("failed to load config");

    let api = ApiClient::new(&config.server.base_url, config.server.api_key.clone())
        .expect("failed to build API client from configuration");

    let state = Arc::new(RwLock::new(State { config, api }));

    let context = Arc::new(AppContext { state, tx });

    let push_context = context.clone();
    tokio::spawn(async move {
        crate::services::push_service::run_push_listener(push_context).await;
    });

    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_backend(rx, tx).await });
    });
}
