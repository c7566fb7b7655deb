//! Backend service handlers for frontend-driven requests and server pushes.
//!
//! This module groups async handlers that operate on the shared
//! `AppContext`, perform side effects (network), and emit updates or
//! notifications back to the frontend.

pub mod config_service;
pub mod leveling_service;
pub mod push_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;

/// Identifier of the server-side plugin this panel talks to. Push messages
/// tagged with any other identifier are dropped.
pub(crate) const SMARTABL_PLUGIN_ID: &str = "SmartABL";
