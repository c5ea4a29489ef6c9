//! Dashboard HTTP API.
//!
//! Exposes the view renderers, form handlers and sync operations as JSON
//! endpoints under `/api/`. The browser front end calls these and paints
//! the returned rows and cards.
//!
//! `dashboard_api_router()` returns a composable `Router`; `server`
//! binds it and manages shutdown.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::dashboard_api_router;
pub use server::{start_dashboard_server, DashboardServer, ServerSession};
pub use types::ApiContext;
