//! placedoc server - HTTP API for place document synthesis
//!
//! # API Endpoints
//!
//! - `GET /synthesize/{source}/{layer}` - build a place document; `layer` is
//!   one of `venue`, `address`, `street`
//! - `GET /` - service information
//! - `GET /health` - liveness probe
//! - `GET /metrics` - Prometheus metrics
//!
//! # Responses
//!
//! | Condition | Status | Body |
//! |-----------|--------|------|
//! | Unknown layer or route | 404 | empty |
//! | Rejected parameters | 400 | rejection message, `text/plain` |
//! | Admin lookup failed | 500 | resolver's error text, `text/plain` |
//! | Success | 200 | JSON document |
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod recorder;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
