//! HTTP transport for the weather lookup handler.

pub mod error;
pub mod handlers;
pub mod router;

pub use router::{AppState, create_router};
