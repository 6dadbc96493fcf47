//! REST API module
//!
//! HTTP endpoints for the workstation schedule, the member roster,
//! the current holder, and the notification WebSocket.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod validated_json;

pub use dto::ApiResponse;
pub use router::{create_api_router, ApiDoc};
pub use validated_json::{ValidatedJson, ValidatedJsonRejection};
