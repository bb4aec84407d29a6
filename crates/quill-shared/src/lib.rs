//! # Quill Shared
//!
//! Wire types shared between the API server and its clients: request DTOs,
//! the external post representation, and error response bodies.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
