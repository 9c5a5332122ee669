//! Typed endpoint wrappers for REST API tests against the placeholder service.
//!
//! # Overview
//! Each resource (`/comments`, `/users`) is exposed through an `Endpoint`
//! that builds the request, runs it through a `Transport`, asserts the
//! status code and optionally decodes the body into a DTO.
//!
//! # Design
//! - `Endpoint` is stateless. It owns a `RequestSpec` (base URL, headers,
//!   timeout) and a transport; there is no shared global configuration.
//! - Every operation has a `*_with_status` form returning a
//!   `ValidatedResponse` for negative tests; the plain form asserts the
//!   default status and decodes.
//! - A status mismatch is an `ApiError::UnexpectedStatus`. A body can only be
//!   extracted from a response whose status already matched.
//! - I/O is blocking (`ureq`). Tests substitute their own `Transport`.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod resources;
pub mod response;
pub mod status;
pub mod types;

pub use config::RequestSpec;
pub use endpoint::{Endpoint, Resource};
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use resources::{CommentEndpoint, Comments, UserEndpoint, Users};
pub use response::ValidatedResponse;
pub use status::HttpStatus;
pub use types::{Address, CommentDto, Company, Geo, UserDto};
