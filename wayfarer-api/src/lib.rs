//! Read-only HTTP API over a Wayfarer catalogue.
//!
//! Responsibilities:
//! - Interpret route parameters and apply windows, projections and
//!   aggregates from `wayfarer-core` ([`Api`]).
//! - Bind those operations to an `axum` router ([`create_router`]).
//!
//! Boundaries:
//! - Do not load data; callers hand over an already built catalogue.
//! - Do not bind sockets; the binary owns the listener and runtime.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use wayfarer_api::create_router;
//! use wayfarer_core::Catalogue;
//!
//! let router = create_router(Arc::new(Catalogue::default()));
//! # let _ = router;
//! ```

#![forbid(unsafe_code)]

mod error;
mod params;
mod router;
mod service;

pub use error::ApiError;
pub use params::WindowParams;
pub use router::{WELCOME_MESSAGE, create_router};
pub use service::Api;
