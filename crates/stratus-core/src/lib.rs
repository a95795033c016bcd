//! # Stratus Core
//!
//! Core components for the Stratus console.
//!
//! - [`exception`]: the shared `Error` type and `Result` alias
//! - [`pagination`]: page ranges, page-number windows and navigation helpers

#[cfg(feature = "exception")]
pub use stratus_exception as exception;

#[cfg(feature = "pagination")]
pub use stratus_pagination as pagination;
