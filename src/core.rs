//! Core types: the shared error type and the pagination calculator.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "core")]
//! use stratus::core::exception::Error;
//! # #[cfg(feature = "core")]
//! use stratus::core::pagination::{ReferencePolicy, SlotBudgetPolicy};
//! ```

#[cfg(feature = "core")]
pub use stratus_core::*;
