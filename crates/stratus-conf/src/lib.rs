//! # Stratus Configuration
//!
//! Layered settings for console listings.
//!
//! Settings are merged from several sources in priority order
//! (environment variables > config files > defaults), validated, and then
//! turned into the values the pagination core consumes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stratus_conf::PaginationSettings;
//!
//! let settings = PaginationSettings::load(Some("stratus.toml")).unwrap();
//! let request = settings.page_request();
//! let calculator = settings.calculator().unwrap();
//! # let _ = (request, calculator);
//! ```
//!
//! ## Module Organization
//!
//! - [`settings`]: sources, builder, validation and the pagination settings

pub mod settings;

pub use settings::{BuildError, PaginationSettings, SettingsBuilder};
