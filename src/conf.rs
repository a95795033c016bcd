//! Layered settings.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "conf")]
//! # {
//! use stratus::conf::settings::{EnvSource, TomlFileSource};
//! use stratus::conf::PaginationSettings;
//!
//! let settings: PaginationSettings = PaginationSettings::builder()
//!     .unwrap()
//!     .add_source(TomlFileSource::new("stratus.toml").with_section("pagination"))
//!     .add_source(EnvSource::new().with_prefix("STRATUS_PAGINATION_"))
//!     .build()
//!     .unwrap();
//! # let _ = settings;
//! # }
//! ```

#[cfg(feature = "conf")]
pub use stratus_conf::*;
