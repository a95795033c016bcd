//! # Stratus
//!
//! Listing pagination for the Stratus console.
//!
//! Every resource listing (instances, volumes, snapshots, ...) shows an
//! "items X to Y of N" footer and a compact strip of page numbers with
//! ellipses. This crate computes both from three numbers, and resolves raw
//! `?page=`/`?page_size=` parameters against layered settings.
//!
//! ## Feature Flags
//!
//! ### Presets
//!
//! - `minimal` - Pagination core only
//! - `standard` (default) - Core plus layered settings
//! - `full` - All features enabled
//!
//! ### Fine-grained Control
//!
//! - `core` - `stratus-core` (errors and pagination)
//! - `conf` - `stratus-conf` (settings sources, validation and loading)
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "core")]
//! # {
//! use stratus::prelude::*;
//!
//! let range = compute_range(200, 10, 10).unwrap();
//! assert_eq!(range.summary(200), "Showing 91 to 100 of 200 results");
//!
//! let window = compute_window(200, 10, 10, 7).unwrap();
//! let strip: Vec<String> = window.iter().map(|t| t.to_string()).collect();
//! assert_eq!(strip, ["1", "...", "9", "10", "11", "...", "20"]);
//! # }
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "core")]
pub mod core;

// Re-export pagination
#[cfg(feature = "core")]
pub use stratus_core::pagination::{
	DEFAULT_MAX_SLOTS, EllipsisPosition, PageRequest, PageToken, PageWindow,
	PageWindowCalculator, PaginationInput, PaginationRange, WindowPolicy, compute_range,
	compute_window,
};

// Re-export exception types
#[cfg(feature = "core")]
pub use stratus_core::exception::{Error, Result};

// Re-export settings
#[cfg(feature = "conf")]
pub use stratus_conf::settings::{BuildError, PaginationSettings, SettingsBuilder};

pub mod prelude {
	#[cfg(feature = "core")]
	pub use crate::{
		EllipsisPosition, Error, PageRequest, PageToken, PageWindow, PageWindowCalculator,
		PaginationInput, PaginationRange, Result, compute_range, compute_window,
	};

	// Settings feature
	#[cfg(feature = "conf")]
	pub use crate::PaginationSettings;
}

#[cfg(all(test, feature = "standard"))]
mod tests {
	use super::prelude::*;
	use rstest::rstest;

	#[rstest]
	fn test_prelude_covers_a_listing() {
		let settings = PaginationSettings::default();
		let input = settings.resolve_query(95, &[("page", "10")]).unwrap();

		let range = compute_range(
			input.total_items() as i64,
			input.current_page() as i64,
			input.items_per_page() as i64,
		)
		.unwrap();
		assert_eq!(range.summary(95), "Showing 91 to 95 of 95 results");

		let window = settings.calculator().unwrap().window(&input);
		assert_eq!(window.tokens().last(), Some(&PageToken::Page(10)));
	}
}
