//! # Stratus Pagination
//!
//! Page range and page-number window calculation for console listings.
//!
//! The crate answers two questions for a listing of `total_items` split into
//! pages of `items_per_page`:
//!
//! - which items are on the current page ("showing 11 to 20 of 95"), see
//!   [`compute_range`]
//! - which page-number buttons to render, with ellipsis markers standing in for
//!   long runs of skipped pages, see [`compute_window`]
//!
//! Both are pure functions. The calculator never clamps `current_page`; use
//! [`clamp_page`] or [`PageRequest::resolve`] on the caller side first.
//!
//! ## Example
//!
//! ```
//! use stratus_pagination::{compute_range, compute_window, EllipsisPosition, PageToken};
//!
//! let range = compute_range(200, 10, 10).unwrap();
//! assert_eq!((range.start_item, range.end_item), (91, 100));
//!
//! let window = compute_window(200, 10, 10, 7).unwrap();
//! assert_eq!(window.total_pages(), 20);
//! assert_eq!(
//!     window.tokens(),
//!     &[
//!         PageToken::Page(1),
//!         PageToken::Ellipsis(EllipsisPosition::Start),
//!         PageToken::Page(9),
//!         PageToken::Page(10),
//!         PageToken::Page(11),
//!         PageToken::Ellipsis(EllipsisPosition::End),
//!         PageToken::Page(20),
//!     ]
//! );
//! ```
//!
//! ## Window policies
//!
//! - [`ReferencePolicy`] (default): fixed five-page head and tail runs and a
//!   three-page middle run
//! - [`SlotBudgetPolicy`]: run lengths derived from `max_slots`
//! - [`ElidedPolicy`]: Django's `get_elided_page_range`

pub mod calculator;
pub mod input;
pub mod navigation;
pub mod policy;
pub mod range;
pub mod request;
pub mod token;
pub mod window;

pub use calculator::{
	DEFAULT_MAX_SLOTS, MIN_MAX_SLOTS, PageWindowCalculator, compute_range, compute_window,
};
pub use input::PaginationInput;
pub use navigation::{clamp_page, navigation_target, next_page, previous_page};
pub use policy::{ElidedPolicy, ReferencePolicy, SlotBudgetPolicy, WindowPolicy};
pub use range::PaginationRange;
pub use request::{ErrorMessages, PageRequest};
pub use token::{EllipsisPosition, PageToken};
pub use window::PageWindow;

pub use stratus_exception::{Error, Result};

pub(crate) fn reject(message: String) -> Error {
	tracing::debug!(%message, "rejected pagination argument");
	Error::invalid_argument(message)
}
