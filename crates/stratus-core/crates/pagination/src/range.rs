//! Item range shown on the current page

use serde::{Deserialize, Serialize};

use crate::PaginationInput;

/// 1-indexed, inclusive bounds of the items on the current page
///
/// Both bounds are 0 for an empty listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationRange {
	pub start_item: u64,
	pub end_item: u64,
}

impl PaginationRange {
	/// The range of an empty listing
	pub const EMPTY: Self = Self {
		start_item: 0,
		end_item: 0,
	};

	/// Computes the range for a validated input
	///
	/// # Examples
	///
	/// ```
	/// use stratus_pagination::{PaginationInput, PaginationRange};
	///
	/// let input = PaginationInput::new(95, 10, 10).unwrap();
	/// let range = PaginationRange::for_input(&input);
	/// assert_eq!(range.start_item, 91);
	/// assert_eq!(range.end_item, 95);
	/// ```
	pub fn for_input(input: &PaginationInput) -> Self {
		let total_items = input.total_items();
		if total_items == 0 {
			return Self::EMPTY;
		}

		let per_page = input.items_per_page();
		let current = input.current_page();
		Self {
			start_item: (current - 1).saturating_mul(per_page).saturating_add(1),
			end_item: current.saturating_mul(per_page).min(total_items),
		}
	}

	/// Number of items shown
	///
	/// 0 for an empty listing and for a page past the end.
	pub fn len(&self) -> u64 {
		if self.start_item == 0 || self.end_item < self.start_item {
			0
		} else {
			self.end_item - self.start_item + 1
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Human readable summary for the listing footer
	///
	/// # Examples
	///
	/// ```
	/// use stratus_pagination::compute_range;
	///
	/// let range = compute_range(95, 2, 10).unwrap();
	/// assert_eq!(range.summary(95), "Showing 11 to 20 of 95 results");
	///
	/// let empty = compute_range(0, 1, 10).unwrap();
	/// assert_eq!(empty.summary(0), "No results");
	/// ```
	pub fn summary(&self, total_items: u64) -> String {
		if self.is_empty() {
			"No results".to_string()
		} else {
			format!(
				"Showing {} to {} of {} results",
				self.start_item, self.end_item, total_items
			)
		}
	}
}
