//! Validated calculator input

use serde::Serialize;

use crate::{Result, reject};

/// Item count, page position and page size for one calculation
///
/// Values are validated on construction: `total_items >= 0`,
/// `current_page >= 1` and `items_per_page >= 1`. `current_page` is NOT
/// checked against the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PaginationInput {
	total_items: u64,
	current_page: u64,
	items_per_page: u64,
}

impl PaginationInput {
	/// Validates signed inputs as they arrive from a caller
	///
	/// # Errors
	///
	/// Returns `InvalidArgument` when `total_items` is negative or
	/// `current_page`/`items_per_page` is below 1.
	///
	/// # Examples
	///
	/// ```
	/// use stratus_pagination::PaginationInput;
	///
	/// let input = PaginationInput::new(95, 2, 10).unwrap();
	/// assert_eq!(input.total_pages(), 10);
	///
	/// assert!(PaginationInput::new(-1, 1, 10).is_err());
	/// assert!(PaginationInput::new(10, 0, 10).is_err());
	/// ```
	pub fn new(total_items: i64, current_page: i64, items_per_page: i64) -> Result<Self> {
		let total_items = u64::try_from(total_items).map_err(|_| {
			reject(format!(
				"total_items must be non-negative, got {}",
				total_items
			))
		})?;
		if current_page < 1 {
			return Err(reject(format!(
				"current_page must be at least 1, got {}",
				current_page
			)));
		}
		if items_per_page < 1 {
			return Err(reject(format!(
				"items_per_page must be at least 1, got {}",
				items_per_page
			)));
		}

		Ok(Self {
			total_items,
			current_page: current_page as u64,
			items_per_page: items_per_page as u64,
		})
	}

	/// Validates unsigned counts
	///
	/// # Errors
	///
	/// Returns `InvalidArgument` when `current_page` or `items_per_page` is 0.
	pub fn from_counts(total_items: u64, current_page: u64, items_per_page: u64) -> Result<Self> {
		if current_page == 0 {
			return Err(reject("current_page must be at least 1, got 0".to_string()));
		}
		if items_per_page == 0 {
			return Err(reject(
				"items_per_page must be at least 1, got 0".to_string(),
			));
		}

		Ok(Self {
			total_items,
			current_page,
			items_per_page,
		})
	}

	pub fn total_items(&self) -> u64 {
		self.total_items
	}

	pub fn current_page(&self) -> u64 {
		self.current_page
	}

	pub fn items_per_page(&self) -> u64 {
		self.items_per_page
	}

	/// Number of pages, never less than 1
	///
	/// An empty listing still has a single (empty) page.
	///
	/// # Examples
	///
	/// ```
	/// use stratus_pagination::PaginationInput;
	///
	/// assert_eq!(PaginationInput::new(0, 1, 10).unwrap().total_pages(), 1);
	/// assert_eq!(PaginationInput::new(100, 1, 10).unwrap().total_pages(), 10);
	/// assert_eq!(PaginationInput::new(101, 1, 10).unwrap().total_pages(), 11);
	/// ```
	pub fn total_pages(&self) -> u64 {
		page_count(self.total_items, self.items_per_page)
	}
}

/// Pages needed for `total_items`; never less than 1
///
/// A zero page size counts as a single page.
pub(crate) fn page_count(total_items: u64, items_per_page: u64) -> u64 {
	match items_per_page {
		0 => 1,
		per_page => total_items.div_ceil(per_page).max(1),
	}
}
