//! Page window calculator
//!
//! [`compute_range`] and [`compute_window`] are the whole calculator surface
//! for callers holding raw integers. [`PageWindowCalculator`] is the same
//! computation as a reusable value with a configurable slot count and
//! [`WindowPolicy`].

use crate::{
	PageWindow, PaginationInput, PaginationRange, ReferencePolicy, Result, WindowPolicy, reject,
};

/// Slot count used when a caller does not pick one
pub const DEFAULT_MAX_SLOTS: u64 = 7;

/// Smallest slot count that still fits first page, ellipsis, current page,
/// ellipsis and last page
pub const MIN_MAX_SLOTS: u64 = 5;

/// Computes the items shown on the current page
///
/// # Errors
///
/// Returns `InvalidArgument` if `total_items < 0`, `current_page < 1` or
/// `items_per_page < 1`.
///
/// # Examples
///
/// ```
/// use stratus_pagination::compute_range;
///
/// let range = compute_range(100, 1, 10).unwrap();
/// assert_eq!((range.start_item, range.end_item), (1, 10));
///
/// let empty = compute_range(0, 1, 10).unwrap();
/// assert_eq!((empty.start_item, empty.end_item), (0, 0));
///
/// assert!(compute_range(-1, 1, 10).is_err());
/// ```
pub fn compute_range(
	total_items: i64,
	current_page: i64,
	items_per_page: i64,
) -> Result<PaginationRange> {
	let input = PaginationInput::new(total_items, current_page, items_per_page)?;
	Ok(PaginationRange::for_input(&input))
}

/// Computes the page-number strip with the default [`ReferencePolicy`]
///
/// Pass [`DEFAULT_MAX_SLOTS`] unless the listing needs a different width.
///
/// # Errors
///
/// Returns `InvalidArgument` for the same inputs as [`compute_range`], and
/// when `max_slots < 5`.
///
/// # Examples
///
/// ```
/// use stratus_pagination::{compute_window, EllipsisPosition, PageToken};
///
/// let window = compute_window(200, 20, 10, 7).unwrap();
/// assert_eq!(
///     window.tokens(),
///     &[
///         PageToken::Page(1),
///         PageToken::Ellipsis(EllipsisPosition::Start),
///         PageToken::Page(16),
///         PageToken::Page(17),
///         PageToken::Page(18),
///         PageToken::Page(19),
///         PageToken::Page(20),
///     ]
/// );
/// ```
pub fn compute_window(
	total_items: i64,
	current_page: i64,
	items_per_page: i64,
	max_slots: i64,
) -> Result<PageWindow> {
	let input = PaginationInput::new(total_items, current_page, items_per_page)?;
	let max_slots = u64::try_from(max_slots).map_err(|_| {
		reject(format!(
			"max_slots must be at least {}, got {}",
			MIN_MAX_SLOTS, max_slots
		))
	})?;
	let calculator = PageWindowCalculator::new().with_max_slots(max_slots)?;
	Ok(calculator.window(&input))
}

/// Reusable range and window calculator
///
/// # Examples
///
/// ```
/// use stratus_pagination::{PageWindowCalculator, PaginationInput, SlotBudgetPolicy};
///
/// let calculator = PageWindowCalculator::new()
///     .with_policy(SlotBudgetPolicy)
///     .with_max_slots(9)
///     .unwrap();
///
/// let input = PaginationInput::new(400, 20, 10).unwrap();
/// let window = calculator.window(&input);
/// assert_eq!(window.len(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct PageWindowCalculator<P = ReferencePolicy> {
	max_slots: u64,
	policy: P,
}

impl PageWindowCalculator<ReferencePolicy> {
	/// Creates a calculator with [`DEFAULT_MAX_SLOTS`] and the reference policy
	pub fn new() -> Self {
		Self {
			max_slots: DEFAULT_MAX_SLOTS,
			policy: ReferencePolicy,
		}
	}
}

impl Default for PageWindowCalculator<ReferencePolicy> {
	fn default() -> Self {
		Self::new()
	}
}

impl<P: WindowPolicy> PageWindowCalculator<P> {
	/// Sets the slot count
	///
	/// # Errors
	///
	/// Returns `InvalidArgument` when `max_slots` is below [`MIN_MAX_SLOTS`].
	pub fn with_max_slots(mut self, max_slots: u64) -> Result<Self> {
		if max_slots < MIN_MAX_SLOTS {
			return Err(reject(format!(
				"max_slots must be at least {}, got {}",
				MIN_MAX_SLOTS, max_slots
			)));
		}
		self.max_slots = max_slots;
		Ok(self)
	}

	/// Replaces the window policy, keeping the slot count
	pub fn with_policy<Q: WindowPolicy>(self, policy: Q) -> PageWindowCalculator<Q> {
		PageWindowCalculator {
			max_slots: self.max_slots,
			policy,
		}
	}

	pub fn max_slots(&self) -> u64 {
		self.max_slots
	}

	pub fn policy(&self) -> &P {
		&self.policy
	}

	/// Items shown on the current page
	pub fn range(&self, input: &PaginationInput) -> PaginationRange {
		PaginationRange::for_input(input)
	}

	/// Page-number strip for the current page
	pub fn window(&self, input: &PaginationInput) -> PageWindow {
		let total_pages = input.total_pages();
		let tokens = self
			.policy
			.tokens(input.current_page(), total_pages, self.max_slots);
		tracing::trace!(
			current_page = input.current_page(),
			total_pages,
			max_slots = self.max_slots,
			slots = tokens.len(),
			"computed page window"
		);
		PageWindow::new(total_pages, tokens)
	}
}
