//! Window policies: which page numbers a strip shows
//!
//! A policy only decides the token sequence. Inputs are already validated by
//! [`PageWindowCalculator`](crate::PageWindowCalculator): `total_pages >= 1`
//! and `max_slots >= MIN_MAX_SLOTS`.
//!
//! Every policy here keeps two guarantees:
//!
//! - the strip starts with page 1 and ends with the last page
//! - an ellipsis always stands for two or more pages; a gap of exactly one
//!   page shows that page instead

use std::collections::BTreeSet;

use crate::{EllipsisPosition, PageToken};

/// Strategy producing the page-number strip
pub trait WindowPolicy: Send + Sync {
	/// Produces the tokens for `current_page` out of `total_pages`
	fn tokens(&self, current_page: u64, total_pages: u64, max_slots: u64) -> Vec<PageToken>;
}

/// The console's listing strip
///
/// Shows every page when they fit, otherwise one of three shapes:
///
/// | current page            | strip                                  |
/// |-------------------------|----------------------------------------|
/// | `<= 4`                  | `1 2 3 4 5 … N`                        |
/// | `>= N - 3`              | `1 … N-4 N-3 N-2 N-1 N`                |
/// | anything else           | `1 … c-1 c c+1 … N`                    |
///
/// The run lengths are fixed and do not follow `max_slots`; `max_slots` only
/// decides when every page fits. Below seven pages the elided shapes would
/// hide a single page behind an ellipsis, so the full strip is used up to
/// `max(max_slots, 7)` pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferencePolicy;

impl ReferencePolicy {
	const HEAD_PAGES: u64 = 5;
	const TAIL_PAGES: u64 = 5;
	const ELIDED_SLOTS: u64 = 7;
}

impl WindowPolicy for ReferencePolicy {
	fn tokens(&self, current_page: u64, total_pages: u64, max_slots: u64) -> Vec<PageToken> {
		if total_pages <= max_slots.max(Self::ELIDED_SLOTS) {
			return full_strip(total_pages);
		}

		let mut tokens = Vec::with_capacity(Self::ELIDED_SLOTS as usize);
		if current_page <= Self::HEAD_PAGES - 1 {
			tokens.extend((1..=Self::HEAD_PAGES).map(PageToken::Page));
			tokens.push(PageToken::Ellipsis(EllipsisPosition::End));
			tokens.push(PageToken::Page(total_pages));
		} else if current_page >= total_pages - (Self::TAIL_PAGES - 2) {
			tokens.push(PageToken::Page(1));
			tokens.push(PageToken::Ellipsis(EllipsisPosition::Start));
			tokens.extend((total_pages - (Self::TAIL_PAGES - 1)..=total_pages).map(PageToken::Page));
		} else {
			tokens.push(PageToken::Page(1));
			tokens.push(PageToken::Ellipsis(EllipsisPosition::Start));
			tokens.extend((current_page - 1..=current_page + 1).map(PageToken::Page));
			tokens.push(PageToken::Ellipsis(EllipsisPosition::End));
			tokens.push(PageToken::Page(total_pages));
		}
		tokens
	}
}

/// Strip whose run lengths follow `max_slots`
///
/// Head and tail runs hold `max_slots - 2` pages and the middle run
/// `max_slots - 4`, so the strip never exceeds `max_slots` slots. At
/// `max_slots = 7` the output is identical to [`ReferencePolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotBudgetPolicy;

impl WindowPolicy for SlotBudgetPolicy {
	fn tokens(&self, current_page: u64, total_pages: u64, max_slots: u64) -> Vec<PageToken> {
		if total_pages <= max_slots {
			return full_strip(total_pages);
		}

		// total_pages > max_slots >= 5, so none of these underflow.
		let edge = max_slots - 2;
		let middle = max_slots - 4;
		let pages: Vec<u64> = if current_page < edge {
			(1..=edge).chain([total_pages]).collect()
		} else if current_page > total_pages - (edge - 1) {
			[1].into_iter()
				.chain(total_pages - edge + 1..=total_pages)
				.collect()
		} else {
			let before = (middle - 1) / 2;
			let after = middle - 1 - before;
			[1].into_iter()
				.chain(current_page - before..=current_page + after)
				.chain([total_pages])
				.collect()
		};
		elide(&pages, current_page)
	}
}

/// Django's elided page range
///
/// Shows `on_ends` pages at each end and `on_each_side` pages around the
/// current one. `max_slots` is ignored; the strip holds at most
/// `2 * (on_each_side + on_ends) + 3` slots.
///
/// # Examples
///
/// ```
/// use stratus_pagination::{ElidedPolicy, PageToken, WindowPolicy};
///
/// let tokens = ElidedPolicy::new(1, 1).tokens(15, 30, 7);
/// let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["1", "...", "14", "15", "16", "...", "30"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElidedPolicy {
	on_each_side: u64,
	on_ends: u64,
}

impl ElidedPolicy {
	/// Creates the policy; `on_ends` is raised to 1 so the first and last
	/// pages stay reachable
	pub fn new(on_each_side: u64, on_ends: u64) -> Self {
		Self {
			on_each_side,
			on_ends: on_ends.max(1),
		}
	}

	pub fn on_each_side(&self) -> u64 {
		self.on_each_side
	}

	pub fn on_ends(&self) -> u64 {
		self.on_ends
	}
}

impl Default for ElidedPolicy {
	fn default() -> Self {
		Self::new(3, 2)
	}
}

impl WindowPolicy for ElidedPolicy {
	fn tokens(&self, current_page: u64, total_pages: u64, _max_slots: u64) -> Vec<PageToken> {
		let needed = self
			.on_each_side
			.saturating_mul(2)
			.saturating_add(1)
			.saturating_add(self.on_ends.saturating_mul(2));
		if total_pages <= needed {
			return full_strip(total_pages);
		}

		let current = current_page.min(total_pages);
		let mut pages = BTreeSet::new();
		pages.extend(1..=self.on_ends);
		pages.extend(
			current.saturating_sub(self.on_each_side).max(1)
				..=current.saturating_add(self.on_each_side).min(total_pages),
		);
		pages.extend(total_pages - self.on_ends + 1..=total_pages);

		let pages: Vec<u64> = pages.into_iter().collect();
		elide(&pages, current)
	}
}

fn full_strip(total_pages: u64) -> Vec<PageToken> {
	(1..=total_pages).map(PageToken::Page).collect()
}

/// Turns ascending page numbers into tokens, marking gaps
fn elide(pages: &[u64], current_page: u64) -> Vec<PageToken> {
	let mut tokens = Vec::with_capacity(pages.len() + 2);
	let mut previous: Option<u64> = None;

	for &page in pages {
		if let Some(prev) = previous {
			if page <= prev {
				continue;
			}
			match page - prev {
				1 => {}
				2 => tokens.push(PageToken::Page(prev + 1)),
				_ => {
					let position = if page <= current_page {
						EllipsisPosition::Start
					} else {
						EllipsisPosition::End
					};
					tokens.push(PageToken::Ellipsis(position));
				}
			}
		}
		tokens.push(PageToken::Page(page));
		previous = Some(page);
	}

	tokens
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const E_START: PageToken = PageToken::Ellipsis(EllipsisPosition::Start);
	const E_END: PageToken = PageToken::Ellipsis(EllipsisPosition::End);

	fn pages(numbers: &[u64]) -> Vec<PageToken> {
		numbers.iter().copied().map(PageToken::Page).collect()
	}

	#[rstest]
	fn test_reference_full_strip() {
		assert_eq!(ReferencePolicy.tokens(1, 5, 7), pages(&[1, 2, 3, 4, 5]));
		assert_eq!(ReferencePolicy.tokens(3, 7, 7), pages(&[1, 2, 3, 4, 5, 6, 7]));
		assert_eq!(ReferencePolicy.tokens(1, 1, 7), pages(&[1]));
	}

	#[rstest]
	fn test_reference_head() {
		let mut expected = pages(&[1, 2, 3, 4, 5]);
		expected.extend([E_END, PageToken::Page(8)]);
		assert_eq!(ReferencePolicy.tokens(4, 8, 7), expected);
	}

	#[rstest]
	fn test_reference_tail_boundary() {
		// 20 - 3 = 17 is the first tail position
		let tokens = ReferencePolicy.tokens(17, 20, 7);
		let mut expected = vec![PageToken::Page(1), E_START];
		expected.extend(pages(&[16, 17, 18, 19, 20]));
		assert_eq!(tokens, expected);
	}

	#[rstest]
	fn test_reference_middle() {
		let tokens = ReferencePolicy.tokens(5, 20, 7);
		assert_eq!(
			tokens,
			vec![
				PageToken::Page(1),
				E_START,
				PageToken::Page(4),
				PageToken::Page(5),
				PageToken::Page(6),
				E_END,
				PageToken::Page(20),
			]
		);
	}

	#[rstest]
	fn test_reference_ignores_slot_count_for_run_lengths() {
		// 15 pages do not fit in 9 slots; the runs stay 5/3/5.
		assert_eq!(ReferencePolicy.tokens(8, 15, 9).len(), 7);
		// 9 pages fit in 9 slots.
		assert_eq!(ReferencePolicy.tokens(8, 9, 9), pages(&[1, 2, 3, 4, 5, 6, 7, 8, 9]));
	}

	#[rstest]
	fn test_reference_small_slot_count_keeps_full_strip() {
		assert_eq!(ReferencePolicy.tokens(1, 6, 5), pages(&[1, 2, 3, 4, 5, 6]));
	}

	#[rstest]
	#[case(1, 20)]
	#[case(4, 20)]
	#[case(5, 20)]
	#[case(10, 20)]
	#[case(16, 20)]
	#[case(17, 20)]
	#[case(20, 20)]
	#[case(1, 8)]
	#[case(5, 8)]
	#[case(500, 1000)]
	fn test_slot_budget_matches_reference_at_seven(#[case] current: u64, #[case] total: u64) {
		assert_eq!(
			SlotBudgetPolicy.tokens(current, total, 7),
			ReferencePolicy.tokens(current, total, 7)
		);
	}

	#[rstest]
	fn test_slot_budget_five_slots() {
		assert_eq!(
			SlotBudgetPolicy.tokens(1, 10, 5),
			vec![
				PageToken::Page(1),
				PageToken::Page(2),
				PageToken::Page(3),
				E_END,
				PageToken::Page(10)
			]
		);
		assert_eq!(
			SlotBudgetPolicy.tokens(5, 10, 5),
			vec![PageToken::Page(1), E_START, PageToken::Page(5), E_END, PageToken::Page(10)]
		);
		// A one-page gap shows the page instead of an ellipsis.
		assert_eq!(
			SlotBudgetPolicy.tokens(3, 10, 5),
			vec![
				PageToken::Page(1),
				PageToken::Page(2),
				PageToken::Page(3),
				E_END,
				PageToken::Page(10)
			]
		);
	}

	#[rstest]
	fn test_slot_budget_nine_slots() {
		let tokens = SlotBudgetPolicy.tokens(20, 40, 9);
		let mut expected = vec![PageToken::Page(1), E_START];
		expected.extend(pages(&[18, 19, 20, 21, 22]));
		expected.extend([E_END, PageToken::Page(40)]);
		assert_eq!(tokens, expected);
	}

	#[rstest]
	fn test_elided_not_elided() {
		assert_eq!(
			ElidedPolicy::default().tokens(1, 10, 7),
			pages(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])
		);
	}

	#[rstest]
	fn test_elided_django_example() {
		let policy = ElidedPolicy::new(3, 2);

		let mut first = pages(&[1, 2, 3, 4]);
		first.extend([E_END]);
		first.extend(pages(&[49, 50]));
		assert_eq!(policy.tokens(1, 50, 7), first);

		let mut eighth = pages(&[1, 2]);
		eighth.push(E_START);
		eighth.extend(pages(&[5, 6, 7, 8, 9, 10, 11]));
		eighth.push(E_END);
		eighth.extend(pages(&[49, 50]));
		assert_eq!(policy.tokens(8, 50, 7), eighth);

		let mut last = pages(&[1, 2]);
		last.push(E_START);
		last.extend(pages(&[47, 48, 49, 50]));
		assert_eq!(policy.tokens(50, 50, 7), last);
	}

	#[rstest]
	fn test_elided_on_ends_never_zero() {
		let policy = ElidedPolicy::new(1, 0);
		assert_eq!(policy.on_ends(), 1);
		let tokens = policy.tokens(10, 20, 7);
		assert_eq!(tokens.first(), Some(&PageToken::Page(1)));
		assert_eq!(tokens.last(), Some(&PageToken::Page(20)));
	}

	#[rstest]
	fn test_elide_fills_single_gaps() {
		assert_eq!(elide(&[1, 3, 4, 10], 4), {
			let mut expected = pages(&[1, 2, 3, 4]);
			expected.extend([E_END, PageToken::Page(10)]);
			expected
		});
	}
}
