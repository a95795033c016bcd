//! Navigation helpers for page-number strips
//!
//! A navigation request is honoured only for a page token inside
//! `[1, total_pages]` that is not the current page. Anything else (an
//! ellipsis, "previous" on page 1, a stale page number) is a no-op and
//! yields `None` rather than an error.

use crate::PageToken;

/// Page to navigate to when `token` is selected
///
/// # Examples
///
/// ```
/// use stratus_pagination::{navigation_target, EllipsisPosition, PageToken};
///
/// assert_eq!(navigation_target(&PageToken::Page(3), 1, 10), Some(3));
/// assert_eq!(navigation_target(&PageToken::Page(1), 1, 10), None);
/// assert_eq!(navigation_target(&PageToken::Page(11), 1, 10), None);
/// assert_eq!(
///     navigation_target(&PageToken::Ellipsis(EllipsisPosition::End), 1, 10),
///     None
/// );
/// ```
pub fn navigation_target(token: &PageToken, current_page: u64, total_pages: u64) -> Option<u64> {
	match *token {
		PageToken::Page(number)
			if (1..=total_pages).contains(&number) && number != current_page =>
		{
			Some(number)
		}
		_ => None,
	}
}

/// Target of a "previous" control, `None` when it should be disabled
pub fn previous_page(current_page: u64, total_pages: u64) -> Option<u64> {
	let page = current_page.checked_sub(1)?;
	navigation_target(&PageToken::Page(page), current_page, total_pages)
}

/// Target of a "next" control, `None` when it should be disabled
pub fn next_page(current_page: u64, total_pages: u64) -> Option<u64> {
	let page = current_page.checked_add(1)?;
	navigation_target(&PageToken::Page(page), current_page, total_pages)
}

/// Constrains a requested page into `[1, total_pages]`
///
/// The calculator never does this itself; callers clamp before computing.
///
/// # Examples
///
/// ```
/// use stratus_pagination::clamp_page;
///
/// assert_eq!(clamp_page(0, 10), 1);
/// assert_eq!(clamp_page(-4, 10), 1);
/// assert_eq!(clamp_page(7, 10), 7);
/// assert_eq!(clamp_page(42, 10), 10);
/// ```
pub fn clamp_page(requested: i64, total_pages: u64) -> u64 {
	let last = total_pages.max(1);
	u64::try_from(requested).unwrap_or(0).clamp(1, last)
}
