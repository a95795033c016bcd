//! The page-number strip returned by the calculator

use serde::{Deserialize, Serialize};

use crate::PageToken;
use crate::navigation::navigation_target;

/// Ordered page tokens plus the page count they were computed for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageWindow {
	total_pages: u64,
	tokens: Vec<PageToken>,
}

impl PageWindow {
	pub(crate) fn new(total_pages: u64, tokens: Vec<PageToken>) -> Self {
		Self {
			total_pages,
			tokens,
		}
	}

	/// Page count of the listing, at least 1
	pub fn total_pages(&self) -> u64 {
		self.total_pages
	}

	pub fn tokens(&self) -> &[PageToken] {
		&self.tokens
	}

	pub fn into_tokens(self) -> Vec<PageToken> {
		self.tokens
	}

	/// Number of rendered slots (pages and ellipses)
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, PageToken> {
		self.tokens.iter()
	}

	/// Page numbers present in the strip, in order
	///
	/// # Examples
	///
	/// ```
	/// use stratus_pagination::compute_window;
	///
	/// let window = compute_window(100, 1, 10, 7).unwrap();
	/// let pages: Vec<u64> = window.page_numbers().collect();
	/// assert_eq!(pages, vec![1, 2, 3, 4, 5, 10]);
	/// ```
	pub fn page_numbers(&self) -> impl Iterator<Item = u64> + '_ {
		self.tokens.iter().filter_map(PageToken::page_number)
	}

	pub fn contains_page(&self, number: u64) -> bool {
		self.tokens.iter().any(|token| token.is_page(number))
	}

	/// Page to navigate to when `token` is selected, or `None` for a no-op
	///
	/// See [`navigation_target`].
	pub fn navigation_target(&self, token: &PageToken, current_page: u64) -> Option<u64> {
		navigation_target(token, current_page, self.total_pages)
	}
}

impl IntoIterator for PageWindow {
	type Item = PageToken;
	type IntoIter = std::vec::IntoIter<PageToken>;

	fn into_iter(self) -> Self::IntoIter {
		self.tokens.into_iter()
	}
}

impl<'a> IntoIterator for &'a PageWindow {
	type Item = &'a PageToken;
	type IntoIter = std::slice::Iter<'a, PageToken>;

	fn into_iter(self) -> Self::IntoIter {
		self.tokens.iter()
	}
}
