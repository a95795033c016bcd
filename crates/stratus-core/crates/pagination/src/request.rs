//! Resolving raw query parameters into calculator input
//!
//! Listings receive `?page=..&page_size=..` as strings. [`PageRequest`]
//! parses them, applies the page-size policy and clamps the page, producing
//! a [`PaginationInput`] that is safe to hand to the calculator.

use serde::{Deserialize, Serialize};

use crate::input::page_count;
use crate::{Error, PaginationInput, Result};

/// Messages used for rejected page parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessages {
	/// Page parameter is not a number
	pub invalid_page: String,
	/// Page parameter is less than 1
	pub min_page: String,
	/// Page parameter is beyond the last page
	pub no_results: String,
}

impl Default for ErrorMessages {
	fn default() -> Self {
		Self {
			invalid_page: "Invalid page number".to_string(),
			min_page: "That page number is less than 1".to_string(),
			no_results: "That page contains no results".to_string(),
		}
	}
}

/// Page-size policy and page parameter parsing for one listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
	/// Page size used when none (or an unacceptable one) is requested
	pub page_size: u64,
	/// Upper bound for a requested page size
	pub max_page_size: Option<u64>,
	/// Page sizes a client may pick; empty accepts any size
	pub page_size_options: Vec<u64>,
	/// Page parameter values meaning "the last page"
	pub last_page_strings: Vec<String>,
	pub error_messages: ErrorMessages,
}

impl Default for PageRequest {
	fn default() -> Self {
		Self {
			page_size: 10,
			max_page_size: Some(100),
			page_size_options: vec![10, 20, 50, 100],
			last_page_strings: vec!["last".to_string()],
			error_messages: ErrorMessages::default(),
		}
	}
}

impl PageRequest {
	/// Creates a request policy with default settings
	///
	/// # Examples
	///
	/// ```
	/// use stratus_pagination::PageRequest;
	///
	/// let request = PageRequest::new();
	/// assert_eq!(request.page_size, 10);
	/// assert_eq!(request.page_size_options, vec![10, 20, 50, 100]);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	pub fn page_size(mut self, size: u64) -> Self {
		self.page_size = size;
		self
	}

	pub fn max_page_size(mut self, size: u64) -> Self {
		self.max_page_size = Some(size);
		self
	}

	pub fn page_size_options(mut self, options: Vec<u64>) -> Self {
		self.page_size_options = options;
		self
	}

	pub fn last_page_strings(mut self, strings: Vec<String>) -> Self {
		self.last_page_strings = strings;
		self
	}

	pub fn error_messages(mut self, messages: ErrorMessages) -> Self {
		self.error_messages = messages;
		self
	}

	/// Parses a raw page parameter
	///
	/// Accepts positive integers, integral floats such as `"2.0"`, and the
	/// configured last-page strings. The result is NOT checked against
	/// `total_pages`.
	///
	/// # Errors
	///
	/// Returns `InvalidPage` with `min_page` for values below 1 and
	/// `invalid_page` for anything unparsable.
	///
	/// # Examples
	///
	/// ```
	/// use stratus_pagination::PageRequest;
	///
	/// let request = PageRequest::new();
	/// assert_eq!(request.parse_page_number("3", 10).unwrap(), 3);
	/// assert_eq!(request.parse_page_number("2.0", 10).unwrap(), 2);
	/// assert_eq!(request.parse_page_number("last", 10).unwrap(), 10);
	/// assert!(request.parse_page_number("0", 10).is_err());
	/// assert!(request.parse_page_number("abc", 10).is_err());
	/// ```
	pub fn parse_page_number(&self, raw: &str, total_pages: u64) -> Result<u64> {
		let raw = raw.trim();
		if self.last_page_strings.iter().any(|s| s == raw) {
			return Ok(total_pages.max(1));
		}

		if let Ok(n) = raw.parse::<i64>() {
			return if n < 1 {
				Err(Error::InvalidPage(self.error_messages.min_page.clone()))
			} else {
				Ok(n as u64)
			};
		}

		if let Ok(f) = raw.parse::<f64>()
			&& f.is_finite()
			&& f.fract() == 0.0
		{
			return if f < 1.0 {
				Err(Error::InvalidPage(self.error_messages.min_page.clone()))
			} else {
				Ok(f as u64)
			};
		}

		Err(Error::InvalidPage(self.error_messages.invalid_page.clone()))
	}

	/// Resolves a raw page-size parameter
	///
	/// Missing, unparsable, zero or unlisted sizes fall back to `page_size`;
	/// accepted sizes are capped at `max_page_size`.
	///
	/// # Examples
	///
	/// ```
	/// use stratus_pagination::PageRequest;
	///
	/// let request = PageRequest::new();
	/// assert_eq!(request.resolve_page_size(None), 10);
	/// assert_eq!(request.resolve_page_size(Some("50")), 50);
	/// assert_eq!(request.resolve_page_size(Some("30")), 10);
	/// ```
	pub fn resolve_page_size(&self, raw: Option<&str>) -> u64 {
		let Some(raw) = raw else {
			return self.page_size;
		};

		let size = match raw.trim().parse::<u64>() {
			Ok(size) if size > 0 => size,
			_ => {
				tracing::debug!(raw, fallback = self.page_size, "unparsable page size");
				return self.page_size;
			}
		};

		if !self.page_size_options.is_empty() && !self.page_size_options.contains(&size) {
			tracing::debug!(
				size,
				fallback = self.page_size,
				"page size not among the offered options"
			);
			return self.page_size;
		}

		match self.max_page_size {
			Some(max) => size.min(max),
			None => size,
		}
	}

	/// Leniently resolves raw parameters into calculator input
	///
	/// Never fails on the page parameter: an invalid page becomes page 1 and a
	/// page past the end becomes the last page.
	///
	/// # Errors
	///
	/// Returns `InvalidArgument` only when the configured `page_size` is 0.
	///
	/// # Examples
	///
	/// ```
	/// use stratus_pagination::PageRequest;
	///
	/// let request = PageRequest::new();
	///
	/// let input = request.resolve(95, Some("100"), Some("20")).unwrap();
	/// assert_eq!(input.current_page(), 5);
	/// assert_eq!(input.items_per_page(), 20);
	///
	/// let input = request.resolve(95, Some("nope"), None).unwrap();
	/// assert_eq!(input.current_page(), 1);
	/// ```
	pub fn resolve(
		&self,
		total_items: u64,
		page: Option<&str>,
		page_size: Option<&str>,
	) -> Result<PaginationInput> {
		let per_page = self.resolve_page_size(page_size);
		let total_pages = page_count(total_items, per_page);

		let current_page = match page.map(|raw| self.parse_page_number(raw, total_pages)) {
			None => 1,
			Some(Ok(number)) => number.min(total_pages),
			Some(Err(err)) => {
				tracing::debug!(error = %err, "falling back to the first page");
				1
			}
		};

		PaginationInput::from_counts(total_items, current_page, per_page)
	}

	/// Strictly resolves raw parameters into calculator input
	///
	/// # Errors
	///
	/// Returns `InvalidPage` when the page parameter is unparsable, below 1,
	/// or beyond the last page of a non-empty listing, and `InvalidArgument`
	/// when the configured `page_size` is 0.
	pub fn resolve_strict(
		&self,
		total_items: u64,
		page: Option<&str>,
		page_size: Option<&str>,
	) -> Result<PaginationInput> {
		let per_page = self.resolve_page_size(page_size);
		let total_pages = page_count(total_items, per_page);

		let current_page = match page {
			Some(raw) => self.parse_page_number(raw, total_pages)?,
			None => 1,
		};
		if current_page > total_pages {
			return Err(Error::InvalidPage(self.error_messages.no_results.clone()));
		}

		PaginationInput::from_counts(total_items, current_page, per_page)
	}
}
