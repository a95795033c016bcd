//! Page tokens: one rendered slot of a page-number strip

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the current page an ellipsis stands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EllipsisPosition {
	/// Between the first page and the pages around the current one
	Start,
	/// Between the pages around the current one and the last page
	End,
}

/// One slot in the page-number strip
///
/// Serialized adjacently tagged so that a rendering layer can tell the cases
/// apart without string matching:
///
/// ```
/// use stratus_pagination::{EllipsisPosition, PageToken};
///
/// let json = serde_json::to_string(&PageToken::Page(3)).unwrap();
/// assert_eq!(json, r#"{"kind":"page","value":3}"#);
///
/// let json = serde_json::to_string(&PageToken::Ellipsis(EllipsisPosition::Start)).unwrap();
/// assert_eq!(json, r#"{"kind":"ellipsis","value":"start"}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PageToken {
	/// A clickable page number (1-indexed)
	Page(u64),
	/// A non-interactive marker for skipped pages
	Ellipsis(EllipsisPosition),
}

impl PageToken {
	/// Returns the page number, or `None` for an ellipsis
	pub fn page_number(&self) -> Option<u64> {
		match self {
			Self::Page(number) => Some(*number),
			Self::Ellipsis(_) => None,
		}
	}

	pub fn is_ellipsis(&self) -> bool {
		matches!(self, Self::Ellipsis(_))
	}

	/// Returns true if this token is the page `number`
	pub fn is_page(&self, number: u64) -> bool {
		self.page_number() == Some(number)
	}
}

impl fmt::Display for PageToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Page(number) => write!(f, "{}", number),
			Self::Ellipsis(_) => f.write_str("..."),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_page_number() {
		assert_eq!(PageToken::Page(4).page_number(), Some(4));
		assert_eq!(
			PageToken::Ellipsis(EllipsisPosition::End).page_number(),
			None
		);
	}

	#[rstest]
	fn test_is_page() {
		assert!(PageToken::Page(4).is_page(4));
		assert!(!PageToken::Page(4).is_page(5));
		assert!(!PageToken::Ellipsis(EllipsisPosition::Start).is_page(4));
	}

	#[rstest]
	#[case(PageToken::Page(12), "12")]
	#[case(PageToken::Ellipsis(EllipsisPosition::Start), "...")]
	#[case(PageToken::Ellipsis(EllipsisPosition::End), "...")]
	fn test_display(#[case] token: PageToken, #[case] expected: &str) {
		assert_eq!(token.to_string(), expected);
	}

	#[rstest]
	fn test_deserialize_from_wire_shape() {
		let token: PageToken = serde_json::from_str(r#"{"kind":"ellipsis","value":"end"}"#).unwrap();
		assert_eq!(token, PageToken::Ellipsis(EllipsisPosition::End));

		let token: PageToken = serde_json::from_str(r#"{"kind":"page","value":7}"#).unwrap();
		assert_eq!(token, PageToken::Page(7));
	}
}
