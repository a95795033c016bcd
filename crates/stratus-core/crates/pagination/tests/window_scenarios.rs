//! Listing scenarios for the page window calculator
//!
//! Each case is a listing state the console renders, checked end to end
//! through the public `compute_range`/`compute_window` surface.

use rstest::*;
use stratus_pagination::{
	DEFAULT_MAX_SLOTS, EllipsisPosition, Error, PageRequest, PageToken, compute_range,
	compute_window,
};

const START: &str = "...<";
const END: &str = "...>";

/// Renders tokens compactly: page numbers, `...<` and `...>` for ellipses
fn render(tokens: &[PageToken]) -> Vec<String> {
	tokens
		.iter()
		.map(|token| match token {
			PageToken::Page(n) => n.to_string(),
			PageToken::Ellipsis(EllipsisPosition::Start) => START.to_string(),
			PageToken::Ellipsis(EllipsisPosition::End) => END.to_string(),
		})
		.collect()
}

#[rstest]
#[case::first_page_of_ten(100, 1, 10, &["1", "2", "3", "4", "5", END, "10"])]
#[case::fits_without_ellipsis(50, 1, 10, &["1", "2", "3", "4", "5"])]
#[case::last_page_of_twenty(200, 20, 10, &["1", START, "16", "17", "18", "19", "20"])]
#[case::middle_of_twenty(200, 10, 10, &["1", START, "9", "10", "11", END, "20"])]
#[case::empty_listing(0, 1, 10, &["1"])]
#[case::exactly_seven_pages(70, 4, 10, &["1", "2", "3", "4", "5", "6", "7"])]
#[case::eight_pages_page_four(80, 4, 10, &["1", "2", "3", "4", "5", END, "8"])]
#[case::eight_pages_page_five(80, 5, 10, &["1", START, "4", "5", "6", "7", "8"])]
#[case::partial_last_page_listing(95, 6, 10, &["1", START, "5", "6", "7", END, "10"])]
fn test_window_scenarios(
	#[case] total_items: i64,
	#[case] current_page: i64,
	#[case] items_per_page: i64,
	#[case] expected: &[&str],
) {
	let window = compute_window(
		total_items,
		current_page,
		items_per_page,
		DEFAULT_MAX_SLOTS as i64,
	)
	.unwrap();

	assert_eq!(render(window.tokens()), expected);
}

#[rstest]
#[case(100, 1, 10, 1, 10)]
#[case(50, 1, 10, 1, 10)]
#[case(200, 20, 10, 191, 200)]
#[case(200, 10, 10, 91, 100)]
#[case(0, 1, 10, 0, 0)]
#[case(95, 10, 10, 91, 95)]
fn test_range_scenarios(
	#[case] total_items: i64,
	#[case] current_page: i64,
	#[case] items_per_page: i64,
	#[case] start: u64,
	#[case] end: u64,
) {
	let range = compute_range(total_items, current_page, items_per_page).unwrap();
	assert_eq!((range.start_item, range.end_item), (start, end));
}

#[rstest]
fn test_empty_listing_has_one_page() {
	let window = compute_window(0, 1, 10, 7).unwrap();
	assert_eq!(window.total_pages(), 1);
	assert_eq!(window.tokens(), &[PageToken::Page(1)]);
}

#[rstest]
#[case::negative_total(-1, 1, 10, 7)]
#[case::zero_page(10, 0, 10, 7)]
#[case::negative_page(10, -1, 10, 7)]
#[case::zero_page_size(10, 1, 0, 7)]
#[case::negative_page_size(10, 1, -10, 7)]
#[case::slots_too_small(10, 1, 10, 4)]
fn test_invalid_arguments(
	#[case] total_items: i64,
	#[case] current_page: i64,
	#[case] items_per_page: i64,
	#[case] max_slots: i64,
) {
	let err = compute_window(total_items, current_page, items_per_page, max_slots).unwrap_err();
	assert!(matches!(err, Error::InvalidArgument(_)));
}

#[rstest]
fn test_compute_range_rejects_negative_total() {
	assert!(matches!(
		compute_range(-1, 1, 10),
		Err(Error::InvalidArgument(_))
	));
}

#[rstest]
fn test_wider_slot_count_only_changes_the_fit_threshold() {
	// 9 pages fit in 9 slots
	let window = compute_window(90, 5, 10, 9).unwrap();
	assert_eq!(window.len(), 9);
	assert!(window.iter().all(|t| !t.is_ellipsis()));

	// 10 pages do not; the elided shape is the same as with 7 slots
	let wide = compute_window(100, 5, 10, 9).unwrap();
	let narrow = compute_window(100, 5, 10, 7).unwrap();
	assert_eq!(wide, narrow);
}

#[rstest]
#[case::five_slots_six_pages(60, 1, 5, &["1", "2", "3", "4", "5", "6"])]
#[case::six_slots_seven_pages(70, 7, 6, &["1", "2", "3", "4", "5", "6", "7"])]
#[case::five_slots_eight_pages(80, 1, 5, &["1", "2", "3", "4", "5", END, "8"])]
fn test_narrow_slot_counts_still_fit_seven_pages(
	#[case] total_items: i64,
	#[case] current_page: i64,
	#[case] max_slots: i64,
	#[case] expected: &[&str],
) {
	// An ellipsis never stands in for a single page, so up to seven pages
	// are always listed in full.
	let window = compute_window(total_items, current_page, 10, max_slots).unwrap();
	assert_eq!(render(window.tokens()), expected);
}

#[rstest]
fn test_request_to_window_flow() {
	// ?page=last&page_size=20 on a listing of 430 instances
	let request = PageRequest::new();
	let input = request.resolve(430, Some("last"), Some("20")).unwrap();

	let range = compute_range(
		input.total_items() as i64,
		input.current_page() as i64,
		input.items_per_page() as i64,
	)
	.unwrap();
	assert_eq!(range.summary(430), "Showing 421 to 430 of 430 results");

	let window = compute_window(
		input.total_items() as i64,
		input.current_page() as i64,
		input.items_per_page() as i64,
		7,
	)
	.unwrap();
	assert_eq!(
		render(window.tokens()),
		["1", START, "18", "19", "20", "21", "22"]
	);
	assert_eq!(
		window.navigation_target(&PageToken::Page(18), input.current_page()),
		Some(18)
	);
	assert_eq!(
		window.navigation_target(&PageToken::Page(22), input.current_page()),
		None
	);
}
