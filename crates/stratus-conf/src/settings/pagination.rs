//! Listing pagination settings
//!
//! ## Example TOML
//!
//! ```toml
//! [pagination]
//! page_size = 20
//! max_page_size = 200
//! page_size_options = [20, 50, 200]
//! max_slots = 9
//! page_query_param = "p"
//! ```
//!
//! Every key may be overridden with a `STRATUS_PAGINATION_` environment
//! variable, e.g. `STRATUS_PAGINATION_PAGE_SIZE_OPTIONS=10,25,50`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use stratus_core::exception::{Error, Result};
use stratus_core::pagination::{
	MIN_MAX_SLOTS, PageRequest, PageWindowCalculator, PaginationInput,
};

use super::builder::{BuildError, SettingsBuilder};
use super::sources::{
	ConfigSource, DefaultSource, EnvSource, JsonFileSource, ListKind, SourceError, TomlFileSource,
	auto_source,
};
use super::validation::{RangeValidator, ValidationError};

/// Environment variable prefix for pagination settings
pub const ENV_PREFIX: &str = "STRATUS_PAGINATION_";

/// Section read from configuration files
pub const FILE_SECTION: &str = "pagination";

/// Pagination settings shared by every console listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
	/// Page size used when the client asks for none
	pub page_size: u64,
	/// Upper bound for a client-requested page size; `None` disables the cap
	pub max_page_size: Option<u64>,
	/// Page sizes offered in the page-size selector; empty accepts any size
	pub page_size_options: Vec<u64>,
	/// Slots in the page strip
	pub max_slots: u64,
	pub page_query_param: String,
	pub page_size_query_param: String,
	/// Page parameter values meaning "the last page"
	pub last_page_strings: Vec<String>,
}

impl Default for PaginationSettings {
	fn default() -> Self {
		Self {
			page_size: 10,
			max_page_size: Some(100),
			page_size_options: vec![10, 20, 50, 100],
			max_slots: 7,
			page_query_param: "page".to_string(),
			page_size_query_param: "page_size".to_string(),
			last_page_strings: vec!["last".to_string()],
		}
	}
}

impl PaginationSettings {
	/// Defaults as the lowest-priority source
	///
	/// # Errors
	///
	/// Returns `SourceError` if the defaults do not serialize to an object.
	pub fn default_source() -> std::result::Result<DefaultSource, SourceError> {
		DefaultSource::from_serializable(&Self::default())
	}

	/// `STRATUS_PAGINATION_*` environment overrides
	pub fn env_source() -> EnvSource {
		EnvSource::new()
			.with_prefix(ENV_PREFIX)
			.with_list_key("page_size_options", ListKind::Scalar)
			.with_list_key("last_page_strings", ListKind::Str)
	}

	/// Builder preloaded with defaults and the per-key range checks
	///
	/// Callers add file and environment sources on top.
	///
	/// # Errors
	///
	/// Returns `BuildError::Source` if the defaults cannot be turned into a
	/// source.
	pub fn builder() -> std::result::Result<SettingsBuilder, BuildError> {
		let defaults = Self::default_source().map_err(|error| BuildError::Source {
			source_name: "Default values".to_string(),
			error,
		})?;
		Ok(SettingsBuilder::new()
			.add_source(defaults)
			.add_validator(RangeValidator::new("page_size").min(1))
			.add_validator(RangeValidator::new("max_page_size").min(1))
			.add_validator(RangeValidator::new("max_slots").min(MIN_MAX_SLOTS as i64)))
	}

	/// Load settings from defaults, an optional file and the environment
	///
	/// The file is read from its `[pagination]` section; its format is
	/// picked from the extension (`.toml` or `.json`). A missing file is
	/// skipped.
	///
	/// # Errors
	///
	/// Returns `BuildError` when a source fails to load, a value is out of
	/// range, or the merged settings are inconsistent.
	pub fn load<P: AsRef<Path>>(path: Option<P>) -> std::result::Result<Self, BuildError> {
		let mut builder = Self::builder()?;

		if let Some(path) = path {
			builder = builder.add_boxed_source(file_source(path.as_ref())?);
		}

		let settings: Self = builder.add_source(Self::env_source()).build()?;
		settings.validate()?;

		tracing::info!(
			page_size = settings.page_size,
			max_slots = settings.max_slots,
			"pagination settings loaded"
		);
		Ok(settings)
	}

	/// Check constraints spanning several fields
	///
	/// # Errors
	///
	/// Returns every violated constraint, wrapped in `Multiple` when there
	/// is more than one.
	///
	/// # Examples
	///
	/// ```
	/// use stratus_conf::PaginationSettings;
	///
	/// assert!(PaginationSettings::default().validate().is_ok());
	///
	/// let settings = PaginationSettings {
	///     page_size: 500,
	///     max_page_size: Some(100),
	///     ..Default::default()
	/// };
	/// assert!(settings.validate().is_err());
	/// ```
	pub fn validate(&self) -> std::result::Result<(), ValidationError> {
		let mut errors = Vec::new();

		if self.page_size == 0 {
			errors.push(invalid("page_size", "must be at least 1, got 0"));
		}
		if self.max_slots < MIN_MAX_SLOTS {
			errors.push(invalid(
				"max_slots",
				format!("must be at least {}, got {}", MIN_MAX_SLOTS, self.max_slots),
			));
		}
		if let Some(max) = self.max_page_size
			&& max < self.page_size
		{
			errors.push(ValidationError::Constraint(format!(
				"page_size ({}) exceeds max_page_size ({})",
				self.page_size, max
			)));
		}
		if self.page_size_options.contains(&0) {
			errors.push(invalid("page_size_options", "must not contain 0"));
		}
		if self.page_query_param.is_empty() {
			errors.push(invalid("page_query_param", "must not be empty"));
		}
		if self.page_size_query_param.is_empty() {
			errors.push(invalid("page_size_query_param", "must not be empty"));
		}
		if !self.page_query_param.is_empty() && self.page_query_param == self.page_size_query_param {
			errors.push(ValidationError::Constraint(format!(
				"page_query_param and page_size_query_param are both '{}'",
				self.page_query_param
			)));
		}

		if !self.page_size_options.is_empty() && !self.page_size_options.contains(&self.page_size) {
			tracing::warn!(
				page_size = self.page_size,
				options = ?self.page_size_options,
				"page_size is not among page_size_options; unlisted requests fall back to it"
			);
		}

		match errors.len() {
			0 => Ok(()),
			1 => Err(errors.remove(0)),
			_ => Err(ValidationError::Multiple(errors)),
		}
	}

	/// Request policy for parsing `?page=` and `?page_size=`
	pub fn page_request(&self) -> PageRequest {
		let mut request = PageRequest::new()
			.page_size(self.page_size)
			.page_size_options(self.page_size_options.clone())
			.last_page_strings(self.last_page_strings.clone());
		request.max_page_size = self.max_page_size;
		request
	}

	/// Window calculator using the configured slot count
	///
	/// # Errors
	///
	/// Returns `InvalidArgument` when `max_slots` is below 5.
	pub fn calculator(&self) -> Result<PageWindowCalculator> {
		PageWindowCalculator::new().with_max_slots(self.max_slots)
	}

	/// Resolve a listing's query pairs using the configured parameter names
	///
	/// Unknown parameters are ignored; the first occurrence of a parameter
	/// wins.
	///
	/// # Errors
	///
	/// Returns `InvalidArgument` when the settings are inconsistent.
	///
	/// # Examples
	///
	/// ```
	/// use stratus_conf::PaginationSettings;
	///
	/// let settings = PaginationSettings::default();
	/// let input = settings
	///     .resolve_query(430, &[("sort", "name"), ("page", "last"), ("page_size", "20")])
	///     .unwrap();
	/// assert_eq!(input.current_page(), 22);
	/// assert_eq!(input.items_per_page(), 20);
	/// ```
	pub fn resolve_query(&self, total_items: u64, query: &[(&str, &str)]) -> Result<PaginationInput> {
		let lookup = |name: &str| {
			query
				.iter()
				.find(|(key, _)| *key == name)
				.map(|(_, value)| *value)
		};

		self.page_request().resolve(
			total_items,
			lookup(&self.page_query_param),
			lookup(&self.page_size_query_param),
		)
	}

	/// Validate and convert failures into the shared error type
	pub fn ensure_valid(&self) -> Result<()> {
		self.validate().map_err(Error::from)
	}
}

fn file_source(path: &Path) -> std::result::Result<Box<dyn ConfigSource>, BuildError> {
	match path.extension().and_then(|e| e.to_str()) {
		Some("toml") => Ok(Box::new(TomlFileSource::new(path).with_section(FILE_SECTION))),
		Some("json") => Ok(Box::new(JsonFileSource::new(path).with_section(FILE_SECTION))),
		// auto_source rejects the extension with a descriptive error
		_ => auto_source(path).map_err(|error| BuildError::Source {
			source_name: path.display().to_string(),
			error,
		}),
	}
}

fn invalid(key: &str, message: impl Into<String>) -> ValidationError {
	ValidationError::InvalidValue {
		key: key.to_string(),
		message: message.into(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_defaults() {
		let settings = PaginationSettings::default();
		assert_eq!(settings.page_size, 10);
		assert_eq!(settings.max_page_size, Some(100));
		assert_eq!(settings.page_size_options, vec![10, 20, 50, 100]);
		assert_eq!(settings.max_slots, 7);
		assert_eq!(settings.page_query_param, "page");
		assert_eq!(settings.page_size_query_param, "page_size");
		assert_eq!(settings.last_page_strings, vec!["last".to_string()]);
	}

	#[rstest]
	fn test_partial_document_keeps_defaults() {
		let settings: PaginationSettings =
			serde_json::from_value(json!({ "page_size": 20, "max_page_size": null })).unwrap();
		assert_eq!(settings.page_size, 20);
		assert_eq!(settings.max_page_size, None);
		assert_eq!(settings.max_slots, 7);
	}

	#[rstest]
	fn test_default_source_has_every_field() {
		let values = PaginationSettings::default_source().unwrap().load().unwrap();
		assert_eq!(values.len(), 7);
		assert_eq!(values.get("max_slots"), Some(&json!(7)));
	}

	#[rstest]
	#[case::zero_page_size(PaginationSettings { page_size: 0, ..Default::default() })]
	#[case::too_few_slots(PaginationSettings { max_slots: 4, ..Default::default() })]
	#[case::page_size_over_cap(PaginationSettings { page_size: 200, max_page_size: Some(100), ..Default::default() })]
	#[case::zero_option(PaginationSettings { page_size_options: vec![0, 10], ..Default::default() })]
	#[case::empty_param(PaginationSettings { page_query_param: String::new(), ..Default::default() })]
	#[case::same_params(PaginationSettings { page_size_query_param: "page".into(), ..Default::default() })]
	fn test_validate_rejects(#[case] settings: PaginationSettings) {
		assert!(settings.validate().is_err());
	}

	#[rstest]
	fn test_validate_collects_all_errors() {
		let settings = PaginationSettings {
			page_size: 0,
			max_slots: 3,
			..Default::default()
		};
		match settings.validate() {
			Err(ValidationError::Multiple(errors)) => assert_eq!(errors.len(), 2),
			other => panic!("expected multiple errors, got {:?}", other),
		}
	}

	#[rstest]
	fn test_unlisted_page_size_only_warns() {
		let settings = PaginationSettings {
			page_size: 25,
			..Default::default()
		};
		assert!(settings.validate().is_ok());
	}

	#[rstest]
	fn test_ensure_valid_maps_to_improperly_configured() {
		let settings = PaginationSettings {
			max_slots: 4,
			..Default::default()
		};
		assert_eq!(
			settings.ensure_valid(),
			Err(Error::ImproperlyConfigured(
				"Invalid value for 'max_slots': must be at least 5, got 4".to_string()
			))
		);
	}

	#[rstest]
	fn test_page_request_follows_settings() {
		let settings = PaginationSettings {
			page_size: 25,
			max_page_size: None,
			page_size_options: vec![],
			last_page_strings: vec!["end".to_string()],
			..Default::default()
		};
		let request = settings.page_request();
		assert_eq!(request.page_size, 25);
		assert_eq!(request.max_page_size, None);
		assert_eq!(request.resolve_page_size(Some("1000")), 1000);
		assert_eq!(request.parse_page_number("end", 4).unwrap(), 4);
	}

	#[rstest]
	fn test_calculator_uses_max_slots() {
		let settings = PaginationSettings {
			max_slots: 9,
			..Default::default()
		};
		assert_eq!(settings.calculator().unwrap().max_slots(), 9);

		let broken = PaginationSettings {
			max_slots: 2,
			..Default::default()
		};
		assert!(matches!(
			broken.calculator(),
			Err(Error::InvalidArgument(_))
		));
	}

	#[rstest]
	fn test_resolve_query_uses_configured_names() {
		let settings = PaginationSettings {
			page_query_param: "p".to_string(),
			page_size_query_param: "per".to_string(),
			..Default::default()
		};

		let input = settings
			.resolve_query(95, &[("page", "9"), ("p", "3"), ("per", "20"), ("p", "4")])
			.unwrap();
		assert_eq!(input.current_page(), 3);
		assert_eq!(input.items_per_page(), 20);

		let fallback = settings.resolve_query(95, &[]).unwrap();
		assert_eq!(fallback.current_page(), 1);
		assert_eq!(fallback.items_per_page(), 10);
	}
}
