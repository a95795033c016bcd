//! Configuration validation
//!
//! Validators run on the merged settings map before it is deserialized, so
//! errors name the offending key rather than a serde path.

use indexmap::IndexMap;
use serde_json::Value;
use stratus_core::exception::Error;

/// Validation result
pub type ValidationResult = Result<(), ValidationError>;

/// Validation error
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("Invalid value for '{key}': {message}")]
	InvalidValue { key: String, message: String },

	#[error("Constraint violation: {0}")]
	Constraint(String),

	#[error("Multiple validation errors: {0:?}")]
	Multiple(Vec<ValidationError>),
}

impl From<ValidationError> for Error {
	fn from(error: ValidationError) -> Self {
		Error::ImproperlyConfigured(error.to_string())
	}
}

/// Trait for validators that check the merged settings map
pub trait SettingsValidator: Send + Sync {
	/// Validate the merged settings
	fn validate_settings(&self, settings: &IndexMap<String, Value>) -> ValidationResult;

	/// Get validator description
	fn description(&self) -> String;
}

/// Integer range validator for a single key
///
/// Absent keys and `null` pass; defaults are validated by their owner.
pub struct RangeValidator {
	key: String,
	min: Option<i64>,
	max: Option<i64>,
}

impl RangeValidator {
	/// Create a validator requiring `key` to be an integer in `[min, max]`
	///
	/// # Examples
	///
	/// ```
	/// use stratus_conf::settings::validation::{RangeValidator, SettingsValidator};
	/// use indexmap::IndexMap;
	/// use serde_json::Value;
	///
	/// let validator = RangeValidator::new("max_slots").min(5);
	///
	/// let mut settings = IndexMap::new();
	/// settings.insert("max_slots".to_string(), Value::from(3));
	/// assert!(validator.validate_settings(&settings).is_err());
	/// ```
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			min: None,
			max: None,
		}
	}

	pub fn min(mut self, min: i64) -> Self {
		self.min = Some(min);
		self
	}

	pub fn max(mut self, max: i64) -> Self {
		self.max = Some(max);
		self
	}

	fn invalid(&self, message: String) -> ValidationError {
		ValidationError::InvalidValue {
			key: self.key.clone(),
			message,
		}
	}
}

impl SettingsValidator for RangeValidator {
	fn validate_settings(&self, settings: &IndexMap<String, Value>) -> ValidationResult {
		let value = match settings.get(&self.key) {
			None | Some(Value::Null) => return Ok(()),
			Some(value) => value,
		};

		let number = value
			.as_i64()
			.ok_or_else(|| self.invalid(format!("expected an integer, got {}", value)))?;

		if let Some(min) = self.min
			&& number < min
		{
			return Err(self.invalid(format!("must be at least {}, got {}", min, number)));
		}
		if let Some(max) = self.max
			&& number > max
		{
			return Err(self.invalid(format!("must be at most {}, got {}", max, number)));
		}
		Ok(())
	}

	fn description(&self) -> String {
		match (self.min, self.max) {
			(Some(min), Some(max)) => format!("{} in [{}, {}]", self.key, min, max),
			(Some(min), None) => format!("{} >= {}", self.key, min),
			(None, Some(max)) => format!("{} <= {}", self.key, max),
			(None, None) => format!("{} is an integer", self.key),
		}
	}
}

/// Collects every failure instead of stopping at the first
pub(crate) fn run_all(
	validators: &[Box<dyn SettingsValidator>],
	settings: &IndexMap<String, Value>,
) -> ValidationResult {
	let mut errors: Vec<ValidationError> = validators
		.iter()
		.filter_map(|validator| validator.validate_settings(settings).err())
		.collect();

	match errors.len() {
		0 => Ok(()),
		1 => Err(errors.remove(0)),
		_ => Err(ValidationError::Multiple(errors)),
	}
}
