//! Settings builder
//!
//! Merges [`ConfigSource`]s by ascending priority (a higher-priority source
//! overrides keys from lower ones), runs validators on the merged map and
//! deserializes the result.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::sources::{ConfigSource, SourceError};
use super::validation::{SettingsValidator, ValidationError, run_all};

/// Error raised while building settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
	#[error("Failed to load {source_name}: {error}")]
	Source {
		source_name: String,
		#[source]
		error: SourceError,
	},

	#[error(transparent)]
	Validation(#[from] ValidationError),

	#[error("Failed to deserialize settings: {0}")]
	Deserialize(#[from] serde_json::Error),
}

/// Layered settings builder
///
/// # Examples
///
/// ```
/// use stratus_conf::settings::builder::SettingsBuilder;
/// use stratus_conf::settings::sources::DefaultSource;
/// use serde_json::Value;
///
/// let merged = SettingsBuilder::new()
///     .add_source(DefaultSource::new().with_value("page_size", Value::from(10)))
///     .build_map()
///     .unwrap();
/// assert_eq!(merged.get("page_size"), Some(&Value::from(10)));
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
	validators: Vec<Box<dyn SettingsValidator>>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a configuration source
	pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Add an already boxed source, e.g. from [`auto_source`](super::sources::auto_source)
	pub fn add_boxed_source(mut self, source: Box<dyn ConfigSource>) -> Self {
		self.sources.push(source);
		self
	}

	/// Add a validator run on the merged map
	pub fn add_validator<V: SettingsValidator + 'static>(mut self, validator: V) -> Self {
		self.validators.push(Box::new(validator));
		self
	}

	/// Load, merge and validate every source
	///
	/// # Errors
	///
	/// Returns `Source` for the first source that fails to load and
	/// `Validation` when any validator rejects the merged map.
	pub fn build_map(mut self) -> Result<IndexMap<String, Value>, BuildError> {
		// Stable sort keeps insertion order between equal priorities.
		self.sources.sort_by_key(|source| source.priority());

		let mut merged = IndexMap::new();
		for source in &self.sources {
			let values = source.load().map_err(|error| BuildError::Source {
				source_name: source.description(),
				error,
			})?;
			tracing::debug!(
				source = %source.description(),
				priority = source.priority(),
				keys = values.len(),
				"loaded settings source"
			);
			merged.extend(values);
		}

		run_all(&self.validators, &merged)?;
		Ok(merged)
	}

	/// Load, merge, validate and deserialize
	///
	/// Unknown keys are ignored by the target type's deserializer unless it
	/// denies them.
	pub fn build<T: DeserializeOwned>(self) -> Result<T, BuildError> {
		let merged = self.build_map()?;
		let object: serde_json::Map<String, Value> = merged.into_iter().collect();
		Ok(serde_json::from_value(Value::Object(object))?)
	}
}
