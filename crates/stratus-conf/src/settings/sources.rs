//! Configuration sources for layered settings
//!
//! Sources are merged in priority order (environment variables > config
//! files > defaults). Each source yields a flat map of setting name to JSON
//! value.

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid source: {0}")]
	InvalidSource(String),
}

/// Element type of a comma-separated environment list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
	/// Items are parsed like scalar variables (integers, booleans, null)
	Scalar,
	/// Items are kept as strings, even when they look like numbers
	Str,
}

/// Environment variable configuration source
///
/// Keys are matched against an optional prefix, stripped of it and
/// lowercased: `STRATUS_PAGINATION_PAGE_SIZE` becomes `page_size`.
pub struct EnvSource {
	prefix: Option<String>,
	list_keys: HashMap<String, ListKind>,
}

impl EnvSource {
	/// Create a new environment variable configuration source
	///
	/// # Examples
	///
	/// ```
	/// use stratus_conf::settings::sources::EnvSource;
	///
	/// let source = EnvSource::new();
	/// // Loads all environment variables
	/// ```
	pub fn new() -> Self {
		Self {
			prefix: None,
			list_keys: HashMap::new(),
		}
	}

	/// Set a prefix filter for environment variables
	///
	/// # Examples
	///
	/// ```
	/// use stratus_conf::settings::sources::EnvSource;
	///
	/// let source = EnvSource::new().with_prefix("STRATUS_");
	/// // Only loads env vars starting with STRATUS_
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Parse the given (lowercased, unprefixed) key as a comma-separated list
	///
	/// # Examples
	///
	/// ```
	/// use stratus_conf::settings::sources::{EnvSource, ListKind};
	///
	/// let source = EnvSource::new()
	///     .with_prefix("STRATUS_PAGINATION_")
	///     .with_list_key("page_size_options", ListKind::Scalar)
	///     .with_list_key("last_page_strings", ListKind::Str);
	/// // STRATUS_PAGINATION_PAGE_SIZE_OPTIONS=10,25,50 loads as [10, 25, 50]
	/// // STRATUS_PAGINATION_LAST_PAGE_STRINGS=last,-1 loads as ["last", "-1"]
	/// ```
	pub fn with_list_key(mut self, key: impl Into<String>, kind: ListKind) -> Self {
		self.list_keys.insert(key.into(), kind);
		self
	}

	fn load_from<I>(&self, vars: I) -> IndexMap<String, Value>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut config = IndexMap::new();

		for (key, value) in vars {
			let clean_key = match &self.prefix {
				Some(prefix) => match key.strip_prefix(prefix.as_str()) {
					Some(stripped) => stripped,
					None => continue,
				},
				None => key.as_str(),
			};
			let lower_key = clean_key.to_lowercase();

			let parsed_value = match self.list_keys.get(&lower_key) {
				Some(&kind) => parse_list(&value, kind),
				None => parse_scalar(&value),
			};

			config.insert(lower_key, parsed_value);
		}

		config
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.load_from(std::env::vars()))
	}

	fn priority(&self) -> u8 {
		100 // Highest priority
	}

	fn description(&self) -> String {
		match &self.prefix {
			Some(prefix) => format!("Environment variables (prefix: {})", prefix),
			None => "Environment variables".to_string(),
		}
	}
}

fn parse_list(value: &str, kind: ListKind) -> Value {
	let items = value
		.split(',')
		.map(str::trim)
		.filter(|item| !item.is_empty())
		.map(|item| match kind {
			ListKind::Scalar => parse_scalar(item),
			ListKind::Str => Value::String(item.to_string()),
		})
		.collect();
	Value::Array(items)
}

fn parse_scalar(value: &str) -> Value {
	let trimmed = value.trim();
	if let Ok(num) = trimmed.parse::<i64>() {
		return Value::Number(num.into());
	}
	match trimmed.to_lowercase().as_str() {
		"true" | "yes" | "on" => Value::Bool(true),
		"false" | "no" | "off" => Value::Bool(false),
		"" | "none" | "null" => Value::Null,
		_ => Value::String(value.to_string()),
	}
}

/// TOML file configuration source
pub struct TomlFileSource {
	path: PathBuf,
	section: Option<String>,
}

impl TomlFileSource {
	/// Create a new TOML file configuration source
	///
	/// # Examples
	///
	/// ```
	/// use stratus_conf::settings::sources::TomlFileSource;
	/// use std::path::PathBuf;
	///
	/// let source = TomlFileSource::new(PathBuf::from("stratus.toml"));
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			section: None,
		}
	}

	/// Read settings from a table instead of the document root
	///
	/// # Examples
	///
	/// ```
	/// use stratus_conf::settings::sources::TomlFileSource;
	///
	/// // Reads the [pagination] table
	/// let source = TomlFileSource::new("stratus.toml").with_section("pagination");
	/// ```
	pub fn with_section(mut self, section: impl Into<String>) -> Self {
		self.section = Some(section.into());
		self
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Value = toml::from_str(&content)?;
		let json_value = serde_json::to_value(toml_value)?;

		flatten_root(json_value, self.section.as_deref())
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// JSON file configuration source
pub struct JsonFileSource {
	path: PathBuf,
	section: Option<String>,
}

impl JsonFileSource {
	/// Create a new JSON file configuration source
	///
	/// # Examples
	///
	/// ```
	/// use stratus_conf::settings::sources::JsonFileSource;
	/// use std::path::PathBuf;
	///
	/// let source = JsonFileSource::new(PathBuf::from("stratus.json"));
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			section: None,
		}
	}

	/// Read settings from an object instead of the document root
	pub fn with_section(mut self, section: impl Into<String>) -> Self {
		self.section = Some(section.into());
		self
	}
}

impl ConfigSource for JsonFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let json_value: Value = serde_json::from_str(&content)?;

		flatten_root(json_value, self.section.as_deref())
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		format!("JSON file: {}", self.path.display())
	}
}

fn flatten_root(
	value: Value,
	section: Option<&str>,
) -> Result<IndexMap<String, Value>, SourceError> {
	let value = match section {
		Some(name) => match value.get(name) {
			Some(table) => table.clone(),
			// A file without the section contributes nothing.
			None => return Ok(IndexMap::new()),
		},
		None => value,
	};

	match value {
		Value::Object(map) => Ok(map.into_iter().collect()),
		_ => Err(SourceError::Parse("Expected object at root".to_string())),
	}
}

/// Default values configuration source
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Create a new default values configuration source
	///
	/// # Examples
	///
	/// ```
	/// use stratus_conf::settings::sources::DefaultSource;
	/// use serde_json::Value;
	///
	/// let source = DefaultSource::new()
	///     .with_value("page_size", Value::Number(25.into()));
	/// ```
	pub fn new() -> Self {
		Self {
			values: IndexMap::new(),
		}
	}

	/// Add a default value for a configuration key
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}

	/// Add every field of a serializable struct as a default
	///
	/// # Errors
	///
	/// Returns `Parse` if `defaults` does not serialize to a JSON object.
	pub fn from_serializable<T: serde::Serialize>(defaults: &T) -> Result<Self, SourceError> {
		let values = flatten_root(serde_json::to_value(defaults)?, None)?;
		Ok(Self { values })
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0 // Lowest priority
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

/// Auto-detect configuration source based on file extension
///
/// # Examples
///
/// ```
/// use stratus_conf::settings::sources::auto_source;
/// use std::path::PathBuf;
///
/// let source = auto_source(PathBuf::from("stratus.toml")).unwrap();
/// assert!(source.description().starts_with("TOML"));
///
/// assert!(auto_source(PathBuf::from("stratus.ini")).is_err());
/// ```
pub fn auto_source(path: impl AsRef<Path>) -> Result<Box<dyn ConfigSource>, SourceError> {
	let path = path.as_ref();
	let ext = path
		.extension()
		.and_then(|e| e.to_str())
		.ok_or_else(|| SourceError::InvalidSource("No file extension".to_string()))?;

	match ext {
		"toml" => Ok(Box::new(TomlFileSource::new(path))),
		"json" => Ok(Box::new(JsonFileSource::new(path))),
		_ => Err(SourceError::InvalidSource(format!(
			"Unsupported file extension: {}",
			ext
		))),
	}
}
