//! Settings management
//!
//! - [`sources`]: where values come from
//! - [`builder`]: merging sources by priority
//! - [`validation`]: checks run before settings are used
//! - [`pagination`]: the listing pagination settings

pub mod builder;
pub mod pagination;
pub mod sources;
pub mod validation;

pub use builder::{BuildError, SettingsBuilder};
pub use pagination::PaginationSettings;
pub use sources::{
	ConfigSource, DefaultSource, EnvSource, JsonFileSource, ListKind, SourceError, TomlFileSource,
	auto_source,
};
pub use validation::{RangeValidator, SettingsValidator, ValidationError, ValidationResult};
