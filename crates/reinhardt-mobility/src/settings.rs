//! Mobility settings.
//!
//! Settings can stand alone or live in a `[mobility]` table of a larger
//! project settings file:
//!
//! ```toml
//! [mobility]
//! template_argument = "template_name"
//! ```

use reinhardt_http::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::template::DEFAULT_TEMPLATE_ARGUMENT;

/// Table name used inside a project settings file.
pub const SETTINGS_TABLE: &str = "mobility";

/// Settings consumed by the mobility decorators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MobilitySettings {
	/// Named view argument that receives the resolved template path.
	pub template_argument: String,
}

impl Default for MobilitySettings {
	fn default() -> Self {
		Self {
			template_argument: DEFAULT_TEMPLATE_ARGUMENT.to_string(),
		}
	}
}

impl MobilitySettings {
	/// Load settings from a standalone TOML document.
	///
	/// # Errors
	///
	/// [`Error::Settings`] if the document does not deserialize,
	/// [`Error::ImproperlyConfigured`] if it fails [`validate`](Self::validate).
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_mobility::MobilitySettings;
	///
	/// let settings = MobilitySettings::from_toml_str(r#"template_argument = "layout""#).unwrap();
	/// assert_eq!(settings.template_argument, "layout");
	///
	/// let defaults = MobilitySettings::from_toml_str("").unwrap();
	/// assert_eq!(defaults.template_argument, "template");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source).map_err(|e| Error::Settings(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load the `[mobility]` table of a project settings file, falling back to
	/// defaults when the table is absent. Other tables are ignored.
	///
	/// # Errors
	///
	/// Same as [`from_toml_str`](Self::from_toml_str).
	pub fn from_settings_toml(source: &str) -> Result<Self> {
		let mut table: toml::Table =
			toml::from_str(source).map_err(|e| Error::Settings(e.to_string()))?;
		let settings = match table.remove(SETTINGS_TABLE) {
			Some(value) => value
				.try_into::<Self>()
				.map_err(|e| Error::Settings(format!("[{}]: {}", SETTINGS_TABLE, e)))?,
			None => {
				tracing::debug!("no [{}] table found, using default settings", SETTINGS_TABLE);
				Self::default()
			}
		};
		settings.validate()?;
		Ok(settings)
	}

	/// Check the settings are usable.
	///
	/// # Errors
	///
	/// [`Error::ImproperlyConfigured`] when `template_argument` is empty or
	/// contains whitespace.
	pub fn validate(&self) -> Result<()> {
		if self.template_argument.is_empty() {
			return Err(Error::ImproperlyConfigured(
				"mobility.template_argument must not be empty".to_string(),
			));
		}
		if self.template_argument.chars().any(char::is_whitespace) {
			return Err(Error::ImproperlyConfigured(format!(
				"mobility.template_argument '{}' must not contain whitespace",
				self.template_argument
			)));
		}
		Ok(())
	}
}
