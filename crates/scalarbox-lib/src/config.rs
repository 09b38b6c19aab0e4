//! Configuration for seeding the registry from declarations.

use serde::Deserialize;

use scalarbox_core::ScalarKind;

use crate::registry::RegistryError;

/// What to do when a wrapper class is missing from the declarations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingWrapper {
    /// Register the unknown type; its composite degrades to the bare scalar.
    #[default]
    Unknown,
    /// Treat the missing wrapper as an absent instance.
    Reject,
}

/// Declared names of the boxed wrapper classes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WrapperNames {
    number: String,
    string: String,
    boolean: String,
}

impl Default for WrapperNames {
    fn default() -> Self {
        Self {
            number: "Number".to_owned(),
            string: "String".to_owned(),
            boolean: "Boolean".to_owned(),
        }
    }
}

/// Registry seeding configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    wrappers: WrapperNames,
    missing_wrapper: MissingWrapper,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration document. Omitted fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the declared wrapper class name for `kind`.
    pub fn wrapper(mut self, kind: ScalarKind, name: impl Into<String>) -> Self {
        let slot = match kind {
            ScalarKind::Number => &mut self.wrappers.number,
            ScalarKind::String => &mut self.wrappers.string,
            ScalarKind::Boolean => &mut self.wrappers.boolean,
        };
        *slot = name.into();
        self
    }

    /// Set the missing-wrapper policy.
    pub fn missing_wrapper(mut self, value: MissingWrapper) -> Self {
        self.missing_wrapper = value;
        self
    }

    pub fn wrapper_name(&self, kind: ScalarKind) -> &str {
        match kind {
            ScalarKind::Number => &self.wrappers.number,
            ScalarKind::String => &self.wrappers.string,
            ScalarKind::Boolean => &self.wrappers.boolean,
        }
    }

    pub fn on_missing_wrapper(&self) -> MissingWrapper {
        self.missing_wrapper
    }
}
