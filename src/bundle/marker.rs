//! Entry-point markers and the application names derived from them

use std::fmt;

use crate::error::{Result, invalid_marker};

/// Fully qualified start class of a fat jar, e.g. `com.example.DemoApp`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BundleMarker(String);

impl BundleMarker {
    /// Keeps the value as written. Returns `None` for a blank value.
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let value = value.as_ref();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    /// The attribute value, surrounding whitespace included
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment of the qualified name, lower-cased and made safe for use
    /// as a directory name.
    ///
    /// Two markers with the same last segment share an application name.
    pub fn app_name(&self) -> Result<AppName> {
        let qualified = self.0.trim();
        let simple_name = qualified.rsplit('.').next().unwrap_or(qualified);
        let name = sanitize_filename::sanitize(simple_name.to_lowercase());
        if name.is_empty() {
            return Err(invalid_marker(self.0.as_str()));
        }
        Ok(AppName(name))
    }
}

impl fmt::Display for BundleMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Directory name of one application's staging area
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppName(String);

impl AppName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
