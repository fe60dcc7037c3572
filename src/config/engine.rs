//! Settings describing the external engine generated projects link against.
//!
//! The generator itself never touches the engine; these values only flow
//! into the generated build descriptors, stub sources and the media link.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::GenerateError;
use crate::project::kind::capitalize;
use crate::project::name::is_identifier;

/// Engine name used when none is configured.
pub const DEFAULT_ENGINE: &str = "wendy";

/// Reverse-DNS prefix used for bundle identifiers when none is configured.
pub const DEFAULT_BUNDLE_PREFIX: &str = "org.elmindreda";

/// Minimum `CMake` version declared when none is configured.
pub const DEFAULT_CMAKE_MINIMUM: &str = "2.8";

/// Engine wiring for the generated project.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct EngineSettings {
    /// Engine name: `CMake` target, C++ namespace and sibling directory
    pub name: String,

    /// Reverse-DNS prefix of the macOS bundle identifier
    pub bundle_prefix: String,

    /// Version passed to `cmake_minimum_required`
    pub cmake_minimum: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_ENGINE.to_string(),
            bundle_prefix: DEFAULT_BUNDLE_PREFIX.to_string(),
            cmake_minimum: DEFAULT_CMAKE_MINIMUM.to_string(),
        }
    }
}

impl EngineSettings {
    /// Check that every setting can be pasted into the generated sources.
    ///
    /// The name must be usable as a namespace and `CMake` target, the bundle
    /// prefix must be dot-separated identifiers and the `CMake` minimum a
    /// dotted numeric version.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidEngine`],
    /// [`GenerateError::InvalidBundlePrefix`] or
    /// [`GenerateError::InvalidCmakeVersion`] for the first bad value.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !is_identifier(&self.name) {
            return Err(GenerateError::InvalidEngine(self.name.clone()));
        }
        if !self.bundle_prefix.split('.').all(is_identifier) {
            return Err(GenerateError::InvalidBundlePrefix(
                self.bundle_prefix.clone(),
            ));
        }
        if !is_cmake_version(&self.cmake_minimum) {
            return Err(GenerateError::InvalidCmakeVersion(
                self.cmake_minimum.clone(),
            ));
        }
        Ok(())
    }

    /// Umbrella header include path, e.g. `wendy/Wendy.h`.
    #[must_use]
    pub fn umbrella_header(&self) -> String {
        format!("{}/{}.h", self.name, capitalize(&self.name))
    }

    /// Prefix of the `CMake` variables exported by the engine, e.g. `WENDY`.
    #[must_use]
    pub fn cmake_prefix(&self) -> String {
        self.name.to_uppercase()
    }

    /// Link target of `data/<engine>`, relative to the `data` directory.
    #[must_use]
    pub fn media_link_target(&self) -> PathBuf {
        let name = self.name.as_str();
        ["..", "..", name, "media", name].into_iter().collect()
    }
}

/// `major[.minor[.patch[.tweak]]]`, as accepted by `cmake_minimum_required`.
fn is_cmake_version(input: &str) -> bool {
    input.split('.').count() <= 4
        && input
            .split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}
