//! Configuration holding the two heading labels the commands file entries under.
//!
//! We look for an inboxer.toml, and if present load the labels from there. Any key left out
//! keeps its default, so a file naming only one label is fine.

use facet::Facet;
use std::path::Path;
use std::{fs, io};
use tracing::{debug, warn};

/// File the configuration is read from when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "inboxer.toml";

/// Inbox heading label used when none is configured.
pub const DEFAULT_INBOX_HEADING: &str = "INBOX";

/// Timeline heading label used when none is configured.
pub const DEFAULT_TIMELINE_HEADING: &str = "TIMELINE";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from inboxer.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_INBOX_HEADING.to_string())]
    /// Heading text of the inbox section.
    pub inbox_heading: String,
    #[facet(default = DEFAULT_TIMELINE_HEADING.to_string())]
    /// Heading text of the timeline section.
    pub timeline_heading: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inbox_heading: DEFAULT_INBOX_HEADING.to_string(),
            timeline_heading: DEFAULT_TIMELINE_HEADING.to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from inboxer.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Persist the configuration to `path` as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let toml = facet_toml::to_string(self).map_err(|e| io::Error::other(e.to_string()))?;
        fs::write(path, toml)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
