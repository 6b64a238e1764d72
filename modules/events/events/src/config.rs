//! Events module configuration.

use figment::Figment;
use figment::providers::Serialized;
use serde::{Deserialize, Serialize};

/// Key under which the events section lives in the configuration tree.
pub const EVENTS_SECTION: &str = "events";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventsConfig {
    /// Attach packages to every event returned by `list_events`.
    pub list_includes_packages: bool,
}

impl EventsConfig {
    /// Extract the `events` section, falling back to defaults for anything missing.
    ///
    /// # Errors
    /// Returns the figment error if the section is malformed.
    pub fn from_figment(figment: &Figment) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::default(EVENTS_SECTION, Self::default()))
            .merge(figment.clone())
            .extract_inner(EVENTS_SECTION)
    }
}
