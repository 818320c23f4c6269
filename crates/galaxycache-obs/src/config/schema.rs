use serde::Deserialize;
use galaxycache_core::error::{GalaxyError, Result};
use galaxycache_core::stats::MAX_TAG_LEN;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsConfig {
    pub version: u32,

    #[serde(default)]
    pub tags: TagSection,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self { version: 1, tags: TagSection::default() }
    }
}

impl StatsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GalaxyError::UnsupportedVersion);
        }

        self.tags.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagSection {
    /// Longest tag value accepted when recording.
    #[serde(default = "default_max_value_len")]
    pub max_value_len: usize,
}

impl Default for TagSection {
    fn default() -> Self {
        Self { max_value_len: default_max_value_len() }
    }
}

impl TagSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_TAG_LEN).contains(&self.max_value_len) {
            return Err(GalaxyError::BadConfig(format!(
                "tags.max_value_len must be between 1 and {MAX_TAG_LEN}"
            )));
        }
        Ok(())
    }
}

fn default_max_value_len() -> usize {
    MAX_TAG_LEN
}
