//! Tag keys and tag maps.
//!
//! A tag key is a named dimension attached to recorded events so views can
//! be broken down by it. Keys are minted by a [`TagRegistry`]; asking for the
//! same name twice yields the same key.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

use crate::error::{GalaxyError, Result};

/// Maximum length of a key name, and the default maximum length of a value.
pub const MAX_TAG_LEN: usize = 255;

fn is_printable(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7e).contains(&b))
}

/// A named tag dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagKey {
    name: Arc<str>,
}

impl TagKey {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Mints tag keys, one per distinct name.
#[derive(Default)]
pub struct TagRegistry {
    keys: DashMap<String, TagKey>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self { keys: DashMap::new() }
    }

    /// Create (or look up) the key for `name`.
    ///
    /// Names must be 1..=255 bytes of printable ASCII. Repeated calls with
    /// the same name return equal keys.
    pub fn new_key(&self, name: &str) -> Result<TagKey> {
        if name.is_empty() || name.len() > MAX_TAG_LEN {
            return Err(GalaxyError::InvalidTagKey(format!(
                "name length must be between 1 and {MAX_TAG_LEN}, got {}",
                name.len()
            )));
        }
        if !is_printable(name) {
            return Err(GalaxyError::InvalidTagKey(format!(
                "name {name:?} contains non-printable characters"
            )));
        }

        let key = self
            .keys
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(tag_key = %name, "tag key created");
                TagKey { name: Arc::from(name) }
            })
            .clone();
        Ok(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Tag values attached to a recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMap {
    tags: BTreeMap<TagKey, String>,
    max_value_len: usize,
}

impl Default for TagMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TagMap {
    pub fn new() -> Self {
        Self::with_max_value_len(MAX_TAG_LEN)
    }

    pub fn with_max_value_len(max_value_len: usize) -> Self {
        Self { tags: BTreeMap::new(), max_value_len }
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn upsert(&mut self, key: &TagKey, value: &str) -> Result<()> {
        if value.len() > self.max_value_len {
            return Err(GalaxyError::InvalidTagValue {
                key: key.name().to_string(),
                reason: format!("value longer than {} bytes", self.max_value_len),
            });
        }
        if !is_printable(value) {
            return Err(GalaxyError::InvalidTagValue {
                key: key.name().to_string(),
                reason: "value contains non-printable characters".into(),
            });
        }
        self.tags.insert(key.clone(), value.to_string());
        Ok(())
    }

    /// Builder form of [`TagMap::upsert`].
    pub fn with(mut self, key: &TagKey, value: &str) -> Result<Self> {
        self.upsert(key, value)?;
        Ok(self)
    }

    pub fn value(&self, key: &TagKey) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TagKey, &str)> {
        self.tags.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn value_rules() {
        let reg = TagRegistry::new();
        let k = reg.new_key("command").unwrap();

        let mut tags = TagMap::with_max_value_len(4);
        tags.upsert(&k, "get").unwrap();
        assert_eq!(tags.value(&k), Some("get"));

        tags.upsert(&k, "put").unwrap();
        assert_eq!(tags.value(&k), Some("put"));

        let err = tags.upsert(&k, "peer-get").unwrap_err();
        assert_eq!(err.code().as_str(), "INVALID_TAG_VALUE");
        let err = tags.upsert(&k, "a\tb").unwrap_err();
        assert_eq!(err.code().as_str(), "INVALID_TAG_VALUE");
        assert_eq!(tags.value(&k), Some("put"));
    }

    #[test]
    fn empty_value_is_allowed() {
        let reg = TagRegistry::new();
        let k = reg.new_key("command").unwrap();
        let tags = TagMap::new().with(&k, "").unwrap();
        assert_eq!(tags.value(&k), Some(""));
    }
}
