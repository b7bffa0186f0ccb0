//! Owning collection of compiled languages.
//!
//! The embedding application creates a registry, fills it, and passes it
//! (or individual `Arc<Hyphenator>`s) to whoever needs to hyphenate.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::dictionary::LanguageDictionary;
use crate::error::{HyphenError, Result};
use crate::hyphenator::Hyphenator;

/// Compiled hyphenators keyed by normalized language tag (`"en-us"`).
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: FxHashMap<String, Arc<Hyphenator>>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `dict` under `tag`, returning the engine it replaced.
    pub fn insert(
        &mut self,
        tag: &str,
        dict: &LanguageDictionary,
    ) -> Result<Option<Arc<Hyphenator>>> {
        let key = normalize_tag(tag)?;
        let engine = Arc::new(Hyphenator::new(dict));
        let replaced = self.languages.insert(key.clone(), engine);
        tracing::debug!(
            message = "hyphen.registry.insert",
            tag = %key,
            replaced = replaced.is_some()
        );
        Ok(replaced)
    }

    /// Deserialize a Hyphenator.js language object and register it.
    pub fn insert_json(&mut self, tag: &str, json: &str) -> Result<()> {
        let dict = LanguageDictionary::from_json(json)?;
        self.insert(tag, &dict)?;
        Ok(())
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<Arc<Hyphenator>> {
        let key = normalize_tag(tag).ok()?;
        self.languages.get(&key).cloned()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    pub fn remove(&mut self, tag: &str) -> Option<Arc<Hyphenator>> {
        let key = normalize_tag(tag).ok()?;
        self.languages.remove(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Registered tags, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Hyphenate `word` with the engine registered under `tag`.
    pub fn hyphenate(&self, tag: &str, word: &str) -> Result<Vec<String>> {
        let engine = self.get(tag).ok_or_else(|| HyphenError::unknown(tag))?;
        Ok(engine.hyphenate(word))
    }
}

/// `" EN_us "` → `"en-us"`.
fn normalize_tag(tag: &str) -> Result<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return Err(HyphenError::EmptyLanguageTag);
    }
    Ok(trimmed.to_ascii_lowercase().replace('_', "-"))
}
