/*!
 * Translator implementations.
 *
 * `GlossTranslator` performs a single pass of whole-word, case-insensitive
 * substitutions from a static table. It is a lexical gloss: no reordering,
 * no inflection, no context.
 */

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fmt::Debug;

use super::gloss::{GlossEntry, SWEDISH_TO_ENGLISH};

/// Common trait for everything that can translate a block of free text
///
/// Extraction only depends on this trait, so the static gloss can be swapped
/// for a real translation service without touching the row extractor.
pub trait Translator: Send + Sync + Debug {
    /// Translate a block of text. Must never fail; untranslatable text is
    /// returned as-is.
    fn translate(&self, text: &str) -> String;

    /// Short identifier used in logs
    fn name(&self) -> &str;
}

/// Translator that returns its input unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}

/// Word and phrase substitution driven by a static table
#[derive(Debug)]
pub struct GlossTranslator {
    // @field: Lowercased source key -> gloss
    lookup: HashMap<String, &'static str>,
    // @field: Alternation of all keys, longest first; None for an empty table
    pattern: Option<Regex>,
}

impl GlossTranslator {
    /// Build a translator from an arbitrary table.
    ///
    /// Keys are matched longest first so multi-word phrases win over the
    /// single words they contain. Keys of equal length are ordered
    /// alphabetically to keep the pattern deterministic. Duplicate keys keep
    /// their first gloss.
    pub fn from_entries(entries: &[GlossEntry]) -> Self {
        let mut lookup: HashMap<String, &'static str> = HashMap::with_capacity(entries.len());
        for (source, target) in entries {
            lookup.entry(source.to_lowercase()).or_insert(*target);
        }

        let mut keys: Vec<&String> = lookup.keys().collect();
        keys.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let alternation = keys
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = (!alternation.is_empty())
            .then(|| Regex::new(&format!(r"(?iu)\b(?:{})\b", alternation)).unwrap());

        Self { lookup, pattern }
    }

    /// Translator over the built-in Swedish to English table
    pub fn swedish_to_english() -> Self {
        Self::from_entries(SWEDISH_TO_ENGLISH)
    }

    /// Number of distinct entries in the table
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

impl Default for GlossTranslator {
    fn default() -> Self {
        Self::swedish_to_english()
    }
}

impl Translator for GlossTranslator {
    fn translate(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };

        pattern
            .replace_all(text, |caps: &Captures| {
                let matched = &caps[0];
                self.lookup
                    .get(&matched.to_lowercase())
                    .map(|gloss| gloss.to_string())
                    .unwrap_or_else(|| matched.to_string())
            })
            .into_owned()
    }

    fn name(&self) -> &str {
        "gloss"
    }
}
