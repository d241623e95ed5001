/*!
 * Best-effort glossing of Swedish episode text into English.
 *
 * - `core`: the `Translator` trait and its implementations
 * - `gloss`: the static word and phrase table
 */

// Re-export main types for easier usage
pub use self::core::{GlossTranslator, PassthroughTranslator, Translator};

// Submodules
pub mod core;
pub mod gloss;

/// Build the translator selected by configuration
pub fn translator_for(enabled: bool) -> Box<dyn Translator> {
    if enabled {
        Box::new(GlossTranslator::swedish_to_english())
    } else {
        Box::new(PassthroughTranslator)
    }
}
