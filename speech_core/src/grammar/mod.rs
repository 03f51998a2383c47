//! Grammar post-processing - per-locale morphological adjustments applied
//! to the composed street phrase and the template fragments just before
//! substitution.
//!
//! Each locale that needs one registers a strategy in [`grammar_for`];
//! locales without an entry skip the step entirely, and adding a language
//! never touches the sentence assembler.

mod hungarian;

pub use hungarian::*;

/// The mutable sentence fragments a grammar step may reshape.
///
/// Field contents are already resolved surface strings; `template` is the
/// raw slot template before substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceParts {
    /// Distance phrase ("In 500 feet"), possibly empty.
    pub distance: String,

    /// Direction phrase ("Make a right turn").
    pub direction: String,

    /// Preposition before the street name ("onto"), possibly empty.
    pub onto: String,

    /// Composed street phrase ("12A; I-95; Main St").
    pub street: String,

    /// Optional trailing verb phrase; empty for most locales.
    pub verb: String,

    /// The slot template the fragments will be substituted into.
    pub template: String,
}

/// A per-locale grammatical adjustment pass.
pub trait LocaleGrammar: Sync {
    /// Reshape the fragments in place.
    fn shape(&self, parts: &mut SentenceParts);
}

/// Strategy table mapping a locale identifier to its grammar step.
pub fn grammar_for(locale: &str) -> Option<&'static dyn LocaleGrammar> {
    match locale {
        "hu" => Some(&HungarianGrammar),
        _ => None,
    }
}
