//! Sentence assembler - the entry point that turns a notification into
//! the exact string handed to the TTS engine.
//!
//! The assembler resolves the direction and distance keys, composes the
//! next-street phrase, runs the locale's grammar step, fills the sentence
//! template, and finishes with an idempotent punctuation cleanup. Every
//! contract violation on the way degrades to an empty string: a guidance
//! voice that says nothing beats one that says something garbled.

mod template;

pub use template::*;

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, warn};

use route_model::Notification;

use crate::direction::direction_key;
use crate::error::SynthesisError;
use crate::grammar::{grammar_for, SentenceParts};
use crate::quantize::distance_key;
use crate::resolver::{resolve_text, TextResolver};
use crate::road_name::{format_road_name, NoShields, ShieldResolver};
use crate::strings::replace_last;

/// Locale that concatenates sentence components without inter-word spaces.
const NO_SPACE_LOCALE: &str = "ja";

/// Sentence-terminal glyphs stripped between sub-instructions so the TTS
/// flow does not pause: Latin, East Asian, and Devanagari full stops.
const FULL_STOPS: &[&str] = &[".", "。", "।"];

static FLOATING_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [,.:;]+ ").expect("floating punctuation pattern is valid"));
static REPEATED_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ :]{2,}").expect("repeated separator pattern is valid"));
static LEADING_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ +").expect("leading space pattern is valid"));

/// Final cleanup pass over an assembled sentence: floating punctuation
/// runs become a single space, repeated spaces or colons collapse, and
/// leading spaces are trimmed.
pub fn cleanup(text: &str) -> String {
    let text = FLOATING_PUNCTUATION.replace_all(text, " ");
    let text = REPEATED_SEPARATORS.replace_all(&text, " ");
    LEADING_SPACES.replace(&text, "").into_owned()
}

/// Builds spoken notification text for one locale at a time.
///
/// The locale binding is instance state set through `&mut self`, so locale
/// changes and generation calls on one assembler serialize by borrow; the
/// core itself performs no synchronization and no I/O.
pub struct SentenceAssembler {
    resolver: Option<Arc<dyn TextResolver>>,
    shields: Arc<dyn ShieldResolver>,
}

impl SentenceAssembler {
    /// Create an assembler with no locale bound and no shield knowledge.
    pub fn new() -> Self {
        Self {
            resolver: None,
            shields: Arc::new(NoShields),
        }
    }

    /// Inject the road-shield resolver used for next-street references.
    pub fn with_shield_resolver(mut self, shields: Arc<dyn ShieldResolver>) -> Self {
        self.shields = shields;
        self
    }

    /// Bind the locale by handing over its text resolver.
    pub fn set_locale(&mut self, resolver: Arc<dyn TextResolver>) {
        self.resolver = Some(resolver);
    }

    /// The currently bound locale, or empty (and a diagnostic) when unset.
    pub fn locale(&self) -> String {
        match &self.resolver {
            Some(resolver) => resolver.locale().to_string(),
            None => {
                warn!("{}", SynthesisError::LocaleUnset);
                String::new()
            }
        }
    }

    fn text(&self, key: &str) -> String {
        match &self.resolver {
            Some(resolver) => resolve_text(resolver.as_ref(), key),
            None => String::new(),
        }
    }

    /// Fixed announcement for an unidentified speed camera.
    pub fn speed_camera_notification(&self) -> String {
        if self.resolver.is_none() {
            warn!("{}", SynthesisError::LocaleUnset);
            return String::new();
        }
        self.text("unknown_camera")
    }

    /// Spoken text for one turn notification.
    ///
    /// Returns an empty string whenever nothing should be said: sentinel
    /// maneuvers, missing localization, an unset locale, or a "then"
    /// instruction with no concrete direction.
    pub fn turn_notification(&self, notification: &Notification) -> String {
        if self.resolver.is_none() {
            warn!("{}", SynthesisError::LocaleUnset);
            return String::new();
        }
        let locale = self.locale();

        let dir_key = match direction_key(notification) {
            Ok(key) => key,
            Err(error) => {
                warn!(%error, "turn notification dropped");
                String::new()
            }
        };
        let mut dir_str = if dir_key.is_empty() {
            String::new()
        } else {
            self.text(&dir_key)
        };

        // Bare maneuver announcement: nothing qualifies it yet.
        if notification.distance == 0
            && !notification.use_then_phrasing
            && notification.next_street.is_empty()
        {
            return dir_str;
        }

        // A "then" instruction with no concrete direction says nothing.
        if notification.use_then_phrasing && notification.maneuver.is_none() {
            return String::new();
        }

        if dir_str.is_empty() {
            return String::new();
        }

        let mut then_str = String::new();
        if notification.use_then_phrasing {
            then_str = self.text("then");
            if locale != NO_SPACE_LOCALE {
                then_str.push(' ');
            }
        }

        let mut dist_str = String::new();
        if notification.distance > 0 {
            match distance_key(notification) {
                Ok(key) => dist_str = self.text(key),
                Err(error) => warn!(%error, "distance dropped from turn notification"),
            }
        }

        let street_out = format_road_name(&notification.next_street, self.shields.as_ref());

        if !street_out.is_empty() {
            // The street name gets pronounced; keep the sentence flowing
            // by stripping terminal stops off the inner fragments.
            for stop in FULL_STOPS {
                replace_last(&mut dist_str, stop, "");
            }

            // Some locales phrase a direction differently before a street
            // name; the "_street" variant wins when the pack has one.
            let dir_street_str = self.text(&format!("{dir_key}_street"));
            if !dir_street_str.is_empty() {
                dir_str = dir_street_str;
            }

            let mut onto_str = self.text("onto");

            if !notification.next_street.junction_reference.is_empty() {
                let dir_exit_str = self.text("take_exit_number");
                if !dir_exit_str.is_empty() {
                    dir_str = dir_exit_str;
                    // The exit-number phrasing subsumes the preposition.
                    onto_str.clear();
                }
            }

            for stop in FULL_STOPS {
                replace_last(&mut dir_str, stop, "");
            }

            let mut parts = SentenceParts {
                distance: dist_str,
                direction: dir_str,
                onto: onto_str,
                street: street_out,
                verb: self.text(&format!("{dir_key}_street_verb")),
                template: self.text("dist_direction_onto_street"),
            };

            if let Some(grammar) = grammar_for(&locale) {
                grammar.shape(&mut parts);
            }

            let filled = PhraseTemplate::parse(&parts.template).fill(&parts);
            let spoken = format!("{then_str}{}", cleanup(&filled));
            debug!(%spoken, "turn notification with street");
            return spoken;
        }

        let spoken = if dist_str.is_empty() {
            format!("{then_str}{dir_str}")
        } else if locale == NO_SPACE_LOCALE {
            format!("{then_str}{dist_str}{dir_str}")
        } else {
            format!("{then_str}{dist_str} {dir_str}")
        };
        debug!(%spoken, "turn notification");
        spoken
    }
}

impl Default for SentenceAssembler {
    fn default() -> Self {
        Self::new()
    }
}
