//! Hungarian grammar step: vowel-harmony suffix agreement and the
//! before-vowel article.
//!
//! Hungarian suffixes agree with the vowel class of the word they attach
//! to ("-re" after front-vowel words, "-ra" after back-vowel words), and
//! acronyms or numbers are classified by how they are spelled out ("ABC"
//! is said letter by letter, so its ending sound differs from a word like
//! "acerbic"). The street phrase's trailing vowel is also lengthened
//! before the suffix, and the article "a" becomes "az" before a vowel
//! sound.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::strings::replace_last;

use super::{LocaleGrammar, SentenceParts};

/// Front/back harmony class of a phrase ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelHarmony {
    /// Takes the "-re" style suffix.
    Front,
    /// Takes the "-ra" style suffix.
    Back,
    /// No class could be determined; the suffix is dropped entirely.
    Unknown,
}

// Vowel classes for ordinary words, matched case-folded.
const FRONT_VOWELS: &[char] = &['e', 'é', 'ö', 'ő', 'ü', 'ű'];
const BACK_VOWELS: &[char] = &['a', 'á', 'o', 'ó', 'u', 'ú'];
const INDETERMINATE_VOWELS: &[char] = &['i', 'í'];

// Spelled-out letter and digit names, classified by the vowel of the name
// ("há" and "ká" are back; every other consonant name is front).
const BACK_NAMES: &[char] = &[
    'A', 'Á', 'H', 'I', 'Í', 'K', 'O', 'Ó', 'U', 'Ű', '0', '3', '6', '8',
];
const FRONT_NAMES: &[char] = &[
    'B', 'C', 'D', 'E', 'É', 'F', 'G', 'J', 'L', 'M', 'N', 'Ö', 'Ő', 'P', 'Q', 'R', 'S', 'T',
    'Ú', 'Ü', 'V', 'W', 'X', 'Y', 'Z', '1', '2', '4', '5', '7', '9',
];

// Round numbers whose spoken form disagrees with their last digit's name:
// "tíz", "negyven", "ötven", "hetven", "kilencven" end front;
// "húsz", "harminc", "hatvan", "nyolcvan" end back; "száz" is back.
const SPECIAL_CASE_FRONT: &[&str] = &["10", "40", "50", "70", "90"];
const SPECIAL_CASE_BACK: &[&str] = &["20", "30", "60", "80"];

/// Matches street phrases pronounced with an initial vowel sound: a
/// leading vowel, or "1" / "5" leading a number said as "egy..." / "öt...".
/// 1, 5 and 1000 start with vowels but not 10 or 100 (and likewise 1*,
/// 1**, 5*, 5** and so on).
static STARTS_WITH_VOWEL_SOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?i)^[5aeiouyáéíóúöüőű]|^1$|^1[^0-9]|^1[0-9]{3}[^0-9]")
        .expect("vowel-sound pattern is valid")
});

/// Lengthen a trailing short vowel so a suffix can attach in speech
/// ("utca" is spoken "utcára", so the base becomes "utcá").
pub fn harmonize_base_word(word: &mut String) {
    const CORRESPONDENCE: &[(&str, &str)] = &[("e", "é"), ("a", "á"), ("ö", "ő"), ("ü", "ű")];

    for (base, harmonic) in CORRESPONDENCE {
        if word.ends_with(base) {
            word.replace_range(word.len() - base.len().., harmonic);
        }
    }
}

/// Whether the trailing token would be spelled out rather than read as a
/// word: scanning backward to a space (or the start), every character must
/// be a digit or an uppercase letter. The first lowercase letter breaks
/// the classification, so mixed-case tokens like "Rte5" take the word
/// path; this scan order is deliberate.
pub fn ends_in_acronym_or_number(phrase: &str) -> bool {
    for ch in phrase.chars().rev() {
        if ch == ' ' {
            break;
        }
        let lowercases_to_self = ch.to_lowercase().eq(std::iter::once(ch));
        if lowercases_to_self && !ch.is_ascii_digit() {
            return false;
        }
    }
    true
}

/// Harmony class of a trailing acronym or number.
///
/// Scans backward, at each position first trying the two-character round
/// number sets and the three-character "100", then the single spelled-out
/// character names. A space before any match classifies back.
pub fn categorize_acronyms_and_numbers(phrase: &str) -> VowelHarmony {
    let chars: Vec<char> = phrase.chars().collect();

    for i in (0..chars.len()).rev() {
        if i >= 1 {
            let pair: String = chars[i - 1..=i].iter().collect();
            if SPECIAL_CASE_FRONT.contains(&pair.as_str()) {
                return VowelHarmony::Front;
            }
            if SPECIAL_CASE_BACK.contains(&pair.as_str()) {
                return VowelHarmony::Back;
            }
        }
        if i >= 2 {
            let triple: String = chars[i - 2..=i].iter().collect();
            if triple == "100" {
                return VowelHarmony::Back;
            }
        }

        let ch = chars[i];
        if FRONT_NAMES.contains(&ch) {
            return VowelHarmony::Front;
        }
        if BACK_NAMES.contains(&ch) {
            return VowelHarmony::Back;
        }
        if ch == ' ' {
            return VowelHarmony::Back;
        }
    }

    warn!(%phrase, "unable to find Hungarian front/back for acronym or number");
    VowelHarmony::Back
}

/// Harmony class of the phrase's last word.
///
/// The last vowel discriminates in all cases, so the scan runs backward
/// until one is found. Indeterminate vowels count only when nothing else
/// turns up before the word boundary; a vowelless last word is retried as
/// an acronym or number.
pub fn categorize_last_word(phrase: &str) -> VowelHarmony {
    if ends_in_acronym_or_number(phrase) {
        return categorize_acronyms_and_numbers(phrase);
    }

    let mut found_indeterminate = false;

    for ch in phrase.chars().rev() {
        let lower = ch.to_lowercase().next().unwrap_or(ch);
        if FRONT_VOWELS.contains(&lower) {
            return VowelHarmony::Front;
        }
        if BACK_VOWELS.contains(&lower) {
            return VowelHarmony::Back;
        }
        if INDETERMINATE_VOWELS.contains(&lower) {
            found_indeterminate = true;
        }
        if ch == ' ' {
            if found_indeterminate {
                return VowelHarmony::Back;
            }
            return categorize_acronyms_and_numbers(phrase);
        }
    }

    warn!(%phrase, "Hungarian word not categorized");
    VowelHarmony::Back
}

/// The Hungarian strategy registered in the grammar table.
#[derive(Debug, Clone, Copy, Default)]
pub struct HungarianGrammar;

impl LocaleGrammar for HungarianGrammar {
    fn shape(&self, parts: &mut SentenceParts) {
        harmonize_base_word(&mut parts.street);

        match categorize_last_word(&parts.street) {
            VowelHarmony::Front => replace_last(&mut parts.template, "-re", "re"),
            VowelHarmony::Back => replace_last(&mut parts.template, "-re", "ra"),
            VowelHarmony::Unknown => replace_last(&mut parts.template, "-re", ""),
        }

        if STARTS_WITH_VOWEL_SOUND.is_match(&parts.street) {
            if parts.onto == "a" {
                parts.onto = "az".to_string();
            }
            if parts.direction == "Hajtson ki a" {
                parts.direction = "Hajtson ki az".to_string();
            }
        }
    }
}
