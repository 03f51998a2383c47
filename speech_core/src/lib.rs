//! # Speech Core
//!
//! Turns route notifications into the text a TTS engine speaks. The
//! pipeline quantizes the remaining distance onto the sounded table,
//! resolves the maneuver's localization key, formats the next-street
//! phrase, applies the locale's grammar step, and assembles the sentence
//! from the pack's template.
//!
//! All localized strings come through the [`TextResolver`] binding; the
//! core itself ships language packs for bootstrapping and tests but works
//! against any resolver the platform supplies.

pub mod assembler;
pub mod direction;
pub mod error;
pub mod grammar;
pub mod quantize;
pub mod resolver;
pub mod road_name;

mod strings;

pub use assembler::*;
pub use direction::*;
pub use error::*;
pub use grammar::*;
pub use quantize::*;
pub use resolver::*;
pub use road_name::*;
