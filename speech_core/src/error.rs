//! Contract-violation taxonomy for the speech core.
//!
//! Nothing here is fatal: the sentence assembler logs these and degrades to
//! an empty string, because for a voice guidance system silence is the safe
//! failure mode. The `Result` forms exist so the low-level resolvers stay
//! independently testable.

use route_model::Maneuver;
use thiserror::Error;

/// Errors the synthesis pipeline can report.
///
/// Every variant is a caller contract violation, not a runtime condition to
/// recover from; the public assembler surface converts them all to silence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// The sounded-distance table has no entry at or above the distance.
    #[error("no sounded distance at or above {0}; distance table is not correct")]
    InvalidDistanceTable(u32),

    /// A sentinel or impossible maneuver state reached text generation.
    #[error("maneuver {0:?} cannot be announced")]
    UnannouncableManeuver(Maneuver),

    /// Text lookup was invoked with an empty localization key.
    #[error("text lookup with an empty key")]
    EmptyTextKey,

    /// Text generation was requested before any locale was bound.
    #[error("no locale has been set")]
    LocaleUnset,
}
