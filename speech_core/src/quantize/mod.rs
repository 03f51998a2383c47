//! Distance quantizer - snaps a raw distance onto the nearest sounded
//! distance and yields its localization key.

use route_model::{sounded_distances, Notification, SoundedDistance};

use crate::error::SynthesisError;

/// Snap `distance` to a breakpoint and return its localization key.
///
/// `breakpoints` must be sorted ascending by threshold. The first
/// breakpoint at or above the distance is found; when a predecessor
/// exists it wins instead while `(distance - lo) * 2 < (hi - distance)`,
/// so 130 on {100, 200} rounds down to 100 while 135 rounds up to 200.
/// The bias is deliberate and asymmetric; do not replace it with naive
/// round-to-nearest.
pub fn quantize(
    breakpoints: &'static [SoundedDistance],
    distance: u32,
) -> Result<&'static str, SynthesisError> {
    let found = breakpoints
        .partition_point(|(threshold, _)| *threshold < distance);
    let Some(&(hi, key)) = breakpoints.get(found) else {
        return Err(SynthesisError::InvalidDistanceTable(distance));
    };

    if found > 0 {
        let (lo, lo_key) = breakpoints[found - 1];
        // Rounding like 130 -> 100 and 135 -> 200 sounds better than a
        // plain upper bound.
        if (distance - lo) * 2 < hi - distance {
            return Ok(lo_key);
        }
    }

    Ok(key)
}

/// Localization key for a notification's distance, per its unit system.
pub fn distance_key(notification: &Notification) -> Result<&'static str, SynthesisError> {
    quantize(
        sounded_distances(notification.unit_system),
        notification.distance,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_model::{UnitSystem, VehicleManeuver};

    const BREAKPOINTS: &[SoundedDistance] = &[(100, "A"), (200, "B")];

    #[test]
    fn test_rounds_toward_nearer_breakpoint() {
        assert_eq!(quantize(BREAKPOINTS, 130), Ok("A"));
        assert_eq!(quantize(BREAKPOINTS, 135), Ok("B"));
    }

    #[test]
    fn test_asymmetric_crossover() {
        // The predecessor wins only while (d - lo) * 2 < (hi - d), so the
        // crossover on {100, 200} sits at 134, not the naive midpoint.
        assert_eq!(quantize(BREAKPOINTS, 133), Ok("A"));
        assert_eq!(quantize(BREAKPOINTS, 134), Ok("B"));
        assert_eq!(quantize(BREAKPOINTS, 150), Ok("B"));
    }

    #[test]
    fn test_exact_threshold() {
        assert_eq!(quantize(BREAKPOINTS, 100), Ok("A"));
        assert_eq!(quantize(BREAKPOINTS, 200), Ok("B"));
    }

    #[test]
    fn test_below_first_breakpoint() {
        assert_eq!(quantize(BREAKPOINTS, 1), Ok("A"));
        assert_eq!(quantize(BREAKPOINTS, 0), Ok("A"));
    }

    #[test]
    fn test_beyond_table_is_a_violation() {
        assert_eq!(
            quantize(BREAKPOINTS, 5000),
            Err(SynthesisError::InvalidDistanceTable(5000))
        );
    }

    #[test]
    fn test_distance_key_per_unit_system() {
        let metric = route_model::Notification::vehicle(VehicleManeuver::TurnRight)
            .with_distance(500, UnitSystem::Metric);
        assert_eq!(distance_key(&metric), Ok("in_500_meters"));

        let imperial = route_model::Notification::vehicle(VehicleManeuver::TurnRight)
            .with_distance(5280, UnitSystem::Imperial);
        assert_eq!(distance_key(&imperial), Ok("in_1_mile"));
    }
}
