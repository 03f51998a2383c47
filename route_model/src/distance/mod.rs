//! Sounded-distance tables - the fixed set of distances the voice is
//! willing to speak, per unit system.
//!
//! Each entry pairs a threshold with the localization key announcing it.
//! Tables are sorted ascending by threshold; the quantizer in the speech
//! core relies on that ordering.

use crate::notification::UnitSystem;

/// A sounded distance: threshold paired with its localization key.
pub type SoundedDistance = (u32, &'static str);

/// Metric distances the voice can announce, in meters.
pub const SOUNDED_DISTANCES_METERS: &[SoundedDistance] = &[
    (50, "in_50_meters"),
    (100, "in_100_meters"),
    (200, "in_200_meters"),
    (250, "in_250_meters"),
    (300, "in_300_meters"),
    (400, "in_400_meters"),
    (500, "in_500_meters"),
    (600, "in_600_meters"),
    (700, "in_700_meters"),
    (750, "in_750_meters"),
    (800, "in_800_meters"),
    (900, "in_900_meters"),
    (1000, "in_1_kilometer"),
    (1500, "in_1_5_kilometers"),
    (2000, "in_2_kilometers"),
    (2500, "in_2_5_kilometers"),
    (3000, "in_3_kilometers"),
];

/// Imperial distances the voice can announce, in feet.
pub const SOUNDED_DISTANCES_FEET: &[SoundedDistance] = &[
    (50, "in_50_feet"),
    (100, "in_100_feet"),
    (200, "in_200_feet"),
    (300, "in_300_feet"),
    (400, "in_400_feet"),
    (500, "in_500_feet"),
    (600, "in_600_feet"),
    (700, "in_700_feet"),
    (800, "in_800_feet"),
    (900, "in_900_feet"),
    (1000, "in_1000_feet"),
    (1500, "in_1500_feet"),
    (2000, "in_2000_feet"),
    (2500, "in_2500_feet"),
    (3000, "in_3000_feet"),
    (3500, "in_3500_feet"),
    (4000, "in_4000_feet"),
    (4500, "in_4500_feet"),
    (5000, "in_5000_feet"),
    (5280, "in_1_mile"),
    (7920, "in_1_5_miles"),
    (10560, "in_2_miles"),
];

/// Select the sounded-distance table for a unit system.
pub fn sounded_distances(unit_system: UnitSystem) -> &'static [SoundedDistance] {
    match unit_system {
        UnitSystem::Metric => SOUNDED_DISTANCES_METERS,
        UnitSystem::Imperial => SOUNDED_DISTANCES_FEET,
    }
}
