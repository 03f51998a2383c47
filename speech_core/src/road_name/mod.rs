//! Road name formatter - composes the spoken next-street phrase.
//!
//! For a plain next street the phrase is "ref; name". For highway exits
//! (or main roads carrying exit info) it is "junction ref; destination
//! ref; destination", falling back to the street name when no destination
//! is signposted. Order is part of the contract: exit and junction info
//! precede destination naming, matching spoken conventions.

use route_model::RoadNameInfo;

/// Maps a raw road reference to its canonical spoken names.
///
/// Implemented outside this core by the map data layer; the first
/// canonical name is used when any exist.
pub trait ShieldResolver: Send + Sync {
    /// Canonical names for `raw_ref`; empty when the reference is not a
    /// recognized shield.
    fn canonical_names(&self, raw_ref: &str) -> Vec<String>;
}

/// Shield resolver that recognizes nothing; references pass through raw.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShields;

impl ShieldResolver for NoShields {
    fn canonical_names(&self, _raw_ref: &str) -> Vec<String> {
        Vec::new()
    }
}

fn canonicalize(raw_ref: &str, shields: &dyn ShieldResolver) -> String {
    if raw_ref.is_empty() {
        return String::new();
    }
    shields
        .canonical_names(raw_ref)
        .into_iter()
        .next()
        .unwrap_or_else(|| raw_ref.to_string())
}

/// Compose the delimiter-joined next-street phrase.
pub fn format_road_name(road: &RoadNameInfo, shields: &dyn ShieldResolver) -> String {
    let reference = canonicalize(&road.reference, shields);
    let destination_reference = canonicalize(&road.destination_reference, shields);

    let mut parts: Vec<&str> = Vec::new();

    if road.has_exit_info() {
        if !road.junction_reference.is_empty() {
            parts.push(&road.junction_reference);
        }
        if !destination_reference.is_empty() {
            parts.push(&destination_reference);
        }
        if !road.destination.is_empty() {
            parts.push(&road.destination);
        } else if !road.name.is_empty() {
            parts.push(&road.name);
        }
    } else {
        if !reference.is_empty() {
            parts.push(&reference);
        }
        if !road.name.is_empty() {
            parts.push(&road.name);
        }
    }

    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapShields(HashMap<String, Vec<String>>);

    impl MapShields {
        fn new(entries: &[(&str, &[&str])]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(raw, names)| {
                        (
                            raw.to_string(),
                            names.iter().map(|n| n.to_string()).collect(),
                        )
                    })
                    .collect(),
            )
        }
    }

    impl ShieldResolver for MapShields {
        fn canonical_names(&self, raw_ref: &str) -> Vec<String> {
            self.0.get(raw_ref).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn test_plain_street_ref_then_name() {
        let road = RoadNameInfo::new()
            .with_reference("CA-1")
            .with_name("Pacific Coast Hwy");

        assert_eq!(
            format_road_name(&road, &NoShields),
            "CA-1; Pacific Coast Hwy"
        );
    }

    #[test]
    fn test_exit_info_ordering() {
        let road = RoadNameInfo::new()
            .with_junction_reference("12A")
            .with_destination_reference("I-95")
            .with_name("Main St");

        assert_eq!(format_road_name(&road, &NoShields), "12A; I-95; Main St");
    }

    #[test]
    fn test_destination_preferred_over_name() {
        let road = RoadNameInfo::new()
            .with_junction_reference("4")
            .with_destination("London")
            .with_name("M4 spur");

        assert_eq!(format_road_name(&road, &NoShields), "4; London");
    }

    #[test]
    fn test_exit_info_suppresses_reference() {
        // With exit info present the plain reference is not spoken.
        let road = RoadNameInfo::new()
            .with_reference("A-10")
            .with_junction_reference("7");

        assert_eq!(format_road_name(&road, &NoShields), "7");
    }

    #[test]
    fn test_shield_substitution_first_match_only() {
        let shields = MapShields::new(&[
            ("US 101", &["Highway 101", "El Camino Real"]),
            ("I-95;US 1", &["I-95"]),
        ]);

        let road = RoadNameInfo::new()
            .with_reference("US 101")
            .with_name("Bayshore Fwy");
        assert_eq!(
            format_road_name(&road, &shields),
            "Highway 101; Bayshore Fwy"
        );

        let exit = RoadNameInfo::new()
            .with_junction_reference("23")
            .with_destination_reference("I-95;US 1");
        assert_eq!(format_road_name(&exit, &shields), "23; I-95");
    }

    #[test]
    fn test_empty_road_yields_empty_phrase() {
        assert_eq!(format_road_name(&RoadNameInfo::new(), &NoShields), "");
    }

    #[test]
    fn test_single_part_has_no_delimiter() {
        let road = RoadNameInfo::new().with_name("Broadway");
        assert_eq!(format_road_name(&road, &NoShields), "Broadway");
    }
}
