//! Notification input model - one structured navigation event per call.

use serde::{Deserialize, Serialize};

use crate::maneuver::{Maneuver, PedestrianManeuver, VehicleManeuver};

/// Unit system the notification distance is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Distances in meters.
    Metric,
    /// Distances in feet.
    Imperial,
}

/// Raw naming metadata for the street a maneuver leads onto.
///
/// Fields are independently optional; an empty string means "absent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RoadNameInfo {
    /// Road reference (e.g. "CA-1"), possibly a shield-parseable string.
    pub reference: String,

    /// Human-readable street name.
    pub name: String,

    /// Signposted destination of a link or exit.
    pub destination: String,

    /// Road reference of the signposted destination.
    pub destination_reference: String,

    /// Exit/junction number (e.g. "12A").
    pub junction_reference: String,
}

impl RoadNameInfo {
    /// Create an empty road-name record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the road reference.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// Set the street name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the signposted destination.
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Set the destination road reference.
    pub fn with_destination_reference(mut self, reference: impl Into<String>) -> Self {
        self.destination_reference = reference.into();
        self
    }

    /// Set the exit/junction number.
    pub fn with_junction_reference(mut self, reference: impl Into<String>) -> Self {
        self.junction_reference = reference.into();
        self
    }

    /// A record counts as exit info when it names a junction or a
    /// destination reference.
    pub fn has_exit_info(&self) -> bool {
        !self.junction_reference.is_empty() || !self.destination_reference.is_empty()
    }

    /// True when every field is absent.
    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
            && self.name.is_empty()
            && self.destination.is_empty()
            && self.destination_reference.is_empty()
            && self.junction_reference.is_empty()
    }
}

/// A single navigation event to be turned into spoken text.
///
/// Immutable per call; the voice core never mutates or stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// The maneuver to announce, tagged by travel mode.
    pub maneuver: Maneuver,

    /// Distance to the maneuver in sounded units (meters or feet).
    pub distance: u32,

    /// Unit system `distance` is expressed in.
    pub unit_system: UnitSystem,

    /// "Then do X" secondary instruction instead of a distance-qualified one.
    pub use_then_phrasing: bool,

    /// Which roundabout exit to take; meaningful only for `LeaveRoundabout`.
    pub roundabout_exit: u8,

    /// Naming metadata for the next street, if any.
    pub next_street: RoadNameInfo,
}

impl Notification {
    /// Create a vehicle notification for the given maneuver.
    pub fn vehicle(maneuver: VehicleManeuver) -> Self {
        Self {
            maneuver: Maneuver::Vehicle(maneuver),
            distance: 0,
            unit_system: UnitSystem::Metric,
            use_then_phrasing: false,
            roundabout_exit: 0,
            next_street: RoadNameInfo::default(),
        }
    }

    /// Create a pedestrian notification for the given maneuver.
    pub fn pedestrian(maneuver: PedestrianManeuver) -> Self {
        Self {
            maneuver: Maneuver::Pedestrian(maneuver),
            distance: 0,
            unit_system: UnitSystem::Metric,
            use_then_phrasing: false,
            roundabout_exit: 0,
            next_street: RoadNameInfo::default(),
        }
    }

    /// Set the distance and its unit system.
    pub fn with_distance(mut self, distance: u32, unit_system: UnitSystem) -> Self {
        self.distance = distance;
        self.unit_system = unit_system;
        self
    }

    /// Mark this as a "then do X" secondary instruction.
    pub fn with_then_phrasing(mut self) -> Self {
        self.use_then_phrasing = true;
        self
    }

    /// Set the roundabout exit ordinal.
    pub fn with_roundabout_exit(mut self, exit: u8) -> Self {
        self.roundabout_exit = exit;
        self
    }

    /// Attach next-street naming metadata.
    pub fn with_next_street(mut self, next_street: RoadNameInfo) -> Self {
        self.next_street = next_street;
        self
    }

    /// Whether this notification belongs to a pedestrian route.
    pub fn is_pedestrian(&self) -> bool {
        self.maneuver.is_pedestrian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_builder() {
        let notification = Notification::vehicle(VehicleManeuver::TurnRight)
            .with_distance(200, UnitSystem::Imperial)
            .with_next_street(RoadNameInfo::new().with_name("Main St"));

        assert_eq!(notification.distance, 200);
        assert_eq!(notification.unit_system, UnitSystem::Imperial);
        assert!(!notification.use_then_phrasing);
        assert!(!notification.is_pedestrian());
        assert_eq!(notification.next_street.name, "Main St");
    }

    #[test]
    fn test_pedestrian_notification() {
        let notification =
            Notification::pedestrian(PedestrianManeuver::TurnLeft).with_then_phrasing();

        assert!(notification.is_pedestrian());
        assert!(notification.use_then_phrasing);
        assert_eq!(notification.distance, 0);
    }

    #[test]
    fn test_exit_info() {
        let plain = RoadNameInfo::new()
            .with_reference("CA-1")
            .with_name("Pacific Coast Hwy");
        assert!(!plain.has_exit_info());
        assert!(!plain.is_empty());

        let with_junction = RoadNameInfo::new().with_junction_reference("12A");
        assert!(with_junction.has_exit_info());

        let with_dest_ref = RoadNameInfo::new().with_destination_reference("I-95");
        assert!(with_dest_ref.has_exit_info());

        assert!(RoadNameInfo::new().is_empty());
    }

    #[test]
    fn test_notification_serialization() {
        let notification = Notification::vehicle(VehicleManeuver::LeaveRoundabout)
            .with_roundabout_exit(3)
            .with_then_phrasing();

        let json = serde_json::to_string(&notification).unwrap();
        let back: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, notification);
    }
}
