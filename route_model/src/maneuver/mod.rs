//! Maneuver definitions for vehicle and pedestrian guidance.

use serde::{Deserialize, Serialize};

/// Maneuvers announced while driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleManeuver {
    /// Placeholder for "no maneuver"; never announced.
    None,
    GoStraight,

    // Turns
    TurnRight,
    TurnSharpRight,
    TurnSlightRight,
    TurnLeft,
    TurnSharpLeft,
    TurnSlightLeft,
    UTurnLeft,
    UTurnRight,

    // Roundabouts
    EnterRoundabout,
    LeaveRoundabout,
    /// Intermediate roundabout state; never announced.
    StayOnRoundabout,

    /// Route start placeholder; never announced.
    StartAtEndOfStreet,

    // Highway exits
    ExitHighwayToLeft,
    ExitHighwayToRight,

    ReachedDestination,
}

/// Maneuvers announced while walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PedestrianManeuver {
    /// Placeholder for "no maneuver"; never announced.
    None,
    GoStraight,
    TurnRight,
    TurnLeft,
    ReachedDestination,
}

/// The maneuver carried by a notification, tagged by travel mode.
///
/// Exactly one arm is populated; pedestrian and vehicle maneuvers can never
/// be confused at a call site because matching is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Maneuver {
    Vehicle(VehicleManeuver),
    Pedestrian(PedestrianManeuver),
}

impl Maneuver {
    /// Whether this maneuver belongs to a pedestrian route.
    pub fn is_pedestrian(&self) -> bool {
        matches!(self, Maneuver::Pedestrian(_))
    }

    /// Whether this maneuver is a destination arrival (either travel mode).
    pub fn is_arrival(&self) -> bool {
        matches!(
            self,
            Maneuver::Vehicle(VehicleManeuver::ReachedDestination)
                | Maneuver::Pedestrian(PedestrianManeuver::ReachedDestination)
        )
    }

    /// Whether this maneuver is the "no maneuver" placeholder of its arm.
    pub fn is_none(&self) -> bool {
        matches!(
            self,
            Maneuver::Vehicle(VehicleManeuver::None)
                | Maneuver::Pedestrian(PedestrianManeuver::None)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_mode() {
        assert!(Maneuver::Pedestrian(PedestrianManeuver::TurnLeft).is_pedestrian());
        assert!(!Maneuver::Vehicle(VehicleManeuver::TurnLeft).is_pedestrian());
    }

    #[test]
    fn test_arrival_detection() {
        assert!(Maneuver::Vehicle(VehicleManeuver::ReachedDestination).is_arrival());
        assert!(Maneuver::Pedestrian(PedestrianManeuver::ReachedDestination).is_arrival());
        assert!(!Maneuver::Vehicle(VehicleManeuver::EnterRoundabout).is_arrival());
    }

    #[test]
    fn test_none_placeholder() {
        assert!(Maneuver::Vehicle(VehicleManeuver::None).is_none());
        assert!(Maneuver::Pedestrian(PedestrianManeuver::None).is_none());
        assert!(!Maneuver::Pedestrian(PedestrianManeuver::GoStraight).is_none());
    }
}
