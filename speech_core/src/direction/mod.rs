//! Direction resolver - maps a maneuver state onto its localization key.
//!
//! A pure decision tree: no lookups, no I/O. Roundabout exits and arrivals
//! are resolved by dedicated sub-resolvers so they stay independently
//! testable.

use route_model::{Maneuver, Notification, PedestrianManeuver, VehicleManeuver};

use crate::error::SynthesisError;

/// Exits beyond the eleventh are announced generically.
const MAX_SOUNDED_EXIT: u8 = 11;

/// Localization key for a notification's maneuver.
///
/// Sentinel states (`None`, `StayOnRoundabout`, `StartAtEndOfStreet`) are
/// caller contract violations.
pub fn direction_key(notification: &Notification) -> Result<String, SynthesisError> {
    match notification.maneuver {
        Maneuver::Pedestrian(maneuver) => match maneuver {
            PedestrianManeuver::GoStraight => Ok("go_straight".to_string()),
            PedestrianManeuver::TurnRight => Ok("make_a_right_turn".to_string()),
            PedestrianManeuver::TurnLeft => Ok("make_a_left_turn".to_string()),
            PedestrianManeuver::ReachedDestination => arrival_key(notification),
            PedestrianManeuver::None => Err(SynthesisError::UnannouncableManeuver(
                notification.maneuver,
            )),
        },
        Maneuver::Vehicle(maneuver) => match maneuver {
            VehicleManeuver::GoStraight => Ok("go_straight".to_string()),
            VehicleManeuver::TurnRight => Ok("make_a_right_turn".to_string()),
            VehicleManeuver::TurnSharpRight => Ok("make_a_sharp_right_turn".to_string()),
            VehicleManeuver::TurnSlightRight => Ok("make_a_slight_right_turn".to_string()),
            VehicleManeuver::TurnLeft => Ok("make_a_left_turn".to_string()),
            VehicleManeuver::TurnSharpLeft => Ok("make_a_sharp_left_turn".to_string()),
            VehicleManeuver::TurnSlightLeft => Ok("make_a_slight_left_turn".to_string()),
            VehicleManeuver::UTurnLeft | VehicleManeuver::UTurnRight => {
                Ok("make_a_u_turn".to_string())
            }
            VehicleManeuver::EnterRoundabout => Ok("enter_the_roundabout".to_string()),
            VehicleManeuver::LeaveRoundabout => roundabout_key(notification),
            VehicleManeuver::ReachedDestination => arrival_key(notification),
            VehicleManeuver::ExitHighwayToLeft | VehicleManeuver::ExitHighwayToRight => {
                Ok("exit".to_string())
            }
            VehicleManeuver::StayOnRoundabout
            | VehicleManeuver::StartAtEndOfStreet
            | VehicleManeuver::None => Err(SynthesisError::UnannouncableManeuver(
                notification.maneuver,
            )),
        },
    }
}

/// Localization key for leaving a roundabout.
///
/// The numbered "take the Nth exit" phrasing is only used for secondary
/// ("then") instructions; the notification just before the exit itself is
/// always the generic announcement.
pub fn roundabout_key(notification: &Notification) -> Result<String, SynthesisError> {
    if notification.maneuver != Maneuver::Vehicle(VehicleManeuver::LeaveRoundabout) {
        return Err(SynthesisError::UnannouncableManeuver(notification.maneuver));
    }

    if !notification.use_then_phrasing {
        return Ok("leave_the_roundabout".to_string());
    }

    if notification.roundabout_exit == 0 || notification.roundabout_exit > MAX_SOUNDED_EXIT {
        return Ok("leave_the_roundabout".to_string());
    }

    Ok(format!("take_the_{}_exit", notification.roundabout_exit))
}

/// Localization key for arriving at the destination.
///
/// An arrival still qualified by distance or sequencing announces the
/// destination ahead; an unqualified one announces that it is reached.
pub fn arrival_key(notification: &Notification) -> Result<String, SynthesisError> {
    if !notification.maneuver.is_arrival() {
        return Err(SynthesisError::UnannouncableManeuver(notification.maneuver));
    }

    if notification.distance != 0 || notification.use_then_phrasing {
        Ok("destination".to_string())
    } else {
        Ok("you_have_reached_the_destination".to_string())
    }
}
