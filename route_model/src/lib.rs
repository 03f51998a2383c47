//! # Route Model
//!
//! The "Route Bible" crate - maneuver enumerations, the notification input
//! model, and the sounded-distance tables for the voice guidance core.
//! This crate is the single source of truth for what a navigation event
//! looks like and does not contain any text-generation logic.

pub mod distance;
pub mod maneuver;
pub mod notification;

pub use distance::*;
pub use maneuver::*;
pub use notification::*;
