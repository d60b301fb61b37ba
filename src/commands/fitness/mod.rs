//! Goal tracking, the activity log and motivation.

pub mod activity;
pub mod goal;
pub mod motivation;
pub mod progress;
