//! Traffic Flow Library
//!
//! A single-crossing traffic game that can run headless or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
