//! Impact Effects - Asteroid Impact Calculator
//!
//! A library crate computing the physical consequences of an asteroid
//! striking Earth, plus the Bevy plugins driving the desktop front end.

pub mod classification;
pub mod composition;
pub mod config;
pub mod error;
pub mod format;
pub mod location;
pub mod outcome;
pub mod params;
pub mod physics;
pub mod safety;
pub mod scenarios;
pub mod simulation;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
