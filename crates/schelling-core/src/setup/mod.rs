//! Population Setup
//!
//! Seeding the grid with agents and allocating influencer roles.

pub mod population;

pub use population::*;
