//! Light force thrust simulator.
//!
//! Models the speculative build-up of "light force thrust" from the
//! power, volume and wall reflectivity of a light-filled chamber.
//! The underlying model is non-standard physics and makes no accuracy
//! claims; it reproduces the documented formulas exactly.

pub mod config;
pub mod constants;
pub mod models;
pub mod physics;
