//! Event and message types exchanged across systems.
//!
//! Submodules:
//! - [`fire`] – "tank fired" messages consumed by the bullet spawner
//! - [`input`] – key press/release notifications delivered by the host
pub mod fire;
pub mod input;
