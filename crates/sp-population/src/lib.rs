//! `sp-population` — demographic agent generation.
//!
//! One [`Agent`] per person, generated independently: age drives the
//! worker/student split, everything else is sampled.  Assignment to places
//! happens later in `sp-assign`; this crate knows nothing about entities.

pub mod agent;
pub mod generator;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use generator::generate_population;
