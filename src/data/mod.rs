//! Data structures for scenario simulation
//!
//! Defines scenario configuration, stakeholder relationships, and the
//! immutable audit records accumulated during a run.

pub mod config;
pub mod records;
pub mod stakeholder;

pub use config::*;
pub use records::*;
pub use stakeholder::*;

/// Lower bound of every health scalar in the simulation.
pub const SCALE_MIN: f64 = 0.0;
/// Upper bound of every health scalar in the simulation.
pub const SCALE_MAX: f64 = 100.0;

/// Clamp a health scalar to the simulation's [0, 100] scale.
///
/// Applied after every mutation; no dimension, relationship, or metric
/// value ever leaves this range.
pub fn clamp_health(value: f64) -> f64 {
    value.clamp(SCALE_MIN, SCALE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_health_bounds() {
        assert_eq!(clamp_health(-3.5), 0.0);
        assert_eq!(clamp_health(0.0), 0.0);
        assert_eq!(clamp_health(57.2), 57.2);
        assert_eq!(clamp_health(100.0), 100.0);
        assert_eq!(clamp_health(140.0), 100.0);
    }
}
