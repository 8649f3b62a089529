//! Closed-form electrostatic field of a finite coaxial capacitor.

mod coaxial;
mod sample;

pub use coaxial::{evaluate_field, geometric_factor, CoaxialCapacitor};
pub use sample::FieldSample;
