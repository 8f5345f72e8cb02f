//! Physical quantity types for the celestial body model.
//!
//! Each quantity is a thin `f64` newtype with an SI-flavored base unit
//! (kilograms, meters, kelvin, years) and named constructors/accessors for
//! the other units the model works in. Dimensionless ratios fall out of
//! dividing a quantity by a quantity of the same kind.

pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod mass_test;

pub use length::{Length, SOLAR_RADIUS_M};
pub use mass::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};
pub use temperature::Temperature;
pub use time::Time;
