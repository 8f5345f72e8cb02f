//! Celestial body domain model.
//!
//! A small hierarchy of astronomical objects with physically derived
//! attributes: mass in absolute and reference-relative units, blackbody
//! emitted power, luminosity relative to the Sun, and distance estimates
//! from either the Hubble law or trigonometric parallax.
//!
//! The shapes form a closed set:
//!
//! * [`AstronomicalObject`] - identity, age, dual-unit mass, optional redshift
//! * [`SimpleBody`] - adds radius and surface temperature
//! * [`Star`] - adds solar-relative sizing and cached relative luminosity
//! * [`Exoplanet`] - adds habitability and parallax geometry, with the mass
//!   reference rebased from the Sun to the Earth
//! * [`CompoundObject`] - aggregate structures (galaxies, clusters) carrying
//!   only a relative mass, the one mutable mass in the model
//!
//! [`CelestialObject`] wraps them all for heterogeneous collections.

pub mod celestial_object;
pub mod compound;
pub mod error;
pub mod exoplanet;
pub mod object;
pub mod reference;
pub mod sigfig;
pub mod simple_body;
pub mod star;

#[cfg(test)]
mod celestial_object_test;
#[cfg(test)]
mod exoplanet_test;
#[cfg(test)]
mod sigfig_test;

pub use celestial_object::CelestialObject;
pub use compound::CompoundObject;
pub use error::BodyError;
pub use exoplanet::{Exoplanet, Parallax};
pub use object::AstronomicalObject;
pub use reference::{
    MassReference, HUBBLE_CONSTANT_KM_S_MPC, SOLAR_LUMINOSITY_W, SPEED_OF_LIGHT_KM_S,
    STEFAN_BOLTZMANN_W_M2_K4,
};
pub use simple_body::SimpleBody;
pub use star::Star;
