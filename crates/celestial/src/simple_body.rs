//! A self-luminous physical body with a radius and a surface temperature.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use units::{Length, Mass, Temperature, Time};

use crate::error::BodyError;
use crate::object::{describe_line, mass_field, AstronomicalObject};
use crate::reference::{MassReference, STEFAN_BOLTZMANN_W_M2_K4};
use crate::sigfig::{option_verbatim, sig};

/// A single physical body: the root fields plus a radius and a mean surface
/// temperature, enough to treat it as a blackbody radiator.
///
/// Radius and temperature are not validated against non-physical values;
/// that is the caller's responsibility for this entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleBody {
    pub(crate) object: AstronomicalObject,
    pub(crate) radius: Length,
    pub(crate) temperature: Temperature,
}

impl SimpleBody {
    /// Create a simple body.
    ///
    /// # Errors
    /// [`BodyError::MissingMass`] if both mass representations are absent.
    pub fn new(
        name: impl Into<String>,
        age: Time,
        mass: Option<Mass>,
        radius: Length,
        temperature: Temperature,
        mass_relative: Option<f64>,
        redshift: Option<f64>,
    ) -> Result<Self, BodyError> {
        let object = AstronomicalObject::new(name, age, mass, mass_relative, redshift)?;
        Ok(Self {
            object,
            radius,
            temperature,
        })
    }

    /// The body's name.
    pub fn name(&self) -> &str {
        self.object.name()
    }

    /// The body's age.
    pub fn age(&self) -> Time {
        self.object.age()
    }

    /// The absolute mass, when known.
    pub fn mass(&self) -> Option<Mass> {
        self.object.mass()
    }

    /// The mass in solar masses.
    pub fn mass_relative(&self) -> f64 {
        self.object.mass_relative()
    }

    /// The observed redshift, when any.
    pub fn redshift(&self) -> Option<f64> {
        self.object.redshift()
    }

    /// The body's radius.
    pub fn radius(&self) -> Length {
        self.radius
    }

    /// The body's mean surface temperature.
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Converts the absolute mass to solar masses.
    pub fn mass_to_relative(&self) -> Option<f64> {
        self.object.mass_to_relative()
    }

    /// Hubble-law distance in megaparsecs, when a redshift was observed.
    pub fn distance(&self) -> Option<f64> {
        self.object.distance()
    }

    /// Total power radiated from the surface, in watts.
    ///
    /// Stefan–Boltzmann law for a spherical blackbody:
    /// `4 π r² σ T⁴`.
    pub fn emitted_power(&self) -> f64 {
        4.0 * PI * self.radius.to_m().powi(2) * STEFAN_BOLTZMANN_W_M2_K4 * self.temperature.powi(4)
    }

    /// Human-readable one-line description.
    pub fn describe(&self) -> String {
        describe_line(
            "Simple body",
            self.name(),
            self.mass_relative(),
            MassReference::Sun,
            self.age(),
        )
    }

    /// Reconstructive form listing every constructor parameter.
    pub fn debug_form(&self) -> String {
        format!(
            "SimpleBody(name=\"{}\", age={}, mass={}, radius={}, temperature={}, mass_relative={}, redshift={})",
            self.name(),
            sig(self.age().to_years(), 4),
            mass_field(self.mass()),
            self.radius.to_m(),
            self.temperature.to_kelvin(),
            sig(self.mass_relative(), 3),
            option_verbatim(self.redshift()),
        )
    }
}

impl fmt::Display for SimpleBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
