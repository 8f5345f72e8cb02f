//! Stars: solar-relative sizing and a construction-time luminosity snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;
use units::{Length, Mass, Temperature, Time};

use crate::error::BodyError;
use crate::object::{describe_line, mass_field};
use crate::reference::{MassReference, SOLAR_LUMINOSITY_W};
use crate::sigfig::{option_verbatim, sig};
use crate::simple_body::SimpleBody;

/// A star.
///
/// Extends [`SimpleBody`] with sizing relative to the Sun and a luminosity
/// relative to the Sun's. The relative luminosity is computed once at
/// construction and stored; it is a snapshot, not recomputed afterwards.
/// No field it depends on has a setter today, so it cannot go stale, but
/// that invariant is fragile if setters are ever added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub(crate) body: SimpleBody,
    pub(crate) radius_relative: f64,
    pub(crate) luminosity_relative: f64,
}

impl Star {
    /// Create a star.
    ///
    /// When `radius_relative` is absent it is derived from the radius in
    /// solar radii, mirroring how the relative mass is derived.
    ///
    /// # Errors
    /// [`BodyError::MissingMass`] if both mass representations are absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use celestial::Star;
    /// use units::{Length, Mass, Temperature, Time};
    ///
    /// let sun = Star::new(
    ///     "Sun",
    ///     Time::from_years(4.603e9),
    ///     Some(Mass::from_kg(1.989e30)),
    ///     Length::from_m(6.9634e8),
    ///     0.0,
    ///     Temperature::from_kelvin(5778.0),
    ///     None,
    ///     None,
    /// )?;
    /// assert!(sun.luminosity_relative() > 1.0);
    /// # Ok::<(), celestial::BodyError>(())
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        age: Time,
        mass: Option<Mass>,
        radius: Length,
        redshift: f64,
        temperature: Temperature,
        mass_relative: Option<f64>,
        radius_relative: Option<f64>,
    ) -> Result<Self, BodyError> {
        let body = SimpleBody::new(
            name,
            age,
            mass,
            radius,
            temperature,
            mass_relative,
            Some(redshift),
        )?;
        let radius_relative = radius_relative.unwrap_or_else(|| radius.to_solar_radii());
        let luminosity_relative = body.emitted_power() / SOLAR_LUMINOSITY_W;
        Ok(Self {
            body,
            radius_relative,
            luminosity_relative,
        })
    }

    /// The star's name.
    pub fn name(&self) -> &str {
        self.body.name()
    }

    /// The star's age.
    pub fn age(&self) -> Time {
        self.body.age()
    }

    /// The absolute mass, when known.
    pub fn mass(&self) -> Option<Mass> {
        self.body.mass()
    }

    /// The mass in solar masses.
    pub fn mass_relative(&self) -> f64 {
        self.body.mass_relative()
    }

    /// The observed redshift.
    pub fn redshift(&self) -> f64 {
        self.body.redshift().unwrap_or(0.0)
    }

    /// The star's radius.
    pub fn radius(&self) -> Length {
        self.body.radius()
    }

    /// The star's radius in solar radii, as stored at construction.
    pub fn radius_relative(&self) -> f64 {
        self.radius_relative
    }

    /// The star's surface temperature.
    pub fn temperature(&self) -> Temperature {
        self.body.temperature()
    }

    /// Converts the absolute mass to solar masses.
    pub fn mass_to_relative(&self) -> Option<f64> {
        self.body.mass_to_relative()
    }

    /// Hubble-law distance in megaparsecs.
    pub fn distance(&self) -> Option<f64> {
        self.body.distance()
    }

    /// Total power radiated from the surface, in watts.
    pub fn emitted_power(&self) -> f64 {
        self.body.emitted_power()
    }

    /// Pure conversion of the radius to solar radii.
    pub fn radius_in_solar_radii(&self) -> f64 {
        self.body.radius().to_solar_radii()
    }

    /// Luminosity in solar luminosities, snapshotted at construction.
    pub fn luminosity_relative(&self) -> f64 {
        self.luminosity_relative
    }

    /// Evolutionary-stage classification from luminosity, temperature, and
    /// size, in the manner of a Hertzsprung–Russell lookup.
    ///
    /// Extension point; no algorithm is wired up yet.
    ///
    /// # Errors
    /// Always [`BodyError::NotImplemented`] for now.
    pub fn evolution(&self) -> Result<String, BodyError> {
        Err(BodyError::NotImplemented {
            operation: "stellar evolution classification",
        })
    }

    /// Human-readable one-line description.
    pub fn describe(&self) -> String {
        describe_line(
            "Star",
            self.name(),
            self.mass_relative(),
            MassReference::Sun,
            self.age(),
        )
    }

    /// Reconstructive form listing every constructor parameter.
    pub fn debug_form(&self) -> String {
        format!(
            "Star(name=\"{}\", age={}, mass={}, radius={}, redshift={}, temperature={}, mass_relative={}, radius_relative={})",
            self.name(),
            sig(self.age().to_years(), 4),
            mass_field(self.mass()),
            self.radius().to_m(),
            option_verbatim(self.body.redshift()),
            self.temperature().to_kelvin(),
            sig(self.mass_relative(), 3),
            self.radius_relative,
        )
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
