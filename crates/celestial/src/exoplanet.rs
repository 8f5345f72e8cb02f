//! Exoplanets: Earth-referenced mass and trigonometric parallax distance.

use serde::{Deserialize, Serialize};
use std::fmt;
use units::{Length, Mass, Temperature, Time};

use crate::error::BodyError;
use crate::object::{describe_line, mass_field, resolve_relative};
use crate::reference::MassReference;
use crate::sigfig::sig;
use crate::simple_body::SimpleBody;

/// Parallax observation geometry: a baseline length and the small angular
/// shift seen across it, in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parallax {
    pub baseline: Length,
    pub angle_arcsec: f64,
}

impl Parallax {
    /// Create a parallax observation.
    pub fn new(baseline: Length, angle_arcsec: f64) -> Self {
        Self {
            baseline,
            angle_arcsec,
        }
    }

    /// Distance in meters from the baseline and the observed shift.
    pub fn distance_m(&self) -> f64 {
        let half_angle = (self.angle_arcsec / 3600.0).to_radians() / 2.0;
        self.baseline.to_m() / (2.0 * half_angle.sin())
    }
}

/// A planet outside the solar system.
///
/// Extends [`SimpleBody`] with a habitable-zone flag and parallax geometry.
/// Two behaviors change relative to the rest of the hierarchy, deliberately:
/// the mass reference is the Earth rather than the Sun (nobody wants five
/// leading zeros in a planet's relative mass), and distance comes from
/// trigonometric parallax rather than the Hubble law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exoplanet {
    pub(crate) body: SimpleBody,
    pub(crate) in_habitable_zone: bool,
    pub(crate) parallax: Parallax,
}

impl Exoplanet {
    /// Create an exoplanet.
    ///
    /// The relative mass is derived against the Earth reference when not
    /// supplied directly.
    ///
    /// # Errors
    /// [`BodyError::MissingMass`] if both mass representations are absent.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        age: Time,
        mass: Option<Mass>,
        radius: Length,
        in_habitable_zone: bool,
        temperature: Temperature,
        parallax: Parallax,
        mass_relative: Option<f64>,
    ) -> Result<Self, BodyError> {
        // Derive against the Earth reference before handing off, so the
        // shared constructor never applies the solar conversion here.
        let mass_relative = resolve_relative(mass, mass_relative, MassReference::Earth)?;
        let body = SimpleBody::new(
            name,
            age,
            mass,
            radius,
            temperature,
            Some(mass_relative),
            None,
        )?;
        Ok(Self {
            body,
            in_habitable_zone,
            parallax,
        })
    }

    /// The planet's name.
    pub fn name(&self) -> &str {
        self.body.name()
    }

    /// The planet's age.
    pub fn age(&self) -> Time {
        self.body.age()
    }

    /// The absolute mass, when known.
    pub fn mass(&self) -> Option<Mass> {
        self.body.mass()
    }

    /// The mass in Earth masses.
    pub fn mass_relative(&self) -> f64 {
        self.body.mass_relative()
    }

    /// The planet's radius.
    pub fn radius(&self) -> Length {
        self.body.radius()
    }

    /// The planet's mean surface temperature.
    pub fn temperature(&self) -> Temperature {
        self.body.temperature()
    }

    /// Whether the planet orbits inside its star's habitable zone.
    pub fn in_habitable_zone(&self) -> bool {
        self.in_habitable_zone
    }

    /// The parallax observation for this planet.
    pub fn parallax(&self) -> Parallax {
        self.parallax
    }

    /// Converts the absolute mass to Earth masses.
    ///
    /// The reference body changes here: the rest of the hierarchy compares
    /// against the Sun, exoplanets against the Earth.
    pub fn mass_to_relative(&self) -> Option<f64> {
        self.body.mass().map(|m| MassReference::Earth.relative(m))
    }

    /// Distance from the observer in meters, via trigonometric parallax.
    ///
    /// Redshift plays no role for this variant; the geometry alone fixes
    /// the distance.
    pub fn distance(&self) -> f64 {
        self.parallax.distance_m()
    }

    /// Total power radiated from the surface, in watts.
    pub fn emitted_power(&self) -> f64 {
        self.body.emitted_power()
    }

    /// Suitability for life in `[0, 1]`, combining mass, radius, and zone
    /// membership. Extension point; returns `None` until an algorithm is
    /// supplied, which is "not computed", not an error.
    pub fn habitability_score(&self) -> Option<f64> {
        None
    }

    /// Human-readable one-line description.
    pub fn describe(&self) -> String {
        describe_line(
            "Exoplanet",
            self.name(),
            self.mass_relative(),
            MassReference::Earth,
            self.age(),
        )
    }

    /// Reconstructive form listing every constructor parameter.
    pub fn debug_form(&self) -> String {
        format!(
            "Exoplanet(name=\"{}\", age={}, mass={}, radius={}, in_habitable_zone={}, temperature={}, parallax=({}, {}), mass_relative={})",
            self.name(),
            sig(self.age().to_years(), 4),
            mass_field(self.mass()),
            self.radius().to_m(),
            self.in_habitable_zone,
            self.temperature().to_kelvin(),
            self.parallax.baseline.to_m(),
            self.parallax.angle_arcsec,
            sig(self.mass_relative(), 3),
        )
    }
}

impl fmt::Display for Exoplanet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
