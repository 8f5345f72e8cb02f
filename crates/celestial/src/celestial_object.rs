//! A celestial object of any shape.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::compound::CompoundObject;
use crate::error::BodyError;
use crate::exoplanet::Exoplanet;
use crate::object::AstronomicalObject;
use crate::simple_body::SimpleBody;
use crate::star::Star;

/// A celestial object of any of the model's five shapes.
///
/// This enum wraps the whole closed set for use in heterogeneous
/// collections, exposing the capabilities every shape shares: a relative
/// mass, a distance estimate, and the two string forms. The variant decides
/// the semantics - which reference body the mass is expressed against,
/// whether distance comes from the Hubble law or parallax, and whether the
/// relative mass accepts reassignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CelestialObject {
    Object(AstronomicalObject),
    SimpleBody(SimpleBody),
    Star(Star),
    Exoplanet(Exoplanet),
    Compound(CompoundObject),
}

impl CelestialObject {
    /// The object's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Object(o) => o.name(),
            Self::SimpleBody(b) => b.name(),
            Self::Star(s) => s.name(),
            Self::Exoplanet(e) => e.name(),
            Self::Compound(c) => c.name(),
        }
    }

    /// The mass in the variant's reference units (solar masses everywhere
    /// except exoplanets, which report Earth masses).
    pub fn mass_relative(&self) -> f64 {
        match self {
            Self::Object(o) => o.mass_relative(),
            Self::SimpleBody(b) => b.mass_relative(),
            Self::Star(s) => s.mass_relative(),
            Self::Exoplanet(e) => e.mass_relative(),
            Self::Compound(c) => c.mass_relative(),
        }
    }

    /// Estimated distance from the observer, `None` when the variant has no
    /// basis for an estimate.
    ///
    /// Units are variant-specific: megaparsecs for the Hubble-law shapes,
    /// meters for the parallax-based exoplanet.
    pub fn distance(&self) -> Option<f64> {
        match self {
            Self::Object(o) => o.distance(),
            Self::SimpleBody(b) => b.distance(),
            Self::Star(s) => s.distance(),
            Self::Exoplanet(e) => Some(e.distance()),
            Self::Compound(c) => Some(c.distance()),
        }
    }

    /// Human-readable one-line description.
    pub fn describe(&self) -> String {
        match self {
            Self::Object(o) => o.describe(),
            Self::SimpleBody(b) => b.describe(),
            Self::Star(s) => s.describe(),
            Self::Exoplanet(e) => e.describe(),
            Self::Compound(c) => c.describe(),
        }
    }

    /// Reconstructive form listing every constructor parameter.
    pub fn debug_form(&self) -> String {
        match self {
            Self::Object(o) => o.debug_form(),
            Self::SimpleBody(b) => b.debug_form(),
            Self::Star(s) => s.debug_form(),
            Self::Exoplanet(e) => e.debug_form(),
            Self::Compound(c) => c.debug_form(),
        }
    }

    /// Whether this variant allows reassigning its relative mass.
    pub fn supports_mass_reassignment(&self) -> bool {
        matches!(self, Self::Compound(_))
    }

    /// Replace the relative mass, on the one variant that allows it.
    ///
    /// # Errors
    /// [`BodyError::ImmutableProperty`] for every variant except
    /// [`CompoundObject`]; otherwise the compound setter's own validation
    /// errors.
    pub fn set_mass_relative(&mut self, value: f64) -> Result<(), BodyError> {
        match self {
            Self::Compound(c) => c.set_mass_relative(value),
            other => Err(BodyError::ImmutableProperty {
                kind: other.kind_label(),
            }),
        }
    }

    fn kind_label(&self) -> &'static str {
        match self {
            Self::Object(_) => "astronomical object",
            Self::SimpleBody(_) => "simple body",
            Self::Star(_) => "star",
            Self::Exoplanet(_) => "exoplanet",
            Self::Compound(_) => "compound object",
        }
    }
}

impl fmt::Display for CelestialObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<AstronomicalObject> for CelestialObject {
    fn from(object: AstronomicalObject) -> Self {
        Self::Object(object)
    }
}

impl From<SimpleBody> for CelestialObject {
    fn from(body: SimpleBody) -> Self {
        Self::SimpleBody(body)
    }
}

impl From<Star> for CelestialObject {
    fn from(star: Star) -> Self {
        Self::Star(star)
    }
}

impl From<Exoplanet> for CelestialObject {
    fn from(planet: Exoplanet) -> Self {
        Self::Exoplanet(planet)
    }
}

impl From<CompoundObject> for CelestialObject {
    fn from(compound: CompoundObject) -> Self {
        Self::Compound(compound)
    }
}
