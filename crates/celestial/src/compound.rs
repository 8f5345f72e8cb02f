//! Aggregate structures: galaxies, clusters, and other compound objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use units::Time;

use crate::error::BodyError;
use crate::object::{describe_line, hubble_distance_mpc};
use crate::reference::MassReference;
use crate::sigfig::sig;

/// A scale structure identified by a free-form category tag.
///
/// Aggregate structures are never characterized in kilograms; the relative
/// mass in solar masses is their only mass representation, and uniquely in
/// the model it accepts reassignment through a validated setter. There is no
/// radius or temperature, so nothing depends on the mass that would need
/// recomputing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundObject {
    pub(crate) name: String,
    pub(crate) age: Time,
    pub(crate) mass_relative: f64,
    pub(crate) redshift: f64,
    // serialized as "kind": the wrapper enum already claims the "type" key
    pub(crate) kind: String,
}

impl CompoundObject {
    /// Create a compound object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use celestial::CompoundObject;
    /// use units::Time;
    ///
    /// let andromeda = CompoundObject::new(
    ///     "Andromeda",
    ///     Time::from_years(1.001e10),
    ///     1.23e12,
    ///     0.001004,
    ///     "Galaxy",
    /// );
    /// assert_eq!(andromeda.mass_relative(), 1.23e12);
    /// ```
    pub fn new(
        name: impl Into<String>,
        age: Time,
        mass_relative: f64,
        redshift: f64,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            mass_relative,
            redshift,
            kind: kind.into(),
        }
    }

    /// The structure's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The structure's age.
    pub fn age(&self) -> Time {
        self.age
    }

    /// The mass in solar masses, the only mass representation this variant
    /// carries.
    pub fn mass_relative(&self) -> f64 {
        self.mass_relative
    }

    /// The observed redshift.
    pub fn redshift(&self) -> f64 {
        self.redshift
    }

    /// The structure's category tag, e.g. "Galaxy" or "Cluster".
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Replace the relative mass.
    ///
    /// Zero and positive finite values replace the stored mass exactly;
    /// nothing else depends on it, so no recomputation follows.
    ///
    /// # Errors
    /// [`BodyError::NotFinite`] for NaN or infinite input,
    /// [`BodyError::NegativeMass`] for negative input.
    pub fn set_mass_relative(&mut self, value: f64) -> Result<(), BodyError> {
        if !value.is_finite() {
            return Err(BodyError::NotFinite { value });
        }
        if value < 0.0 {
            return Err(BodyError::NegativeMass { value });
        }
        self.mass_relative = value;
        Ok(())
    }

    /// Distance from the observer in megaparsecs, via the Hubble law.
    pub fn distance(&self) -> f64 {
        hubble_distance_mpc(self.redshift)
    }

    /// Human-readable one-line description, led by the category tag.
    pub fn describe(&self) -> String {
        describe_line(
            &self.kind,
            &self.name,
            self.mass_relative,
            MassReference::Sun,
            self.age,
        )
    }

    /// Reconstructive form listing every constructor parameter.
    pub fn debug_form(&self) -> String {
        format!(
            "CompoundObject(name=\"{}\", age={}, mass_relative={}, redshift={}, type=\"{}\")",
            self.name,
            sig(self.age.to_years(), 4),
            sig(self.mass_relative, 3),
            self.redshift,
            self.kind,
        )
    }
}

impl fmt::Display for CompoundObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
