//! The root astronomical object: identity, age, dual-unit mass, redshift.

use serde::{Deserialize, Serialize};
use std::fmt;
use units::{Mass, Time};

use crate::error::BodyError;
use crate::reference::{MassReference, HUBBLE_CONSTANT_KM_S_MPC, SPEED_OF_LIGHT_KM_S};
use crate::sigfig::{option_verbatim, sig};

/// A generic astronomical object.
///
/// Carries the fields every body in the model shares: a free-form name, an
/// age in years, a mass in at least one of two unit systems, and an optional
/// observed redshift. Name and age accept any value; the model deliberately
/// does not bounds-check them.
///
/// The relative mass is derived from the absolute mass when not supplied
/// directly, and is read-only from the outside for every variant except
/// [`CompoundObject`](crate::CompoundObject).
///
/// # Examples
///
/// ```rust
/// use celestial::AstronomicalObject;
/// use units::{Mass, Time};
///
/// let earth = AstronomicalObject::new(
///     "Earth",
///     Time::from_years(4.543e9),
///     Some(Mass::from_kg(5.9742e24)),
///     None,
///     None,
/// )?;
/// assert!(earth.mass_relative() < 1e-5);
/// # Ok::<(), celestial::BodyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstronomicalObject {
    pub(crate) name: String,
    pub(crate) age: Time,
    pub(crate) mass: Option<Mass>,
    pub(crate) mass_relative: f64,
    pub(crate) redshift: Option<f64>,
}

impl AstronomicalObject {
    /// Create a generic astronomical object.
    ///
    /// At least one of `mass` and `mass_relative` must be supplied; when the
    /// relative mass is absent it is derived against the solar reference.
    ///
    /// # Errors
    /// [`BodyError::MissingMass`] if both mass representations are absent.
    pub fn new(
        name: impl Into<String>,
        age: Time,
        mass: Option<Mass>,
        mass_relative: Option<f64>,
        redshift: Option<f64>,
    ) -> Result<Self, BodyError> {
        let mass_relative = resolve_relative(mass, mass_relative, MassReference::Sun)?;
        Ok(Self {
            name: name.into(),
            age,
            mass,
            mass_relative,
            redshift,
        })
    }

    /// The object's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The object's age.
    pub fn age(&self) -> Time {
        self.age
    }

    /// The absolute mass, when known.
    pub fn mass(&self) -> Option<Mass> {
        self.mass
    }

    /// The mass in solar masses, derived at construction when not supplied.
    pub fn mass_relative(&self) -> f64 {
        self.mass_relative
    }

    /// The observed redshift, when any.
    pub fn redshift(&self) -> Option<f64> {
        self.redshift
    }

    /// Converts the absolute mass to solar masses.
    ///
    /// Pure function of the stored mass; `None` when only a relative mass
    /// is known.
    pub fn mass_to_relative(&self) -> Option<f64> {
        self.mass.map(|m| MassReference::Sun.relative(m))
    }

    /// Distance from the observer in megaparsecs, via the Hubble law.
    ///
    /// `None` when no redshift was observed. The linear relation is only a
    /// rough estimate, usable for redshift well below 1; local effects make
    /// it wrong even there (it puts Andromeda at 4.25 Mpc against a measured
    /// 0.77 Mpc). Proper cosmological models are out of scope for this model.
    pub fn distance(&self) -> Option<f64> {
        self.redshift.map(hubble_distance_mpc)
    }

    /// Human-readable one-line description.
    pub fn describe(&self) -> String {
        describe_line(
            "Astronomical object",
            &self.name,
            self.mass_relative,
            MassReference::Sun,
            self.age,
        )
    }

    /// Reconstructive form listing every constructor parameter.
    pub fn debug_form(&self) -> String {
        format!(
            "AstronomicalObject(name=\"{}\", age={}, mass={}, mass_relative={}, redshift={})",
            self.name,
            sig(self.age.to_years(), 4),
            mass_field(self.mass),
            sig(self.mass_relative, 3),
            option_verbatim(self.redshift),
        )
    }
}

impl fmt::Display for AstronomicalObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Hubble-law distance in megaparsecs for an observed redshift.
pub(crate) fn hubble_distance_mpc(redshift: f64) -> f64 {
    redshift * SPEED_OF_LIGHT_KM_S / HUBBLE_CONSTANT_KM_S_MPC
}

/// Shared derivation of the relative mass at construction time.
pub(crate) fn resolve_relative(
    mass: Option<Mass>,
    mass_relative: Option<f64>,
    reference: MassReference,
) -> Result<f64, BodyError> {
    match (mass, mass_relative) {
        (_, Some(relative)) => Ok(relative),
        (Some(mass), None) => Ok(reference.relative(mass)),
        (None, None) => Err(BodyError::MissingMass),
    }
}

/// Shared human-readable line: `<kind> <name> of mass <m> <unit> and age <a> years.`
pub(crate) fn describe_line(
    kind: &str,
    name: &str,
    mass_relative: f64,
    reference: MassReference,
    age: Time,
) -> String {
    format!(
        "{kind} {name} of mass {} {} and age {} years.",
        sig(mass_relative, 3),
        reference.unit_label(),
        sig(age.to_years(), 3),
    )
}

/// Mass field rendering for the reconstructive forms: five significant
/// figures in kilograms, `None` when only a relative mass is known.
pub(crate) fn mass_field(mass: Option<Mass>) -> String {
    match mass {
        Some(m) => sig(m.to_kg(), 5),
        None => "None".to_string(),
    }
}
