//! Physical constants and reference bodies.
//!
//! Every relative unit in the model is anchored to a fixed reference body.
//! Which body plays the role of "1.0" is a per-variant parameter, not an
//! override: stars and scale structures compare against the Sun, exoplanets
//! against the Earth.

use serde::{Deserialize, Serialize};
use units::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};

/// Hubble constant in km/(s·Mpc)
pub const HUBBLE_CONSTANT_KM_S_MPC: f64 = 70.8;

/// Speed of light in km/s
pub const SPEED_OF_LIGHT_KM_S: f64 = 3.0e5;

/// Stefan–Boltzmann constant in W/(m²·K⁴)
pub const STEFAN_BOLTZMANN_W_M2_K4: f64 = 5.670367e-8;

/// Luminosity of the Sun in watts
pub const SOLAR_LUMINOSITY_W: f64 = 3.827e26;

/// The reference body a relative mass is expressed against.
///
/// # Examples
///
/// ```rust
/// use celestial::MassReference;
/// use units::Mass;
///
/// let jupiter = Mass::from_kg(1.8987e27);
/// let in_earths = MassReference::Earth.relative(jupiter);
/// assert!(in_earths > 317.0 && in_earths < 318.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassReference {
    /// Solar masses (M☉), used by stars and aggregate structures
    Sun,
    /// Earth masses (M⊕), used by exoplanets
    Earth,
}

impl MassReference {
    /// The mass of the reference body.
    pub fn mass(&self) -> Mass {
        match self {
            Self::Sun => Mass::from_kg(SOLAR_MASS_KG),
            Self::Earth => Mass::from_kg(EARTH_MASS_KG),
        }
    }

    /// Converts an absolute mass to this reference's relative unit.
    pub fn relative(&self, mass: Mass) -> f64 {
        mass / self.mass()
    }

    /// Human-readable name of the relative unit.
    pub fn unit_label(&self) -> &'static str {
        match self {
            Self::Sun => "solar masses",
            Self::Earth => "Earth masses",
        }
    }
}
