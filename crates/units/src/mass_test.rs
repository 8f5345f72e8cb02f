mod tests {
    use approx::assert_relative_eq;

    use crate::mass::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};

    #[test]
    fn test_mass_conversions() {
        // Test solar masses to kilograms
        let mass_sm = Mass::from_solar_masses(1.0);
        assert_relative_eq!(mass_sm.to_kg(), SOLAR_MASS_KG);

        // Test kilograms to solar masses
        let mass_kg = Mass::from_kg(SOLAR_MASS_KG);
        assert_relative_eq!(mass_kg.to_solar_masses(), 1.0);

        // Earth's mass expressed in solar masses
        let earth = Mass::from_kg(5.9742e24);
        assert_relative_eq!(earth.to_solar_masses(), 3.0036199095022618e-6, max_relative = 1e-12);

        // Test round trip
        let original = 317.8; // Jupiter in Earth masses
        let mass = Mass::from_earth_masses(original);
        let kg_value = mass.to_kg();
        let round_trip = Mass::from_kg(kg_value).to_earth_masses();
        assert_relative_eq!(round_trip, original);
    }

    #[test]
    fn test_mass_ratio() {
        // Dividing two masses yields a dimensionless ratio
        let sun = Mass::from_kg(SOLAR_MASS_KG);
        let earth = Mass::from_kg(EARTH_MASS_KG);
        assert_relative_eq!(sun / earth, SOLAR_MASS_KG / EARTH_MASS_KG);
        assert_relative_eq!(earth / earth, 1.0);
    }

    #[test]
    fn test_mass_arithmetic_operations() {
        let mass1 = Mass::from_solar_masses(2.0);
        let mass2 = Mass::from_solar_masses(1.5);

        // Test addition and subtraction
        assert_relative_eq!((mass1 + mass2).to_solar_masses(), 3.5);
        assert_relative_eq!((mass1 - mass2).to_solar_masses(), 0.5);

        // Test multiplication with f64
        let scaled = mass1 * 3.0;
        assert_relative_eq!(scaled.to_solar_masses(), 6.0);

        // Test division with f64
        let divided = mass1 / 4.0;
        assert_relative_eq!(divided.to_solar_masses(), 0.5);

        // Test commutative multiplication
        let mass = Mass::from_earth_masses(100.0);
        let commutative = 2.5 * mass;
        assert_relative_eq!(commutative.to_earth_masses(), 250.0);
    }
}
