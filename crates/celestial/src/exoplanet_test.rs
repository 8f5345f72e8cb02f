mod tests {
    use approx::assert_relative_eq;
    use units::{Length, Mass, Temperature, Time};

    use crate::error::BodyError;
    use crate::exoplanet::{Exoplanet, Parallax};

    fn jupiter() -> Exoplanet {
        Exoplanet::new(
            "Jupiter",
            Time::from_years(4.603e9),
            Some(Mass::from_kg(1.8987e27)),
            Length::from_m(69.911e6),
            false,
            Temperature::from_kelvin(163.0),
            Parallax::new(Length::from_m(6.378e6), 2.2),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_mass_referenced_against_earth() {
        // The reference body changes for this variant: Earth, not the Sun
        let jupiter = jupiter();
        assert_relative_eq!(
            jupiter.mass_relative(),
            317.9336905559277,
            max_relative = 1e-12
        );
        assert_eq!(jupiter.mass_to_relative(), Some(jupiter.mass_relative()));
    }

    #[test]
    fn test_parallax_distance() {
        assert_relative_eq!(
            jupiter().distance(),
            597980424659.1892,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_distance_needs_no_redshift() {
        // Parallax geometry alone fixes the distance; there is no redshift
        // field on this variant at all.
        assert!(jupiter().distance().is_finite());
    }

    #[test]
    fn test_missing_mass_is_rejected() {
        let result = Exoplanet::new(
            "X",
            Time::from_years(1.0e9),
            None,
            Length::from_m(637100.0),
            true,
            Temperature::from_kelvin(288.0),
            Parallax::new(Length::from_m(6.378e6), 2.2),
            None,
        );
        assert_eq!(result.unwrap_err(), BodyError::MissingMass);
    }

    #[test]
    fn test_explicit_relative_mass_wins() {
        let planet = Exoplanet::new(
            "X",
            Time::from_years(1.0e9),
            Some(Mass::from_kg(1.8987e27)),
            Length::from_m(69.911e6),
            false,
            Temperature::from_kelvin(163.0),
            Parallax::new(Length::from_m(6.378e6), 2.2),
            Some(300.0),
        )
        .unwrap();
        assert_eq!(planet.mass_relative(), 300.0);
    }

    #[test]
    fn test_habitability_score_not_computed() {
        assert_eq!(jupiter().habitability_score(), None);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            jupiter().describe(),
            "Exoplanet Jupiter of mass 318 Earth masses and age 4.6e9 years."
        );
    }

    #[test]
    fn test_debug_form() {
        assert_eq!(
            jupiter().debug_form(),
            "Exoplanet(name=\"Jupiter\", age=4.603e9, mass=1.8987e27, radius=69911000, in_habitable_zone=false, temperature=163, parallax=(6378000, 2.2), mass_relative=318)"
        );
    }
}
