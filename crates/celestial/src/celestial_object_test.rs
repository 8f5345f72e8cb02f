mod tests {
    use approx::assert_relative_eq;
    use units::{Length, Mass, Temperature, Time};

    use crate::celestial_object::CelestialObject;
    use crate::compound::CompoundObject;
    use crate::error::BodyError;
    use crate::exoplanet::{Exoplanet, Parallax};
    use crate::object::AstronomicalObject;
    use crate::simple_body::SimpleBody;
    use crate::star::Star;

    fn catalog() -> Vec<CelestialObject> {
        vec![
            AstronomicalObject::new(
                "Earth",
                Time::from_years(4.543e9),
                Some(Mass::from_kg(5.9742e24)),
                None,
                None,
            )
            .unwrap()
            .into(),
            SimpleBody::new(
                "Earth",
                Time::from_years(4.543e9),
                Some(Mass::from_kg(5.9742e24)),
                Length::from_m(637100.0),
                Temperature::from_kelvin(288.0),
                None,
                None,
            )
            .unwrap()
            .into(),
            Star::new(
                "Sun",
                Time::from_years(4.603e9),
                Some(Mass::from_kg(1.989e30)),
                Length::from_m(6.9634e8),
                0.0,
                Temperature::from_kelvin(5778.0),
                None,
                None,
            )
            .unwrap()
            .into(),
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
            .into(),
            CompoundObject::new(
                "Andromeda",
                Time::from_years(1.001e10),
                1.23e12,
                0.001004,
                "Galaxy",
            )
            .into(),
        ]
    }

    #[test]
    fn test_distance_dispatch() {
        let catalog = catalog();

        // No redshift, no estimate for the bare object and the simple body
        assert_eq!(catalog[0].distance(), None);
        assert_eq!(catalog[1].distance(), None);

        // Hubble law at z = 0 puts the Sun at the origin
        assert_eq!(catalog[2].distance(), Some(0.0));

        // Parallax for the exoplanet, Hubble law for the galaxy
        assert_relative_eq!(
            catalog[3].distance().unwrap(),
            597980424659.1892,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            catalog[4].distance().unwrap(),
            4.254237288135593,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_mass_relative_dispatch() {
        let catalog = catalog();
        assert_relative_eq!(
            catalog[0].mass_relative(),
            3.0036199095022618e-6,
            max_relative = 1e-12
        );
        // Exoplanets report Earth masses, not solar masses
        assert_relative_eq!(
            catalog[3].mass_relative(),
            317.9336905559277,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_only_compounds_accept_mass_reassignment() {
        let mut catalog = catalog();

        for object in catalog.iter() {
            assert_eq!(
                object.supports_mass_reassignment(),
                matches!(object, CelestialObject::Compound(_))
            );
        }

        assert_eq!(
            catalog[2].set_mass_relative(2.0),
            Err(BodyError::ImmutableProperty { kind: "star" })
        );
        assert_eq!(catalog[2].mass_relative(), 1.0);

        catalog[4].set_mass_relative(1.0e10).unwrap();
        assert_eq!(catalog[4].mass_relative(), 1.0e10);
    }

    #[test]
    fn test_rejected_values_propagate_through_the_wrapper() {
        let mut catalog = catalog();
        assert!(matches!(
            catalog[4].set_mass_relative(f64::NAN),
            Err(BodyError::NotFinite { .. })
        ));
        assert_eq!(
            catalog[4].set_mass_relative(-5.0),
            Err(BodyError::NegativeMass { value: -5.0 })
        );
    }

    #[test]
    fn test_display_matches_describe() {
        for object in catalog() {
            assert_eq!(object.to_string(), object.describe());
        }
    }

    #[test]
    fn test_names() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.iter().map(|o| o.name()).collect();
        assert_eq!(names, ["Earth", "Earth", "Sun", "Jupiter", "Andromeda"]);
    }
}
