mod tests {
    use approx::assert_relative_eq;

    use crate::length::{Length, SOLAR_RADIUS_M};

    #[test]
    fn test_length_conversions() {
        // Meters are the base unit and survive exactly
        let earth_radius = Length::from_m(637100.0);
        assert_eq!(earth_radius.to_m(), 637100.0);

        // Kilometer round trip
        let km = Length::from_km(1.0);
        assert_relative_eq!(km.to_m(), 1000.0);
        assert_relative_eq!(km.to_km(), 1.0);

        // Solar radii
        let sun = Length::from_solar_radii(1.0);
        assert_relative_eq!(sun.to_m(), SOLAR_RADIUS_M);

        // The Sun's observed radius is slightly over one nominal solar radius
        let observed = Length::from_m(6.9634e8);
        assert_relative_eq!(observed.to_solar_radii(), 1.0009199367543482, max_relative = 1e-12);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let a = Length::from_m(2000.0);
        let b = Length::from_m(500.0);

        assert_relative_eq!((a + b).to_m(), 2500.0);
        assert_relative_eq!((a - b).to_m(), 1500.0);
        assert_relative_eq!((a * 2.0).to_m(), 4000.0);
        assert_relative_eq!((a / 4.0).to_m(), 500.0);
        assert_relative_eq!(a / b, 4.0);
        assert_relative_eq!((3.0 * b).to_m(), 1500.0);
    }
}
