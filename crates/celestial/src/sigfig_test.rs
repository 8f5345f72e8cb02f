mod tests {
    use crate::sigfig::{option_verbatim, sig};

    #[test]
    fn test_fixed_notation() {
        assert_eq!(sig(288.0, 3), "288");
        assert_eq!(sig(317.9336905559277, 3), "318");
        assert_eq!(sig(1.0, 3), "1");
        assert_eq!(sig(0.001004, 3), "0.001");
        assert_eq!(sig(-0.00123456, 3), "-0.00123");
        assert_eq!(sig(0.0, 3), "0");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(sig(4.543e9, 3), "4.54e9");
        assert_eq!(sig(4.543e9, 4), "4.543e9");
        assert_eq!(sig(4.603e9, 3), "4.6e9");
        assert_eq!(sig(5.9742e24, 5), "5.9742e24");
        assert_eq!(sig(1.001e10, 3), "1e10");
        assert_eq!(sig(1.001e10, 4), "1.001e10");
        assert_eq!(sig(1.23e12, 3), "1.23e12");
        assert_eq!(sig(3.0036199095022618e-6, 3), "3e-6");
    }

    #[test]
    fn test_rounding_carries_into_the_exponent() {
        assert_eq!(sig(999.5, 3), "1e3");
        assert_eq!(sig(0.99996, 4), "1");
    }

    #[test]
    fn test_option_verbatim() {
        assert_eq!(option_verbatim(None), "None");
        assert_eq!(option_verbatim(Some(0.0)), "0");
        assert_eq!(option_verbatim(Some(0.001004)), "0.001004");
    }
}
