//! Significant-figure formatting for the model's string forms.
//!
//! The human-readable and reconstructive forms round each numeric field to a
//! fixed number of significant figures. Values whose decimal exponent lies in
//! `-4..digits` render in fixed notation, everything else in `e` notation,
//! with trailing zeros stripped either way.

/// Formats `value` to `digits` significant figures.
///
/// # Examples
///
/// ```rust
/// use celestial::sigfig::sig;
///
/// assert_eq!(sig(4.543e9, 4), "4.543e9");
/// assert_eq!(sig(317.9336905559277, 3), "318");
/// assert_eq!(sig(3.0036199095022618e-6, 3), "3e-6");
/// assert_eq!(sig(1.0, 3), "1");
/// ```
pub fn sig(value: f64, digits: usize) -> String {
    debug_assert!(digits > 0);
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to the requested figure count via scientific notation, then pick
    // the final notation from the rounded exponent.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = sci
        .split_once('e')
        .expect("scientific formatting always contains an exponent");
    let exponent: i32 = exponent
        .parse()
        .expect("scientific formatting always has an integer exponent");

    if exponent >= -4 && exponent < digits as i32 {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        let rounded: f64 = sci
            .parse()
            .expect("scientific formatting always parses back");
        trim_zeros(format!("{rounded:.decimals$}"))
    } else {
        format!("{}e{}", trim_zeros(mantissa.to_string()), exponent)
    }
}

/// Renders an optional value verbatim, `None` when absent.
pub fn option_verbatim(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

fn trim_zeros(s: String) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
