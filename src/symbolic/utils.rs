// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
// the collection of utility functions for printing of numbers

/// Decimal formatting used for printing expressions: integral values keep a trailing `.0`
/// (`2.0`, `-4.0`), other values use the shortest representation (`0.5`, `2.3`),
/// magnitudes below 1e-4 or from 1e16 up switch to exponent form (`1e-05`, `1.5e+16`),
/// non-finite values print as `nan`, `inf`, `-inf`.
pub fn format_float(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(value);
    }
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        }
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

// shortest mantissa, signed exponent of at least two digits
fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

/// vector of `num_values` equally spaced points from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    match num_values {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num_values - 1) as f64;
            (0..num_values).map(|i| start + step * (i as f64)).collect()
        }
    }
}
