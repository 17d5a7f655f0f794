/// Compare two floats within a fixed tolerance
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Format an optional value with two-decimal precision, "n/a" when undefined
pub fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{:.2}", x),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_eq() {
        assert!(fuzzy_eq(1.23, 1.23));
        assert!(fuzzy_eq(0.1 + 0.2, 0.3));
        assert!(!fuzzy_eq(1.0, 1.0001));
    }

    #[test]
    fn test_fmt_opt() {
        assert_eq!(fmt_opt(Some(12.5)), "12.50");
        assert_eq!(fmt_opt(Some(102.456)), "102.46");
        assert_eq!(fmt_opt(None), "n/a");
    }
}
