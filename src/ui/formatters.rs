//! Shared formatting utilities for UI components.

/// Format an axis tick label with smart precision.
///
/// Whole numbers print without decimals (`80000`, not `80000.0`).
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e6).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if val.fract() == 0.0 || abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_labels() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(25.0), "25");
        assert_eq!(format_axis_label(12.5), "12.5");
        assert_eq!(format_axis_label(0.25), "0.25");
        assert_eq!(format_axis_label(80000.0), "80000");
        assert_eq!(format_axis_label(2.5e6), "2.5e6");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_number(51), "51");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
