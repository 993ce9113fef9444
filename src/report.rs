use std::fmt::{Display, Write};

use crate::measure::Measurement;

/// Number of elements printed before the rest is elided.
pub const DEFAULT_SHOW: usize = 20;

/// Space separated `values`, with everything after the first `show` elements replaced by `[...]`.
pub fn format_sequence<T: Display>(values: &[T], show: usize) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().take(show).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{value}");
    }

    if values.len() > show {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str("[...]");
    }

    out
}

pub fn format_timing<T>(len: usize, measurement: &Measurement<T>) -> String {
    format!(
        "Time to process a range of {len} elements with {} : {:.5} us",
        measurement.backing,
        measurement.elapsed_micros()
    )
}

/// The full report: the input, the sorted output and one timing line per measurement.
pub fn render<T: Display>(input: &[T], measurements: &[Measurement<T>], show: usize) -> String {
    let mut lines = vec![format!("Before: {}", format_sequence(input, show))];
    if let Some(first) = measurements.first() {
        lines.push(format!("After: {}", format_sequence(&first.sorted, show)));
    }
    lines.extend(measurements.iter().map(|m| format_timing(input.len(), m)));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn truncates() {
        let values = (1..=25).collect::<Vec<_>>();
        let shown = format_sequence(&values, DEFAULT_SHOW);

        assert!(shown.starts_with("1 2 3"));
        assert!(shown.ends_with("19 20 [...]"));
        assert_eq!(format_sequence(&values, 0), "[...]");
        assert_eq!(format_sequence(&[4, 2], 2), "4 2");
        assert_eq!(format_sequence::<i32>(&[], 2), "");
    }

    #[test]
    fn full_report() {
        let measurement = Measurement {
            backing: "Vec",
            sorted: vec![3, 4, 5, 7, 9],
            elapsed: Duration::from_nanos(12_500),
        };

        let report = render(&[3, 5, 9, 7, 4], &[measurement], DEFAULT_SHOW);
        assert_eq!(
            report,
            "Before: 3 5 9 7 4\n\
             After: 3 4 5 7 9\n\
             Time to process a range of 5 elements with Vec : 12.50000 us"
        );
    }
}
