use std::fmt::Write;

const BAR_WIDTH: usize = 40;

/// One chart row: label, the value that sets the bar length, and the
/// annotation printed after the bar (typically a one-decimal percentage).
#[derive(Debug, Clone)]
pub struct BarRow {
    pub label: String,
    pub value: f64,
    pub annotation: String,
}

impl BarRow {
    pub fn new(label: impl Into<String>, value: f64, annotation: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            annotation: annotation.into(),
        }
    }
}

/// Renders horizontal bars scaled against the largest value in the set.
/// All-zero input still prints every label, with empty bars.
pub fn render_bars(rows: &[BarRow]) -> String {
    let mut output = String::new();
    if rows.is_empty() {
        return output;
    }

    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    let max_value = rows.iter().map(|r| r.value).fold(0.0f64, f64::max);

    for row in rows {
        let cells = if max_value > 0.0 {
            (row.value / max_value * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            output,
            "{:<label_width$}  {:<BAR_WIDTH$}  {}",
            row.label,
            "\u{2588}".repeat(cells),
            row.annotation
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_bars_to_the_largest_value() {
        let rows = vec![
            BarRow::new("A", 40.0, "40.0%"),
            BarRow::new("B", 20.0, "20.0%"),
        ];
        let chart = render_bars(&rows);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);

        let full = lines[0].matches('\u{2588}').count();
        let half = lines[1].matches('\u{2588}').count();
        assert_eq!(full, BAR_WIDTH);
        assert_eq!(half, BAR_WIDTH / 2);
        assert!(lines[0].ends_with("40.0%"));
    }

    #[test]
    fn all_zero_values_render_empty_bars() {
        let rows = vec![BarRow::new("A", 0.0, "0.0%"), BarRow::new("W", 0.0, "0.0%")];
        let chart = render_bars(&rows);
        assert_eq!(chart.lines().count(), 2);
        assert_eq!(chart.matches('\u{2588}').count(), 0);
    }

    #[test]
    fn labels_are_padded_to_the_widest() {
        let rows = vec![
            BarRow::new("CS 101", 1.0, "100.0%"),
            BarRow::new("A", 1.0, "100.0%"),
        ];
        let chart = render_bars(&rows);
        let lines: Vec<&str> = chart.lines().collect();
        assert!(lines[1].starts_with("A     "));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(render_bars(&[]).is_empty());
    }
}
