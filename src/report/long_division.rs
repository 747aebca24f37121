// ============================================================================
// Long-Division Diagram
// ASCII layout of an iteration trace in the style of a hand calculation
// ============================================================================

use crate::engine::RootResult;
use std::fmt;

/// Columns before the radical sign
const MARGIN: usize = 5;

/// Renders a [`RootResult`] as a long-division square root diagram.
///
/// The answer sits above a bar as wide as the target, the first subtraction
/// hangs under the target, and each later step shows `guess*digit < start`
/// followed by the subtracted amount and a bar, all right-aligned to the
/// row that introduced them. The final remainder closes the diagram.
///
/// # Example
/// ```
/// use digit_sqrt::engine::compute_root;
/// use digit_sqrt::report::LongDivisionDiagram;
///
/// let result = compute_root("2.00", -1).unwrap();
/// let diagram = LongDivisionDiagram::new(&result, "2.00");
/// assert_eq!(diagram.lines()[2], "     /2.00");
/// ```
pub struct LongDivisionDiagram<'a> {
    result: &'a RootResult,
    target: String,
}

impl<'a> LongDivisionDiagram<'a> {
    /// Create a diagram of `result`, headed by the `target` text as typed
    pub fn new(result: &'a RootResult, target: impl Into<String>) -> Self {
        Self {
            result,
            target: target.into(),
        }
    }

    /// The diagram, one string per output row
    pub fn lines(&self) -> Vec<String> {
        let margin = " ".repeat(MARGIN);
        let mut lines = Vec::with_capacity(3 * self.result.iterations().len() + 4);

        let mut spaced = self
            .result
            .result_string()
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
            .replace(" .", ".");

        let Some((first, rest)) = self.result.iterations().split_first() else {
            return lines;
        };

        // Two-digit leading group: shift the answer over its second digit
        if first.group >= 10 {
            spaced.insert(0, ' ');
        }

        lines.push(format!("{} {}", margin, spaced));
        lines.push(format!("{} {}", margin, "_".repeat(self.target.chars().count())));
        lines.push(format!("{}/{}", margin, self.target));

        let indent = " ".repeat(MARGIN + 1);
        let first_epsilon = if first.group < 10 {
            first.epsilon.to_string()
        } else {
            format!("{:>2}", first.epsilon.to_string())
        };
        let underbar = "-".repeat(first_epsilon.len());
        lines.push(format!("{}{}", indent, first_epsilon));

        let output = format!("{}{}", indent, underbar);
        let mut right_side = output.len();
        let mut bar_size = underbar.len();
        lines.push(output);

        let mut last = first;
        for iteration in rest {
            let start = iteration.start.to_string();
            let divisor = format!("{}*{} < ", iteration.guess, iteration.digit);

            // The trial divisor ends where the previous bar began
            let left_side = right_side.saturating_sub(bar_size);
            let pad = " ".repeat(left_side.saturating_sub(divisor.len()));

            bar_size = start.len();
            let output = format!("{}{}{}", pad, divisor, start);
            right_side = output.len();
            lines.push(output);

            lines.push(format!(
                "{:>width$}",
                iteration.epsilon.to_string(),
                width = right_side
            ));
            lines.push(format!(
                "{:>width$}",
                "-".repeat(bar_size),
                width = right_side
            ));
            last = iteration;
        }

        lines.push(format!(
            "{:>width$}",
            last.partial.to_string(),
            width = right_side
        ));
        lines
    }
}

impl fmt::Display for LongDivisionDiagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_root;

    #[test]
    fn test_root_of_two_layout() {
        let result = compute_root("2.00", 0).unwrap();
        let diagram = LongDivisionDiagram::new(&result, "2.00");

        let expected = vec![
            "      1. 4 1",
            "      ____",
            "     /2.00",
            "      1",
            "      -",
            "24*4 < 100",
            "        96",
            "       ---",
            "281*1 < 400",
            "        281",
            "        ---",
            "        119",
        ];
        assert_eq!(diagram.lines(), expected);
    }

    #[test]
    fn test_two_digit_leading_group() {
        let result = compute_root("10.24", -1).unwrap();
        let diagram = LongDivisionDiagram::new(&result, "10.24");

        let expected = vec![
            "       3.",
            "      _____",
            "     /10.24",
            "       9",
            "      --",
            "       1",
        ];
        assert_eq!(diagram.lines(), expected);
    }

    #[test]
    fn test_display_joins_lines() {
        let result = compute_root("4.00", -1).unwrap();
        let text = LongDivisionDiagram::new(&result, "4.00").to_string();
        assert_eq!(text.lines().count(), 6);
        assert!(text.ends_with("      0\n"));
    }
}
