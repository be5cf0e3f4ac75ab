//! Formatting utilities for terminal output

use crate::core::Verdict;

/// Circled number for a word length, e.g. ④ for a four-letter word
///
/// Lengths past 20 fall back to a parenthesized number.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match len {
        // U+2460 CIRCLED DIGIT ONE .. U+2473 CIRCLED NUMBER TWENTY
        1..=20 => char::from_u32(0x2460 + len as u32 - 1)
            .map_or_else(|| format!("({len})"), String::from),
        _ => format!("({len})"),
    }
}

/// One-line label for a verdict
#[must_use]
pub fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Accepted => "Accepted",
        Verdict::Rejected(reason) => reason.title(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;

    #[test]
    fn badge_small_lengths() {
        assert_eq!(length_badge(1), "①");
        assert_eq!(length_badge(4), "④");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn badge_out_of_range() {
        assert_eq!(length_badge(0), "(0)");
        assert_eq!(length_badge(21), "(21)");
    }

    #[test]
    fn verdict_labels() {
        assert_eq!(verdict_label(Verdict::Accepted), "Accepted");
        assert_eq!(
            verdict_label(Verdict::Rejected(Rejection::DuplicateWord)),
            "Word used already"
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
