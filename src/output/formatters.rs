//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Float-to-int casts saturate, so negative values give an empty bar
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a cosine similarity as a bar; anything at or below zero is empty
#[must_use]
pub fn similarity_bar(similarity: f64, width: usize) -> String {
    create_progress_bar(similarity, 1.0, width)
}

/// Format an optional similarity, showing a dash for a word without an embedding
#[must_use]
pub fn format_similarity(similarity: Option<f64>) -> String {
    similarity.map_or_else(|| "  -   ".to_string(), |s| format!("{s:6.3}"))
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn similarity_bar_negative_is_empty() {
        assert_eq!(similarity_bar(-0.4, 4), "░░░░");
        assert_eq!(similarity_bar(1.5, 4), "████");
    }

    #[test]
    fn format_similarity_values() {
        assert_eq!(format_similarity(Some(0.5)), " 0.500");
        assert_eq!(format_similarity(Some(-0.25)), "-0.250");
        assert_eq!(format_similarity(None), "  -   ");
    }
}
