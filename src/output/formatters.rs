//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max).clamp(0.0, 1.0) * width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Widest life count drawn symbol by symbol
pub const LIVES_BAR_LIMIT: u32 = 30;

/// Remaining lives as hearts, lost lives as crosses
///
/// Counts above [`LIVES_BAR_LIMIT`] are printed as numbers instead.
#[must_use]
pub fn lives_bar(lives: u32, starting_lives: u32) -> String {
    if starting_lives > LIVES_BAR_LIMIT {
        return format!("♥ {lives}/{starting_lives}");
    }

    let lost = starting_lives.saturating_sub(lives) as usize;
    format!("{}{}", "♥".repeat(lives as usize), "✗".repeat(lost))
}

/// Games per second, 0 when no time has elapsed
#[must_use]
pub fn games_per_second(games: usize, seconds: f64) -> f64 {
    if seconds > 0.0 {
        games as f64 / seconds
    } else {
        0.0
    }
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
    fn progress_bar_overflow_and_zero_max() {
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn lives_bar_counts_losses() {
        assert_eq!(lives_bar(4, 6), "♥♥♥♥✗✗");
        assert_eq!(lives_bar(0, 2), "✗✗");
        assert_eq!(lives_bar(3, 3), "♥♥♥");
    }

    #[test]
    fn lives_bar_switches_to_numbers_for_large_counts() {
        assert_eq!(lives_bar(u32::MAX - 1, u32::MAX), format!("♥ {}/{}", u32::MAX - 1, u32::MAX));
        assert_eq!(lives_bar(30, 30).chars().count(), 30);
    }

    #[test]
    fn games_per_second_handles_zero_time() {
        assert_eq!(games_per_second(10, 0.0), 0.0);
        assert_eq!(games_per_second(10, 2.0), 5.0);
    }
}
