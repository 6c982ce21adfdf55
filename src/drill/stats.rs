//! Running totals and the derived display strings

/// Counters for the lifetime of a session; both only ever grow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    correct: u64,
    total: u64,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn correct(&self) -> u64 {
        self.correct
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// A question was issued
    pub fn record_issued(&mut self) {
        self.total += 1;
    }

    /// The live question was answered correctly
    pub fn record_correct(&mut self) {
        debug_assert!(self.correct < self.total);
        self.correct = (self.correct + 1).min(self.total);
    }

    /// Correct answers per minute, rounded half away from zero to one decimal
    pub fn speed(&self, elapsed_secs: u64) -> f64 {
        if elapsed_secs == 0 {
            return 0.0;
        }
        let per_minute = self.correct as f64 / elapsed_secs as f64 * 60.0;
        (per_minute * 10.0).round() / 10.0
    }

    /// e.g. `3/5`
    pub fn ratio_text(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }

    /// e.g. `12.5 Q/min`
    pub fn speed_text(&self, elapsed_secs: u64) -> String {
        format!("{:.1} Q/min", self.speed(elapsed_secs))
    }
}

/// e.g. `42s`
pub fn elapsed_text(elapsed_secs: u64) -> String {
    format!("{}s", elapsed_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(correct: u64, total: u64) -> SessionStats {
        let mut s = SessionStats::new();
        for _ in 0..total {
            s.record_issued();
        }
        for _ in 0..correct {
            s.record_correct();
        }
        s
    }

    #[test]
    fn test_speed_zero_before_first_second() {
        assert_eq!(stats(3, 3).speed_text(0), "0.0 Q/min");
        assert_eq!(stats(0, 0).speed_text(0), "0.0 Q/min");
    }

    #[test]
    fn test_speed_formula() {
        assert_eq!(stats(5, 6).speed_text(60), "5.0 Q/min");
        assert_eq!(stats(1, 1).speed_text(7), "8.6 Q/min");
        assert_eq!(stats(2, 2).speed_text(3), "40.0 Q/min");
    }

    #[test]
    fn test_speed_rounds_half_up() {
        // 1 / 240 * 60 = 0.25
        assert_eq!(stats(1, 1).speed_text(240), "0.3 Q/min");
    }

    #[test]
    fn test_ratio_and_elapsed_text() {
        assert_eq!(stats(3, 5).ratio_text(), "3/5");
        assert_eq!(elapsed_text(0), "0s");
        assert_eq!(elapsed_text(125), "125s");
    }
}
