use std::fmt;

use serde::{Deserialize, Serialize};

/// Stage of the reproductive cycle, derived solely from elapsed days.
///
/// The boundaries are a fixed 28-day model and do not scale with the
/// user's entered cycle length; only the progress bar does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Menstrual,
    Follicular,
    Ovulatory,
    Luteal,
    PostLuteal,
    Ended,
}

/// Map elapsed whole days since the last period start to a phase.
/// Total over all integers; the ranges are exhaustive and disjoint.
pub fn classify(days_since: i64) -> Phase {
    match days_since {
        i64::MIN..=0 => Phase::NotStarted,
        1..=6 => Phase::Menstrual,
        7..=13 => Phase::Follicular,
        14 => Phase::Ovulatory,
        15..=28 => Phase::Luteal,
        29..=34 => Phase::PostLuteal,
        _ => Phase::Ended,
    }
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::NotStarted => "Cycle has Not started yet",
            Phase::Menstrual => "Menstrual Phase (days 1–6)",
            Phase::Follicular => "Proliferative or Follicular Phase (days 7–13)",
            Phase::Ovulatory => "Ovulatory Phase (day 14)",
            Phase::Luteal => "Secretory or Luteal Phase (days 15–28)",
            Phase::PostLuteal => "Post-luteal / Late cycle Phase (day >28)",
            Phase::Ended => "Your Menstrual cycle might have Ended",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_match_the_range_table() {
        assert_eq!(classify(-10), Phase::NotStarted);
        assert_eq!(classify(0), Phase::NotStarted);
        assert_eq!(classify(1), Phase::Menstrual);
        assert_eq!(classify(6), Phase::Menstrual);
        assert_eq!(classify(7), Phase::Follicular);
        assert_eq!(classify(13), Phase::Follicular);
        assert_eq!(classify(14), Phase::Ovulatory);
        assert_eq!(classify(15), Phase::Luteal);
        assert_eq!(classify(28), Phase::Luteal);
        assert_eq!(classify(29), Phase::PostLuteal);
        assert_eq!(classify(34), Phase::PostLuteal);
        assert_eq!(classify(35), Phase::Ended);
        assert_eq!(classify(400), Phase::Ended);
    }

    #[test]
    fn every_day_in_a_long_span_gets_exactly_one_phase() {
        // Totality over a wide range; the match makes overlap impossible,
        // this guards the range edges against future edits.
        for d in -100..400 {
            let _ = classify(d);
        }
    }

    #[test]
    fn adjacent_days_only_change_phase_at_known_edges() {
        let edges: Vec<i64> = (-50..400)
            .filter(|&d| classify(d) != classify(d + 1))
            .map(|d| d + 1)
            .collect();
        assert_eq!(edges, vec![1, 7, 14, 15, 29, 35]);
    }

    #[test]
    fn labels_match_the_displayed_text() {
        assert_eq!(classify(3).to_string(), "Menstrual Phase (days 1–6)");
        assert_eq!(
            classify(40).to_string(),
            "Your Menstrual cycle might have Ended"
        );
    }
}
