use chrono::NaiveDate;

use crate::datemath;
use crate::models::{CycleInput, CycleResult};
use crate::phase;

pub const DEFAULT_CYCLE_LEN: u32 = 28;
pub const DEFAULT_PERIOD_LEN: u32 = 6;

/// Days before/after the fixed day-14 ovulation estimate that bound the
/// fertile window.
const OVULATION_OFFSET: i64 = 14;
const FERTILE_BEFORE: i64 = 4;
const FERTILE_AFTER: i64 = 2;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("missing last period date")]
    MissingLastDate,
    #[error("unreadable last period date: {0}")]
    InvalidLastDate(String),
}

/// Explicit form of the legacy `parseInt(..) || default` coercion: a
/// value that is empty, non-numeric, out of range, or not strictly
/// positive falls back to the default. Zero is deliberately treated as
/// unset, matching the original behavior.
pub fn parse_or_default(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => default,
    }
}

/// Derive next period, elapsed days, progress, fertile window, and phase
/// from the raw inputs. Only the last-period date can fail; bad cycle and
/// period values are absorbed by the defaults.
pub fn compute(input: &CycleInput, today: NaiveDate) -> Result<CycleResult, CalcError> {
    if input.last_date.trim().is_empty() {
        return Err(CalcError::MissingLastDate);
    }
    let last = datemath::parse_date(&input.last_date)
        .ok_or_else(|| CalcError::InvalidLastDate(input.last_date.clone()))?;

    let cycle = parse_or_default(&input.cycle, DEFAULT_CYCLE_LEN);
    let period_len = parse_or_default(&input.period_len, DEFAULT_PERIOD_LEN);

    let days_since = datemath::days_between(today, last);
    let next = datemath::add_days(last, cycle as i64);

    let ovulation = datemath::add_days(last, OVULATION_OFFSET);
    let fertile_start = datemath::add_days(ovulation, -FERTILE_BEFORE);
    let fertile_end = datemath::add_days(ovulation, FERTILE_AFTER);

    let progress_pct =
        ((days_since as f64 / cycle as f64) * 100.0).round().clamp(0.0, 100.0) as u8;

    Ok(CycleResult {
        last,
        next,
        cycle,
        period_len,
        days_since,
        progress_pct,
        phase: phase::classify(days_since),
        ovulation,
        fertile_start,
        fertile_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::Phase;

    fn date(s: &str) -> NaiveDate {
        datemath::parse_date(s).unwrap()
    }

    fn input(last: &str, cycle: &str, period: &str) -> CycleInput {
        CycleInput {
            last_date: last.into(),
            cycle: cycle.into(),
            period_len: period.into(),
        }
    }

    #[test]
    fn one_week_in_lands_in_follicular_phase() {
        let res = compute(&input("2024-01-01", "28", "5"), date("2024-01-08")).unwrap();
        assert_eq!(res.days_since, 7);
        assert_eq!(res.phase, Phase::Follicular);
        assert_eq!(res.next, date("2024-01-29"));
        assert_eq!(res.progress_pct, 25);
        assert_eq!(res.period_len, 5);
    }

    #[test]
    fn overdue_cycle_clamps_progress_and_reports_ended() {
        let res = compute(&input("2024-01-01", "28", ""), date("2024-02-10")).unwrap();
        assert_eq!(res.days_since, 40);
        assert_eq!(res.phase, Phase::Ended);
        assert_eq!(res.progress_pct, 100);
    }

    #[test]
    fn future_start_date_clamps_progress_to_zero() {
        let res = compute(&input("2024-01-10", "28", "6"), date("2024-01-01")).unwrap();
        assert_eq!(res.days_since, -9);
        assert_eq!(res.phase, Phase::NotStarted);
        assert_eq!(res.progress_pct, 0);
    }

    #[test]
    fn fertile_window_uses_the_fixed_day_14_estimate() {
        // Ovulation Jan 15, window Jan 11 .. Jan 17, regardless of cycle.
        let res = compute(&input("2024-01-01", "35", "6"), date("2024-01-08")).unwrap();
        assert_eq!(res.ovulation, date("2024-01-15"));
        assert_eq!(res.fertile_start, date("2024-01-11"));
        assert_eq!(res.fertile_end, date("2024-01-17"));
    }

    #[test]
    fn missing_last_date_is_the_only_validation_error() {
        assert_eq!(
            compute(&input("", "28", "6"), date("2024-01-08")),
            Err(CalcError::MissingLastDate)
        );
        assert_eq!(
            compute(&input("  ", "28", "6"), date("2024-01-08")),
            Err(CalcError::MissingLastDate)
        );
        assert!(matches!(
            compute(&input("yesterday", "28", "6"), date("2024-01-08")),
            Err(CalcError::InvalidLastDate(_))
        ));
    }

    #[test]
    fn bad_numeric_inputs_fall_back_to_defaults() {
        assert_eq!(parse_or_default("", DEFAULT_CYCLE_LEN), 28);
        assert_eq!(parse_or_default("abc", DEFAULT_CYCLE_LEN), 28);
        assert_eq!(parse_or_default("0", DEFAULT_CYCLE_LEN), 28);
        assert_eq!(parse_or_default("-3", DEFAULT_CYCLE_LEN), 28);
        assert_eq!(parse_or_default("30", DEFAULT_CYCLE_LEN), 30);
        assert_eq!(parse_or_default("x", DEFAULT_PERIOD_LEN), 6);

        let res = compute(&input("2024-01-01", "oops", "0"), date("2024-01-08")).unwrap();
        assert_eq!(res.cycle, 28);
        assert_eq!(res.period_len, 6);
    }

    #[test]
    fn oversized_numeric_input_falls_back_like_any_other_bad_value() {
        // u32::MAX + 1 and beyond must not wrap to zero
        assert_eq!(parse_or_default("4294967296", DEFAULT_CYCLE_LEN), 28);
        assert_eq!(parse_or_default("99999999999999", DEFAULT_CYCLE_LEN), 28);

        let res = compute(&input("2024-01-01", "4294967296", "6"), date("2024-01-08")).unwrap();
        assert_eq!(res.cycle, 28);
        assert_eq!(res.progress_pct, 25);
    }
}
