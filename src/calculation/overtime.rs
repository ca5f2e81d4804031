//! Two-tier daily overtime.
//!
//! Minutes worked beyond the daily baseline are overtime. The first two
//! hours form tier 1 (weighted 1.5x in the balance), anything past that is
//! tier 2 (weighted 2x).

use serde::{Deserialize, Serialize};

/// Baseline after which weekday (and Sunday) minutes become overtime.
pub const WEEKDAY_OVERTIME_THRESHOLD_MINUTES: i64 = 480;

/// Baseline after which Saturday minutes become overtime.
pub const SATURDAY_OVERTIME_THRESHOLD_MINUTES: i64 = 240;

/// Size of the first overtime tier.
pub const OVERTIME_TIER_1_CAP_MINUTES: i64 = 120;

/// Overtime minutes split into the two tiers.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::OvertimeSplit;
///
/// let split = OvertimeSplit { tier1_minutes: 120, tier2_minutes: 30 };
/// assert_eq!(split.total_minutes(), 150);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// First 120 minutes of overtime.
    pub tier1_minutes: i64,
    /// Overtime beyond the first 120 minutes.
    pub tier2_minutes: i64,
}

impl OvertimeSplit {
    /// No overtime at all.
    pub const NONE: OvertimeSplit = OvertimeSplit {
        tier1_minutes: 0,
        tier2_minutes: 0,
    };

    /// Tier 1 plus tier 2.
    pub fn total_minutes(&self) -> i64 {
        self.tier1_minutes + self.tier2_minutes
    }
}

/// Splits the minutes worked on one day into overtime tiers.
///
/// The baseline is 240 minutes on Saturday and 480 minutes on any other day.
/// Worked time at or under the baseline produces no overtime. Above it the
/// excess fills tier 1 up to 120 minutes and the rest goes to tier 2.
///
/// # Arguments
///
/// * `worked_minutes` - Minutes worked on the day
/// * `is_saturday` - Whether the day is a Saturday
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::calculate_overtime;
///
/// let weekday = calculate_overtime(630, false);
/// assert_eq!(weekday.tier1_minutes, 120);
/// assert_eq!(weekday.tier2_minutes, 30);
///
/// let saturday = calculate_overtime(240, true);
/// assert_eq!(saturday.total_minutes(), 0);
/// ```
pub fn calculate_overtime(worked_minutes: i64, is_saturday: bool) -> OvertimeSplit {
    let threshold = if is_saturday {
        SATURDAY_OVERTIME_THRESHOLD_MINUTES
    } else {
        WEEKDAY_OVERTIME_THRESHOLD_MINUTES
    };

    if worked_minutes <= threshold {
        return OvertimeSplit::NONE;
    }

    let overtime = worked_minutes - threshold;
    OvertimeSplit {
        tier1_minutes: overtime.min(OVERTIME_TIER_1_CAP_MINUTES),
        tier2_minutes: (overtime - OVERTIME_TIER_1_CAP_MINUTES).max(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Weekday baseline (480 minutes)
    // ==========================================================================
    #[test]
    fn test_weekday_exactly_at_threshold_no_overtime() {
        assert_eq!(calculate_overtime(480, false), OvertimeSplit::NONE);
    }

    #[test]
    fn test_weekday_under_threshold_no_overtime() {
        assert_eq!(calculate_overtime(300, false), OvertimeSplit::NONE);
        assert_eq!(calculate_overtime(0, false), OvertimeSplit::NONE);
    }

    #[test]
    fn test_weekday_one_minute_over_threshold() {
        let split = calculate_overtime(481, false);
        assert_eq!(split.tier1_minutes, 1);
        assert_eq!(split.tier2_minutes, 0);
    }

    #[test]
    fn test_weekday_tier1_fills_exactly() {
        let split = calculate_overtime(600, false);
        assert_eq!(split.tier1_minutes, 120);
        assert_eq!(split.tier2_minutes, 0);
    }

    #[test]
    fn test_weekday_spills_into_tier2() {
        let split = calculate_overtime(630, false);
        assert_eq!(split.tier1_minutes, 120);
        assert_eq!(split.tier2_minutes, 30);
    }

    // ==========================================================================
    // Saturday baseline (240 minutes)
    // ==========================================================================
    #[test]
    fn test_saturday_exactly_at_baseline_no_overtime() {
        assert_eq!(calculate_overtime(240, true), OvertimeSplit::NONE);
    }

    #[test]
    fn test_saturday_overtime_starts_after_four_hours() {
        let split = calculate_overtime(300, true);
        assert_eq!(split.tier1_minutes, 60);
        assert_eq!(split.tier2_minutes, 0);
    }

    #[test]
    fn test_saturday_eight_hours_reaches_tier2() {
        let split = calculate_overtime(480, true);
        assert_eq!(split.tier1_minutes, 120);
        assert_eq!(split.tier2_minutes, 120);
    }

    #[test]
    fn test_negative_worked_minutes_no_overtime() {
        assert_eq!(calculate_overtime(-30, false), OvertimeSplit::NONE);
        assert_eq!(calculate_overtime(-30, true), OvertimeSplit::NONE);
    }

    #[test]
    fn test_tier1_never_exceeds_cap() {
        for worked in [481, 600, 601, 900, 1440] {
            let split = calculate_overtime(worked, false);
            assert!(split.tier1_minutes <= OVERTIME_TIER_1_CAP_MINUTES);
            assert_eq!(split.total_minutes(), worked - 480);
        }
    }
}
