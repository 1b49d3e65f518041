//! Dearness Allowance rate tables (§4.4).
//!
//! Pre-6th-PC commissions (3rd/4th/5th) share one DA series; 6th and 7th PC
//! each have their own.

use chrono::NaiveDate;

use crate::types::Commission;

/// One DA rate effective from a given date.
#[derive(Debug, Clone, Copy)]
pub struct DaRatePoint {
    pub effective_date: NaiveDate,
    pub rate_percent: f64,
}

#[derive(Debug, Clone, Default)]
pub struct DaTable {
    pre_sixth: Vec<DaRatePoint>,
    sixth: Vec<DaRatePoint>,
    seventh: Vec<DaRatePoint>,
}

impl DaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, commission: Commission, effective_date: NaiveDate, rate_percent: f64) {
        let point = DaRatePoint { effective_date, rate_percent };
        let series = self.series_mut(commission);
        series.push(point);
        series.sort_by_key(|p| p.effective_date);
    }

    fn series_mut(&mut self, commission: Commission) -> &mut Vec<DaRatePoint> {
        match commission {
            Commission::Third | Commission::Fourth | Commission::Fifth => &mut self.pre_sixth,
            Commission::Sixth => &mut self.sixth,
            Commission::Seventh => &mut self.seventh,
        }
    }

    fn series(&self, commission: Commission) -> &[DaRatePoint] {
        match commission {
            Commission::Third | Commission::Fourth | Commission::Fifth => &self.pre_sixth,
            Commission::Sixth => &self.sixth,
            Commission::Seventh => &self.seventh,
        }
    }

    /// Most recent rate effective on or before `date` within the series
    /// matching `commission`. Zero if no rate has taken effect yet.
    pub fn lookup(&self, commission: Commission, date: NaiveDate) -> f64 {
        self.series(commission)
            .iter()
            .rev()
            .find(|p| p.effective_date <= date)
            .map(|p| p.rate_percent)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> DaTable {
        let mut t = DaTable::new();
        t.push(Commission::Fifth, NaiveDate::from_ymd_opt(1996, 1, 1).unwrap(), 0.0);
        t.push(Commission::Fifth, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 21.0);
        t.push(Commission::Sixth, NaiveDate::from_ymd_opt(2006, 1, 1).unwrap(), 0.0);
        t.push(Commission::Sixth, NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(), 45.0);
        t
    }

    #[test]
    fn picks_latest_rate_at_or_before_date() {
        let t = sample();
        assert_relative_eq!(t.lookup(Commission::Fifth, NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()), 0.0);
        assert_relative_eq!(t.lookup(Commission::Fifth, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()), 21.0);
    }

    #[test]
    fn pre_sixth_commissions_share_series() {
        let t = sample();
        // 3rd and 4th PC read the same series as 5th (all "pre-6th").
        assert_eq!(
            t.lookup(Commission::Third, NaiveDate::from_ymd_opt(2000, 6, 1).unwrap()),
            21.0
        );
        assert_eq!(
            t.lookup(Commission::Fourth, NaiveDate::from_ymd_opt(2000, 6, 1).unwrap()),
            21.0
        );
    }

    #[test]
    fn sixth_pc_series_is_independent() {
        let t = sample();
        assert_relative_eq!(t.lookup(Commission::Sixth, NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()), 45.0);
        assert_relative_eq!(t.lookup(Commission::Seventh, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()), 0.0);
    }

    #[test]
    fn before_any_rate_is_zero() {
        let t = sample();
        assert_relative_eq!(t.lookup(Commission::Fifth, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()), 0.0);
    }
}
