//! HRA slab tables, selected by commission/date era and indexed by pay range
//! and city grade (§4.4).

use chrono::NaiveDate;

use crate::types::CityGrade;

/// One pay-range row of an HRA era's slab table.
#[derive(Debug, Clone)]
pub struct HraSlab {
    pub min: i64,
    /// `None` means "and above".
    pub max: Option<i64>,
    pub rates: Vec<(CityGrade, f64)>,
}

impl HraSlab {
    fn contains(&self, pay: i64) -> bool {
        pay >= self.min && self.max.map_or(true, |max| pay <= max)
    }

    fn rate_for(&self, grade: CityGrade) -> Option<f64> {
        self.rates
            .iter()
            .find(|(g, _)| *g == grade)
            .or_else(|| self.rates.iter().find(|(g, _)| *g == CityGrade::Unclassified))
            .map(|(_, r)| *r)
    }
}

/// One HRA era: the slab table effective from a given date until the next
/// era's `effective_from`.
#[derive(Debug, Clone)]
pub struct HraEra {
    pub effective_from: NaiveDate,
    pub slabs: Vec<HraSlab>,
}

#[derive(Debug, Clone, Default)]
pub struct HraTable {
    /// Kept sorted ascending by `effective_from`.
    eras: Vec<HraEra>,
}

impl HraTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_era(&mut self, era: HraEra) {
        self.eras.push(era);
        self.eras.sort_by_key(|e| e.effective_from);
    }

    /// Rate, as a percentage of basic pay, for the slab bracketing
    /// `basic_pay` in the era active on `date`, falling back to
    /// "Unclassified" if the employee's grade has no explicit row.
    pub fn lookup(&self, date: NaiveDate, basic_pay: i64, grade: CityGrade) -> f64 {
        let era = match self.eras.iter().rev().find(|e| e.effective_from <= date) {
            Some(e) => e,
            None => return 0.0,
        };
        era.slabs
            .iter()
            .find(|s| s.contains(basic_pay))
            .and_then(|s| s.rate_for(grade))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> HraTable {
        let mut t = HraTable::new();
        t.push_era(HraEra {
            effective_from: NaiveDate::from_ymd_opt(1996, 1, 1).unwrap(),
            slabs: vec![
                HraSlab {
                    min: 0,
                    max: Some(5000),
                    rates: vec![(CityGrade::GradeIa, 0.15), (CityGrade::Unclassified, 0.05)],
                },
                HraSlab {
                    min: 5001,
                    max: None,
                    rates: vec![(CityGrade::GradeIa, 0.20), (CityGrade::Unclassified, 0.075)],
                },
            ],
        });
        t
    }

    #[test]
    fn picks_slab_and_grade() {
        let t = sample();
        let date = NaiveDate::from_ymd_opt(1997, 1, 1).unwrap();
        assert_relative_eq!(t.lookup(date, 3000, CityGrade::GradeIa), 0.15);
        assert_relative_eq!(t.lookup(date, 9000, CityGrade::GradeIa), 0.20);
    }

    #[test]
    fn falls_back_to_unclassified() {
        let t = sample();
        let date = NaiveDate::from_ymd_opt(1997, 1, 1).unwrap();
        assert_relative_eq!(t.lookup(date, 3000, CityGrade::GradeIi), 0.05);
    }

    #[test]
    fn before_any_era_is_zero() {
        let t = sample();
        let date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        assert_relative_eq!(t.lookup(date, 3000, CityGrade::GradeIa), 0.0);
    }
}
