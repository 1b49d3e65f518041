//! Probation and departmental-test eligibility rules (§4.9).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How long the employee's probation runs, already resolved from the raw
/// [`crate::employee::ProbationType`] (Custom <=18 months -> OneYear, else TwoYear).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbationPeriod {
    OneYear,
    TwoYear,
}

/// Resolve a raw probation type into the period that governs withholding
/// rules, per §4.9's "Custom <=18 -> 1Y, else 2Y".
pub fn resolve_probation_period(months: Option<u32>, is_two_year: bool) -> ProbationPeriod {
    match months {
        Some(m) => {
            if m <= 18 {
                ProbationPeriod::OneYear
            } else {
                ProbationPeriod::TwoYear
            }
        }
        None => {
            if is_two_year {
                ProbationPeriod::TwoYear
            } else {
                ProbationPeriod::OneYear
            }
        }
    }
}

/// Departmental test status as recorded on the employee input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    NotTaken,
    Passed,
    Exempted,
}

/// Inputs to a single probation-eligibility decision (§4.9).
#[derive(Debug, Clone, Copy)]
pub struct ProbationContext {
    pub period: ProbationPeriod,
    pub test_required: bool,
    pub test_status: TestStatus,
    pub test_pass_date: Option<NaiveDate>,
    pub probation_start: NaiveDate,
}

/// Outcome of a probation-eligibility decision for one scheduled increment.
#[derive(Debug, Clone)]
pub struct ProbationEligibility {
    pub eligible: bool,
    /// The date from which the increment is drawn, when eligible.
    pub effective_date: Option<NaiveDate>,
    pub remark: Option<String>,
}

impl ProbationEligibility {
    fn granted(effective_date: NaiveDate) -> Self {
        Self { eligible: true, effective_date: Some(effective_date), remark: None }
    }

    fn withheld(remark: impl Into<String>) -> Self {
        Self { eligible: false, effective_date: None, remark: Some(remark.into()) }
    }

    fn terminated() -> Self {
        Self { eligible: false, effective_date: None, remark: Some("PROBATION TERMINATED".to_string()) }
    }
}

/// §4.9: evaluate eligibility for the `n`-th scheduled increment falling on `normal_date`.
pub fn evaluate(ctx: &ProbationContext, normal_date: NaiveDate, n: u32) -> ProbationEligibility {
    let test_cleared = matches!(ctx.test_status, TestStatus::Passed | TestStatus::Exempted);

    if ctx.test_required && !test_cleared {
        let five_years_out = shift_years(ctx.probation_start, 5);
        if normal_date > five_years_out {
            return ProbationEligibility::terminated();
        }
    }

    if !ctx.test_required {
        return ProbationEligibility::granted(normal_date);
    }

    let gating_increment = match ctx.period {
        ProbationPeriod::OneYear => 1,
        ProbationPeriod::TwoYear => 2,
    };

    if n != gating_increment {
        return ProbationEligibility::granted(normal_date);
    }

    if test_cleared {
        let effective = match ctx.test_pass_date {
            Some(pass_date) => normal_date.max(pass_date),
            None => normal_date,
        };
        ProbationEligibility::granted(effective)
    } else {
        ProbationEligibility::withheld(format!(
            "increment {n} withheld pending departmental test"
        ))
    }
}

fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    date.with_year(date.year() + years).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(period: ProbationPeriod, required: bool, status: TestStatus, pass: Option<NaiveDate>) -> ProbationContext {
        ProbationContext {
            period,
            test_required: required,
            test_status: status,
            test_pass_date: pass,
            probation_start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        }
    }

    #[test]
    fn no_test_required_always_eligible() {
        let c = ctx(ProbationPeriod::OneYear, false, TestStatus::NotTaken, None);
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let result = evaluate(&c, date, 1);
        assert!(result.eligible);
        assert_eq!(result.effective_date, Some(date));
    }

    #[test]
    fn one_year_probation_withholds_first_increment_until_test_passed() {
        let c = ctx(ProbationPeriod::OneYear, true, TestStatus::NotTaken, None);
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let result = evaluate(&c, date, 1);
        assert!(!result.eligible);
        assert!(result.remark.unwrap().contains("withheld"));
    }

    #[test]
    fn one_year_probation_grants_on_max_of_normal_and_pass_date() {
        let pass_date = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let c = ctx(ProbationPeriod::OneYear, true, TestStatus::Passed, Some(pass_date));
        let normal_date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let result = evaluate(&c, normal_date, 1);
        assert!(result.eligible);
        assert_eq!(result.effective_date, Some(pass_date));
    }

    #[test]
    fn two_year_probation_gates_second_increment_not_first() {
        let c = ctx(ProbationPeriod::TwoYear, true, TestStatus::NotTaken, None);
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert!(evaluate(&c, date, 1).eligible);
        assert!(!evaluate(&c, date, 2).eligible);
    }

    #[test]
    fn terminates_after_five_years_without_test() {
        let c = ctx(ProbationPeriod::OneYear, true, TestStatus::NotTaken, None);
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(); // > 5y after 2020-01-01
        let result = evaluate(&c, date, 1);
        assert!(!result.eligible);
        assert_eq!(result.remark.as_deref(), Some("PROBATION TERMINATED"));
    }
}
