//! `EmployeeInput` and its nested types (§3).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::probation::TestStatus;
use crate::types::{CityClass, Commission};

/// Either a catalogued post or a free-text one entered for an uncommon role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Post {
    Catalogued { post_id: String },
    Custom { name: String },
}

/// Retirement age in years, as configured for the employee's service class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetirementAge {
    Fifty8 = 58,
    Sixty = 60,
}

impl RetirementAge {
    pub fn years(self) -> u32 {
        self as u32
    }
}

/// The commission-appropriate representation of a joining (or promotion) pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "commission", rename_all = "snake_case")]
pub enum JoiningPay {
    /// 3rd/4th/5th PC: a scale id and starting basic pay within it.
    Scale { scale_id: String, basic_pay: i64 },
    /// 6th PC: pay-in-pay-band, grade pay, and the 6th-PC scale id that set them.
    PipbGp { pipb: i64, grade_pay: u32, scale_id: String },
    /// 7th PC: a level and a basic pay that must be one of its stages.
    Level { level: u32, basic_pay: i64 },
}

/// Selection-grade or special-grade effective date, with the fixation-benefit flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GradeEvent {
    pub effective_date: NaiveDate,
    /// `true` = apply fixation (2 increments, or a scale change at 5th PC); `false` = 1 increment.
    pub apply_fixation: bool,
}

/// The commission-appropriate target of a promotion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PromotionTarget {
    GradePay(u32),
    Level(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub date: NaiveDate,
    pub target_post: String,
    pub target: PromotionTarget,
}

/// Month an annual increment falls due, per the §3 enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleMonth {
    Jan = 1,
    Apr = 4,
    Jul = 7,
    Oct = 10,
}

impl ScheduleMonth {
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IncrementScheduleChange {
    pub effective_date: NaiveDate,
    pub month: ScheduleMonth,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ServiceBreak {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ServiceBreak {
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days().max(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountTestEvent {
    pub pass_date: NaiveDate,
    pub description: String,
}

/// Fixed monthly allowances/deductions (§3).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FixedAllowances {
    pub medical: i64,
    /// Percentage of (basic + DA) contributed to CPS/GPF.
    pub cps_or_gpf_percent: f64,
    pub professional_tax: i64,
    pub gis: i64,
}

/// Raw probation configuration, before resolving to a [`crate::probation::ProbationPeriod`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbationType {
    OneYear,
    TwoYear,
    Custom { months: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbationSettings {
    pub probation_type: ProbationType,
    pub start: NaiveDate,
    pub test_required: bool,
    pub test_name: Option<String>,
    pub test_status: TestStatus,
    pub test_pass_date: Option<NaiveDate>,
}

/// Last Pay Certificate advance: recorded for the audit trail only, not part
/// of the monthly pay arithmetic (§3 lists it with no described operation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LpcAdvance {
    pub date: NaiveDate,
    pub description: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalculationWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The full immutable career record the simulator replays (§3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub employee_name: String,
    pub date_of_birth: NaiveDate,
    pub retirement_age: RetirementAge,

    pub date_of_joining_service: NaiveDate,
    pub date_of_joining_office: NaiveDate,
    pub date_of_relief: Option<NaiveDate>,

    pub joining_post: Post,
    pub joining_pay: JoiningPay,
    /// The commission that `joining_pay` is expressed in.
    pub joining_commission: Commission,

    pub selection_grade: Option<GradeEvent>,
    pub special_grade: Option<GradeEvent>,

    pub promotions: Vec<Promotion>,
    pub increment_schedule_changes: Vec<IncrementScheduleChange>,
    pub breaks_in_service: Vec<ServiceBreak>,
    pub account_test_events: Vec<AccountTestEvent>,

    pub allowances: FixedAllowances,
    pub probation: ProbationSettings,

    pub city_class: CityClass,
    /// Overrides the DA-table lookup for every month, when supplied.
    pub da_override_percent: Option<f64>,

    pub calculation_window: CalculationWindow,
    pub lpc_advances: Vec<LpcAdvance>,

    /// Months after joining before the first increment is eligible (§4.8). Defaults to 6.
    pub increment_eligibility_months: Option<u32>,
}

impl EmployeeInput {
    pub fn increment_eligibility_months(&self) -> u32 {
        self.increment_eligibility_months.unwrap_or(6)
    }
}
