//! Result assembly (§4.11): yearly grouping, fixation snapshots, increment
//! counters, and formatted metadata. Grounded on `projection/cashflows.rs`'s
//! `CashflowRow`/`ProjectionResult` pattern, with `simulate_many` mirroring
//! `run_block.rs`'s rayon-backed batch of independent projections.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::employee::EmployeeInput;
use crate::error::EngineError;
use crate::reference::ReferenceTables;
use crate::simulation::{FixationSnapshot, IncrementCounters, Simulator};
use crate::types::Commission;

/// One month's pay slip (§4.10 step 3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollPeriod {
    pub date: NaiveDate,
    pub commission: Commission,
    pub basic_pay: i64,
    pub da_amount: i64,
    pub hra_amount: i64,
    pub cca_amount: i64,
    pub medical_allowance: i64,
    pub gross_pay: i64,
    pub deductions: Deductions,
    pub net_pay: i64,
    pub remarks: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Deductions {
    pub cps_or_gpf: i64,
    pub professional_tax: i64,
    pub gis: i64,
}

impl Deductions {
    pub fn total(&self) -> i64 {
        self.cps_or_gpf + self.professional_tax + self.gis
    }
}

/// Monthly periods for one calendar year (§4.11 `{year, periods[]}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearGroup {
    pub year: i32,
    pub periods: Vec<PayrollPeriod>,
}

/// Increment counters by category (§4.11, §8's total-equals-sum invariant).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IncrementAnalysis {
    pub regular: u32,
    pub selection_grade: u32,
    pub special_grade: u32,
    pub promotion: u32,
    pub account_test: u32,
    pub total: u32,
}

impl From<IncrementCounters> for IncrementAnalysis {
    fn from(c: IncrementCounters) -> Self {
        Self {
            regular: c.regular,
            selection_grade: c.selection_grade,
            special_grade: c.special_grade,
            promotion: c.promotion,
            account_test: c.account_test,
            total: c.total(),
        }
    }
}

/// Formatted employee metadata (§4.11).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDetails {
    pub employee_name: String,
    pub date_of_birth: String,
    pub date_of_joining_service: String,
    pub date_of_joining_office: String,
    pub retirement_date: String,
    pub joining_commission: Commission,
}

/// The full engine output for one employee (§6).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResult {
    pub employee_details: EmployeeDetails,
    pub fixation_4th_pc: Option<FixationSnapshot>,
    pub fixation_5th_pc: Option<FixationSnapshot>,
    pub fixation_6th_pc: Option<FixationSnapshot>,
    pub fixation_7th_pc: Option<FixationSnapshot>,
    pub yearly_calculations: Vec<YearGroup>,
    pub applied_revisions: Vec<String>,
    pub increment_analysis: IncrementAnalysis,
}

impl PayrollResult {
    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string_pretty(self).map_err(|err| EngineError::InvalidInput {
            field: "payroll_result".to_string(),
            reason: format!("failed to serialize result: {err}"),
        })
    }
}

/// The single library entry point (§6): run one employee's career through
/// the simulator and assemble the grouped, formatted result.
pub fn run_payroll(input: &EmployeeInput, tables: &ReferenceTables) -> Result<PayrollResult, EngineError> {
    let output = Simulator::new(input, tables).run()?;

    let mut fixation_4th_pc = None;
    let mut fixation_5th_pc = None;
    let mut fixation_6th_pc = None;
    let mut fixation_7th_pc = None;
    for snapshot in output.fixation_snapshots {
        match snapshot.commission {
            Commission::Fourth => fixation_4th_pc = Some(snapshot),
            Commission::Fifth => fixation_5th_pc = Some(snapshot),
            Commission::Sixth => fixation_6th_pc = Some(snapshot),
            Commission::Seventh => fixation_7th_pc = Some(snapshot),
            Commission::Third => {}
        }
    }

    Ok(PayrollResult {
        employee_details: employee_details(input),
        fixation_4th_pc,
        fixation_5th_pc,
        fixation_6th_pc,
        fixation_7th_pc,
        yearly_calculations: group_by_year(output.periods),
        applied_revisions: output.applied_revisions,
        increment_analysis: output.increments.into(),
    })
}

/// Run several independent employees' payrolls concurrently (§5's batch
/// note). Each simulation owns its own state; the shared `tables` reference
/// is read-only, so no employee's run can observe another's.
pub fn simulate_many(inputs: &[EmployeeInput], tables: &ReferenceTables) -> Vec<Result<PayrollResult, EngineError>> {
    use rayon::prelude::*;
    inputs.par_iter().map(|input| run_payroll(input, tables)).collect()
}

fn employee_details(input: &EmployeeInput) -> EmployeeDetails {
    EmployeeDetails {
        employee_name: input.employee_name.clone(),
        date_of_birth: format_ddmmyyyy(input.date_of_birth),
        date_of_joining_service: format_ddmmyyyy(input.date_of_joining_service),
        date_of_joining_office: format_ddmmyyyy(input.date_of_joining_office),
        retirement_date: format_ddmmyyyy(retirement_date(input)),
        joining_commission: input.joining_commission,
    }
}

/// §4.11: last day of the (DoB month, DoB year + retirementAge years) month.
fn retirement_date(input: &EmployeeInput) -> NaiveDate {
    let dob = input.date_of_birth;
    let year = dob.year() + input.retirement_age.years() as i32;
    last_day_of_month(year, dob.month())
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("valid next month")
        .pred_opt()
        .expect("first of month has a predecessor")
}

fn format_ddmmyyyy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn group_by_year(periods: Vec<PayrollPeriod>) -> Vec<YearGroup> {
    let mut groups: Vec<YearGroup> = Vec::new();
    for period in periods {
        let year = period.date.year();
        match groups.last_mut() {
            Some(group) if group.year == year => group.periods.push(period),
            _ => groups.push(YearGroup { year, periods: vec![period] }),
        }
    }
    groups
}
