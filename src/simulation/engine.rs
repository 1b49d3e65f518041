//! The monthly simulator loop (§4.5–§4.10).
//!
//! Grounded on `projection/engine.rs`'s `ProjectionEngine::project_policy`:
//! a single struct borrowing its inputs, one `run()` entry point, and a
//! month-at-a-time loop that applies state transitions before emitting a
//! row for the month.

use chrono::{Datelike, Months, NaiveDate};

use crate::employee::{EmployeeInput, JoiningPay, Post, PromotionTarget};
use crate::error::EngineError;
use crate::payops::{cca_amount, da_amount, hra_amount, increment_in_6th_pc, round_currency};
use crate::probation::{self, ProbationContext};
use crate::reference::ReferenceTables;
use crate::result::{Deductions, PayrollPeriod};
use crate::scale::Scale;
use crate::types::Commission;

use super::events::{self, EventKind, TimelineEvent};
use super::state::{FixationSnapshot, IncrementCounters, PayState, SimulationState};

const EPOCH: (i32, u32, u32) = (1980, 1, 1);

/// Everything the simulator produced for one employee, before yearly grouping.
pub struct SimulationOutput {
    pub periods: Vec<PayrollPeriod>,
    pub fixation_snapshots: Vec<FixationSnapshot>,
    pub increments: IncrementCounters,
    pub applied_revisions: Vec<String>,
}

pub struct Simulator<'a> {
    input: &'a EmployeeInput,
    tables: &'a ReferenceTables,
}

impl<'a> Simulator<'a> {
    pub fn new(input: &'a EmployeeInput, tables: &'a ReferenceTables) -> Self {
        Self { input, tables }
    }

    pub fn run(&self) -> Result<SimulationOutput, EngineError> {
        validate_input(self.input)?;

        let timeline = events::build_timeline(self.input);
        let mut timeline = timeline.into_iter().peekable();
        let mut state = self.seed_state()?;
        let end = effective_end(self.input);
        let mut periods = Vec::new();
        let mut applied_revisions = Vec::new();

        while state.date <= end {
            let mut grade_event_fired = false;
            loop {
                let matches = matches!(
                    timeline.peek(),
                    Some(e) if e.date.year() == state.date.year() && e.date.month() == state.date.month()
                );
                if !matches {
                    break;
                }
                let event = timeline.next().expect("peeked Some");
                self.apply_event(&mut state, event, &mut applied_revisions, &mut grade_event_fired)?;
            }

            if state.date >= state.next_scheduled_increment_date && !grade_event_fired {
                self.process_annual_increment(&mut state)?;
            }

            if state.date >= self.input.calculation_window.start {
                periods.push(self.build_period(&mut state)?);
            } else {
                state.take_remarks();
            }

            state.date = state
                .date
                .checked_add_months(Months::new(1))
                .ok_or_else(|| EngineError::InvalidInput {
                    field: "date".to_string(),
                    reason: "date overflow while advancing the simulation".to_string(),
                })?;
        }

        log::debug!(
            "simulation for {} produced {} periods",
            self.input.employee_name,
            periods.len()
        );

        Ok(SimulationOutput {
            periods,
            fixation_snapshots: state.fixation_snapshots,
            increments: state.increments,
            applied_revisions,
        })
    }

    fn seed_state(&self) -> Result<SimulationState, EngineError> {
        let pay = match &self.input.joining_pay {
            JoiningPay::Scale { scale_id, basic_pay } => {
                PayState::Scale { scale_id: scale_id.clone(), ordinary_scale_id: scale_id.clone(), basic_pay: *basic_pay }
            }
            JoiningPay::PipbGp { pipb, grade_pay, .. } => {
                PayState::PipbGp { pipb: *pipb, grade_pay: *grade_pay, basic_pay: *pipb + *grade_pay as i64 }
            }
            JoiningPay::Level { level, basic_pay } => PayState::Matrix { level: *level, basic_pay: *basic_pay },
        };

        let total_break_days: i64 = self.input.breaks_in_service.iter().map(|b| b.days()).sum();
        let next_scheduled_increment_date = self.first_scheduled_increment_date(total_break_days)?;

        Ok(SimulationState {
            date: self.input.date_of_joining_service,
            commission: self.input.joining_commission,
            pay,
            current_post: self.input.joining_post.clone(),
            next_increment_ordinal: 1,
            next_scheduled_increment_date,
            account_test_increment_pending: false,
            increments: IncrementCounters::default(),
            fixation_snapshots: Vec::new(),
            applied_revisions: Vec::new(),
            remarks_this_month: Vec::new(),
        })
    }

    /// §4.8: DoJ + eligibility months, snapped onto the configured schedule
    /// month (bumping the year if the raw candidate month already lies past
    /// it), then shifted forward by the total break-in-service days.
    fn first_scheduled_increment_date(&self, total_break_days: i64) -> Result<NaiveDate, EngineError> {
        let doj = self.input.date_of_joining_service;
        let months = self.input.increment_eligibility_months();
        let candidate = doj.checked_add_months(Months::new(months)).ok_or_else(|| EngineError::InvalidInput {
            field: "date_of_joining_service".to_string(),
            reason: "date overflow computing the first scheduled increment".to_string(),
        })?;

        let schedule_month = schedule_month_at(self.input, candidate);
        let mut year = candidate.year();
        if candidate.month() > schedule_month {
            year += 1;
        }
        let snapped = NaiveDate::from_ymd_opt(year, schedule_month, 1)
            .expect("schedule_month is one of Jan/Apr/Jul/Oct");
        Ok(snapped + chrono::Duration::days(total_break_days))
    }

    fn apply_event(
        &self,
        state: &mut SimulationState,
        event: TimelineEvent,
        applied_revisions: &mut Vec<String>,
        grade_event_fired: &mut bool,
    ) -> Result<(), EngineError> {
        match event.kind {
            EventKind::CommissionTransition { to } => self.apply_transition(state, to, applied_revisions)?,
            EventKind::SelectionGrade(g) => {
                self.apply_grade_event(state, g, true)?;
                *grade_event_fired = true;
            }
            EventKind::SpecialGrade(g) => {
                self.apply_grade_event(state, g, false)?;
                *grade_event_fired = true;
            }
            EventKind::Promotion(p) => self.apply_promotion(state, &p)?,
            EventKind::AccountTestPass(evt) => {
                state.account_test_increment_pending = true;
                state.add_remark(format!("Account test passed: {}", evt.description));
            }
        }
        Ok(())
    }

    /// §4.5.
    fn apply_transition(
        &self,
        state: &mut SimulationState,
        to: Commission,
        applied_revisions: &mut Vec<String>,
    ) -> Result<(), EngineError> {
        let prior_basic_pay = state.pay.basic_pay();
        let tables = self.tables;

        match to {
            Commission::Fourth => {
                let scale_id = expect_scale(state)?;
                let mapped_id = tables.third_to_fourth.target(&scale_id, 3)?.to_string();
                let mapped_scale = Scale::parse(&mapped_id)?;
                let total = prior_basic_pay; // + DAPortion(0)
                let new_pay = mapped_scale.fit_next_higher(total);
                state.pay = PayState::Scale { scale_id: mapped_id.clone(), ordinary_scale_id: mapped_id, basic_pay: new_pay };
            }
            Commission::Fifth => {
                let scale_id = expect_scale(state)?;
                let mapped_id = tables.fourth_to_fifth.target(&scale_id, 4)?.to_string();
                let mapped_scale = Scale::parse(&mapped_id)?;
                let total = prior_basic_pay + 958 + 100;
                let new_pay = mapped_scale.fit_next_higher(total);
                state.pay = PayState::Scale { scale_id: mapped_id.clone(), ordinary_scale_id: mapped_id, basic_pay: new_pay };
            }
            Commission::Sixth => {
                let ordinary_scale_id = match &state.pay {
                    PayState::Scale { ordinary_scale_id, .. } => ordinary_scale_id.clone(),
                    _ => return Err(unexpected_pay_state("5th PC scale-based pay")),
                };
                let grade_pay = tables.grade_pay.grade_pay_for_fifth_scale(&ordinary_scale_id)?;
                let band = tables.grade_pay.band_for_grade_pay(grade_pay)?;
                let pipb = band.clamp(round_currency(prior_basic_pay as f64 * 1.86));
                state.pay = PayState::PipbGp { pipb, grade_pay, basic_pay: pipb + grade_pay as i64 };
            }
            Commission::Seventh => {
                let (grade_pay, basic_pay) = match &state.pay {
                    PayState::PipbGp { grade_pay, basic_pay, .. } => (*grade_pay, *basic_pay),
                    _ => return Err(unexpected_pay_state("6th PC pay-in-pay-band pay")),
                };
                let mult = round_currency(basic_pay as f64 * 2.57);
                let level = tables.grade_pay.level_for_grade_pay(grade_pay)?;
                let new_basic = tables.pay_matrix.fit_into_level(mult, level)?;
                state.pay = PayState::Matrix { level, basic_pay: new_basic };
            }
            Commission::Third => unreachable!("no transition targets the 3rd PC"),
        }

        state.commission = to;
        let new_basic = state.pay.basic_pay();
        let detail = format!("{:?} PC fixation: {} -> {}", to, prior_basic_pay, new_basic);
        state.fixation_snapshots.push(FixationSnapshot {
            commission: to,
            effective_date: state.date,
            prior_basic_pay,
            initial_revised_pay: new_basic,
            detail: detail.clone(),
        });
        applied_revisions.push(detail.clone());
        state.add_remark(detail);
        Ok(())
    }

    /// §4.6.
    fn apply_grade_event(&self, state: &mut SimulationState, event: crate::employee::GradeEvent, is_selection: bool) -> Result<(), EngineError> {
        let label = if is_selection { "Selection" } else { "Special" };

        if state.commission < Commission::Sixth {
            let mapped = if state.commission == Commission::Fifth && event.apply_fixation {
                let (ordinary_scale_id, basic_pay) = match &state.pay {
                    PayState::Scale { ordinary_scale_id, basic_pay, .. } => (ordinary_scale_id.clone(), *basic_pay),
                    _ => return Err(unexpected_pay_state("scale-based pay at grade event")),
                };
                let map = if is_selection { &self.tables.fifth_to_selection_grade } else { &self.tables.fifth_to_special_grade };
                if map.contains(&ordinary_scale_id) {
                    let new_scale_id = map.target(&ordinary_scale_id, 5)?.to_string();
                    let new_scale = Scale::parse(&new_scale_id)?;
                    let new_pay = new_scale.fit_next_higher(basic_pay);
                    state.pay = PayState::Scale { scale_id: new_scale_id, ordinary_scale_id, basic_pay: new_pay };
                    true
                } else {
                    false
                }
            } else {
                false
            };

            if !mapped {
                self.increment_current(state, 1)?;
            }
        } else {
            let steps = if event.apply_fixation { 2 } else { 1 };
            self.increment_current(state, steps)?;
        }

        if is_selection {
            state.increments.selection_grade += 1;
        } else {
            state.increments.special_grade += 1;
        }
        state.add_remark(format!("{label} grade applied on {}", state.date));
        Ok(())
    }

    /// §4.7.
    fn apply_promotion(&self, state: &mut SimulationState, promotion: &crate::employee::Promotion) -> Result<(), EngineError> {
        match (&state.pay, &promotion.target) {
            (PayState::Matrix { level, basic_pay }, PromotionTarget::Level(new_level)) => {
                let notional = self.tables.pay_matrix.increment(*basic_pay, *level, 1)?;
                let new_basic = self.tables.pay_matrix.fit_into_level(notional, *new_level)?;
                state.pay = PayState::Matrix { level: *new_level, basic_pay: new_basic };
            }
            (PayState::PipbGp { pipb, grade_pay, .. }, PromotionTarget::GradePay(new_gp)) => {
                let old_band = self.tables.grade_pay.band_for_grade_pay(*grade_pay)?;
                let inc = round_currency((*pipb + *grade_pay as i64) as f64 * 0.03);
                let notional_pipb = old_band.clamp(*pipb + inc);
                let new_band = self.tables.grade_pay.band_for_grade_pay(*new_gp)?;
                let new_pipb = notional_pipb.max(new_band.min);
                state.pay = PayState::PipbGp { pipb: new_pipb, grade_pay: *new_gp, basic_pay: new_pipb + *new_gp as i64 };
            }
            (PayState::Scale { scale_id, ordinary_scale_id, basic_pay }, _) => {
                let scale = Scale::parse(scale_id)?;
                let new_pay = scale.increment(*basic_pay, 1);
                state.pay = PayState::Scale {
                    scale_id: scale_id.clone(),
                    ordinary_scale_id: ordinary_scale_id.clone(),
                    basic_pay: new_pay,
                };
                state.add_remark("promotion under a pre-6th PC scale applies a notional increment only; scale unchanged");
            }
            _ => {
                return Err(EngineError::InvalidInput {
                    field: "promotion.target".to_string(),
                    reason: "promotion target does not match the current commission's pay representation".to_string(),
                })
            }
        }

        state.current_post = Post::Custom { name: promotion.target_post.clone() };
        state.increments.promotion += 1;
        state.add_remark(format!("Promoted to {} on {}", promotion.target_post, state.date));
        Ok(())
    }

    /// §4.8/§4.9.
    fn process_annual_increment(&self, state: &mut SimulationState) -> Result<(), EngineError> {
        let probation = &self.input.probation;
        let period = probation::resolve_probation_period(
            match probation.probation_type {
                crate::employee::ProbationType::Custom { months } => Some(months),
                _ => None,
            },
            matches!(probation.probation_type, crate::employee::ProbationType::TwoYear),
        );
        let ctx = ProbationContext {
            period,
            test_required: probation.test_required,
            test_status: probation.test_status,
            test_pass_date: probation.test_pass_date,
            probation_start: probation.start,
        };

        let decision = probation::evaluate(&ctx, state.next_scheduled_increment_date, state.next_increment_ordinal);

        if let Some(remark) = &decision.remark {
            if !decision.eligible {
                log::warn!("{}: {remark}", self.input.employee_name);
            }
            state.add_remark(remark.clone());
        }

        if !decision.eligible {
            return Ok(());
        }

        let effective = decision.effective_date.expect("eligible decisions carry an effective date");
        if state.date < effective {
            return Ok(());
        }

        self.increment_current(state, 1)?;
        state.increments.regular += 1;
        state.add_remark("Annual increment applied");

        if state.account_test_increment_pending {
            self.increment_current(state, 1)?;
            state.increments.account_test += 1;
            state.account_test_increment_pending = false;
            state.add_remark("Account-test increment applied");
        }

        let grant_date = state.date;
        state.next_scheduled_increment_date = advance_schedule(self.input, grant_date);
        state.next_increment_ordinal += 1;
        Ok(())
    }

    /// Apply `steps` commission-appropriate increments in place (§4.1/§4.2/§4.3).
    fn increment_current(&self, state: &mut SimulationState, steps: u32) -> Result<(), EngineError> {
        match &state.pay {
            PayState::Scale { scale_id, ordinary_scale_id, basic_pay } => {
                let scale = Scale::parse(scale_id)?;
                let new_pay = scale.increment(*basic_pay, steps);
                state.pay = PayState::Scale {
                    scale_id: scale_id.clone(),
                    ordinary_scale_id: ordinary_scale_id.clone(),
                    basic_pay: new_pay,
                };
            }
            PayState::PipbGp { pipb, grade_pay, .. } => {
                let (new_pipb, new_basic) = increment_in_6th_pc(*pipb, *grade_pay, &self.tables.grade_pay, steps)?;
                state.pay = PayState::PipbGp { pipb: new_pipb, grade_pay: *grade_pay, basic_pay: new_basic };
            }
            PayState::Matrix { level, basic_pay } => {
                let new_basic = self.tables.pay_matrix.increment(*basic_pay, *level, steps as i64)?;
                state.pay = PayState::Matrix { level: *level, basic_pay: new_basic };
            }
        }
        Ok(())
    }

    /// §4.10 step 3.
    fn build_period(&self, state: &mut SimulationState) -> Result<PayrollPeriod, EngineError> {
        let basic = state.pay.basic_pay();

        let da_rate = match self.input.da_override_percent {
            Some(rate) => {
                state.add_remark("DA Override applied");
                rate
            }
            None => self.tables.da.lookup(state.commission, state.date),
        };
        let da = da_amount(basic, da_rate);
        let hra = hra_amount(self.tables, state.date, basic, self.input.city_class);
        let cca = cca_amount(self.tables, state.commission, self.input.city_class);
        let medical = self.input.allowances.medical;
        let gross = basic + da + hra + cca + medical;

        let cps_or_gpf = round_currency((basic + da) as f64 * self.input.allowances.cps_or_gpf_percent / 100.0);
        let deductions = Deductions {
            cps_or_gpf,
            professional_tax: self.input.allowances.professional_tax,
            gis: self.input.allowances.gis,
        };
        let net = gross - deductions.total();

        Ok(PayrollPeriod {
            date: state.date,
            commission: state.commission,
            basic_pay: basic,
            da_amount: da,
            hra_amount: hra,
            cca_amount: cca,
            medical_allowance: medical,
            gross_pay: gross,
            deductions,
            net_pay: net,
            remarks: state.take_remarks(),
        })
    }
}

fn expect_scale(state: &SimulationState) -> Result<String, EngineError> {
    match &state.pay {
        PayState::Scale { scale_id, .. } => Ok(scale_id.clone()),
        _ => Err(unexpected_pay_state("scale-based pay")),
    }
}

fn unexpected_pay_state(expected: &str) -> EngineError {
    EngineError::InvalidInput {
        field: "simulation_state.pay".to_string(),
        reason: format!("expected {expected} at this point in the career timeline"),
    }
}

/// The month a schedule looks to at `date`: the latest configured change
/// whose `effective_date <= date`, defaulting to January if none apply yet.
fn schedule_month_at(input: &EmployeeInput, date: NaiveDate) -> u32 {
    input
        .increment_schedule_changes
        .iter()
        .filter(|c| c.effective_date <= date)
        .max_by_key(|c| c.effective_date)
        .map(|c| c.month.as_u32())
        .unwrap_or(1)
}

/// §4.8: grant date + 1 year, month snapped to the applicable schedule.
fn advance_schedule(input: &EmployeeInput, grant_date: NaiveDate) -> NaiveDate {
    let year = grant_date.year() + 1;
    let probe = NaiveDate::from_ymd_opt(year, grant_date.month(), 1).unwrap_or(grant_date);
    let month = schedule_month_at(input, probe);
    NaiveDate::from_ymd_opt(year, month, 1).expect("schedule_month is one of Jan/Apr/Jul/Oct")
}

fn effective_end(input: &EmployeeInput) -> NaiveDate {
    match input.date_of_relief {
        Some(relief) if relief < input.calculation_window.end => relief,
        _ => input.calculation_window.end,
    }
}

fn validate_input(input: &EmployeeInput) -> Result<(), EngineError> {
    let epoch = NaiveDate::from_ymd_opt(EPOCH.0, EPOCH.1, EPOCH.2).unwrap();
    if input.date_of_joining_service < epoch {
        return Err(EngineError::DateBeforeEpoch { date: input.date_of_joining_service });
    }

    let commission_matches = match (&input.joining_commission, &input.joining_pay) {
        (Commission::Third | Commission::Fourth | Commission::Fifth, JoiningPay::Scale { .. }) => true,
        (Commission::Sixth, JoiningPay::PipbGp { .. }) => true,
        (Commission::Seventh, JoiningPay::Level { .. }) => true,
        _ => false,
    };
    if !commission_matches {
        return Err(EngineError::InvalidInput {
            field: "joining_pay".to_string(),
            reason: "joining pay representation does not match joining_commission".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{
        AccountTestEvent, CalculationWindow, FixedAllowances, GradeEvent, IncrementScheduleChange, ProbationSettings,
        ProbationType, RetirementAge, ScheduleMonth,
    };
    use crate::probation::TestStatus;
    use crate::result::{run_payroll, PayrollPeriod, PayrollResult};
    use crate::types::CityClass;

    /// A minimal employee on a July increment schedule, no probation test and
    /// no break-in-service, so each scenario only has to override what it's
    /// actually exercising.
    fn base_input(doj: NaiveDate, joining_commission: Commission, joining_pay: JoiningPay, window_end: NaiveDate) -> EmployeeInput {
        EmployeeInput {
            employee_name: "Test Employee".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            retirement_age: RetirementAge::Sixty,
            date_of_joining_service: doj,
            date_of_joining_office: doj,
            date_of_relief: None,
            joining_post: Post::Custom { name: "Clerk".to_string() },
            joining_pay,
            joining_commission,
            selection_grade: None,
            special_grade: None,
            promotions: Vec::new(),
            increment_schedule_changes: vec![IncrementScheduleChange { effective_date: doj, month: ScheduleMonth::Jul }],
            breaks_in_service: Vec::new(),
            account_test_events: Vec::new(),
            allowances: FixedAllowances { medical: 0, cps_or_gpf_percent: 0.0, professional_tax: 0, gis: 0 },
            probation: ProbationSettings {
                probation_type: ProbationType::OneYear,
                start: doj,
                test_required: false,
                test_name: None,
                test_status: TestStatus::NotTaken,
                test_pass_date: None,
            },
            city_class: CityClass::A,
            da_override_percent: None,
            calculation_window: CalculationWindow { start: doj, end: window_end },
            lpc_advances: Vec::new(),
            increment_eligibility_months: Some(6),
        }
    }

    fn period_on(result: &PayrollResult, date: NaiveDate) -> PayrollPeriod {
        result
            .yearly_calculations
            .iter()
            .flat_map(|y| y.periods.iter())
            .find(|p| p.date == date)
            .unwrap_or_else(|| panic!("no period emitted for {date}"))
            .clone()
    }

    /// §8 scenario 1: a 7th PC new entrant's first period sits at the joining
    /// stage, and the first scheduled increment moves to the next stage.
    #[test]
    fn scenario_seventh_pc_new_entrant_first_increment() {
        let doj = NaiveDate::from_ymd_opt(2018, 7, 1).unwrap();
        let input = base_input(
            doj,
            Commission::Seventh,
            JoiningPay::Level { level: 7, basic_pay: 56100 },
            NaiveDate::from_ymd_opt(2019, 12, 1).unwrap(),
        );
        let tables = ReferenceTables::default_tables();
        let result = run_payroll(&input, &tables).unwrap();

        assert_eq!(period_on(&result, doj).basic_pay, 56100);
        assert_eq!(
            period_on(&result, NaiveDate::from_ymd_opt(2019, 7, 1).unwrap()).basic_pay,
            57800
        );
    }

    /// §8 scenario 2: the 6th->7th fixation snapshot must match the formula
    /// (`mult = round(basic * 2.57)`, `level = gradePayToLevel[GP]`,
    /// `basicPay = fitIntoLevel(mult, level)`), and that revised pay must
    /// equal the first period recorded under the new commission.
    #[test]
    fn scenario_sixth_to_seventh_transition_snapshot() {
        let doj = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        let input = base_input(
            doj,
            Commission::Sixth,
            JoiningPay::PipbGp { pipb: 9300, grade_pay: 4200, scale_id: "6500-200-10500".to_string() },
            NaiveDate::from_ymd_opt(2016, 2, 1).unwrap(),
        );
        let tables = ReferenceTables::default_tables();
        let result = run_payroll(&input, &tables).unwrap();

        let prior = period_on(&result, NaiveDate::from_ymd_opt(2015, 12, 1).unwrap()).basic_pay;
        let expected_level = tables.grade_pay.level_for_grade_pay(4200).unwrap();
        assert_eq!(expected_level, 8);
        let expected_revised = tables
            .pay_matrix
            .fit_into_level(round_currency(prior as f64 * 2.57), expected_level)
            .unwrap();

        let snapshot = result.fixation_7th_pc.as_ref().expect("7th PC fixation snapshot");
        assert_eq!(snapshot.prior_basic_pay, prior);
        assert_eq!(snapshot.initial_revised_pay, expected_revised);

        let transition_date = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
        assert_eq!(snapshot.effective_date, transition_date);
        assert_eq!(period_on(&result, transition_date).basic_pay, snapshot.initial_revised_pay);
    }

    /// §8 scenario 3: a 1-year-probation employee whose departmental test is
    /// still outstanding has their first scheduled increment withheld with a
    /// remark, and draws it only once the test is passed.
    #[test]
    fn scenario_probation_withholding_then_grant_on_test_pass() {
        let doj = NaiveDate::from_ymd_opt(2018, 7, 1).unwrap();
        let window_end = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let joining_pay = JoiningPay::Level { level: 7, basic_pay: 56100 };
        let first_scheduled = NaiveDate::from_ymd_opt(2019, 7, 1).unwrap();

        let mut withheld_input = base_input(doj, Commission::Seventh, joining_pay.clone(), window_end);
        withheld_input.probation.test_required = true;
        withheld_input.probation.test_status = TestStatus::NotTaken;
        let tables = ReferenceTables::default_tables();
        let withheld_result = run_payroll(&withheld_input, &tables).unwrap();

        let at_first_scheduled = period_on(&withheld_result, first_scheduled);
        assert_eq!(at_first_scheduled.basic_pay, 56100);
        assert!(at_first_scheduled.remarks.iter().any(|r| r.contains("withheld")));

        let pass_date = NaiveDate::from_ymd_opt(2019, 9, 1).unwrap();
        let mut passed_input = base_input(doj, Commission::Seventh, joining_pay, window_end);
        passed_input.probation.test_required = true;
        passed_input.probation.test_status = TestStatus::Passed;
        passed_input.probation.test_pass_date = Some(pass_date);
        let passed_result = run_payroll(&passed_input, &tables).unwrap();

        assert_eq!(period_on(&passed_result, first_scheduled).basic_pay, 56100);
        assert_eq!(
            period_on(&passed_result, NaiveDate::from_ymd_opt(2019, 8, 1).unwrap()).basic_pay,
            56100
        );
        assert_eq!(period_on(&passed_result, pass_date).basic_pay, 57800);
    }

    /// §8 scenario 4: a selection grade with fixation benefit at the 7th PC
    /// applies 2 increments in the current level.
    #[test]
    fn scenario_selection_grade_fixation_at_seventh_pc() {
        let doj = NaiveDate::from_ymd_opt(2015, 7, 1).unwrap();
        let sg_date = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
        let mut input = base_input(
            doj,
            Commission::Seventh,
            JoiningPay::Level { level: 7, basic_pay: 56100 },
            NaiveDate::from_ymd_opt(2017, 2, 1).unwrap(),
        );
        input.selection_grade = Some(GradeEvent { effective_date: sg_date, apply_fixation: true });
        let tables = ReferenceTables::default_tables();
        let result = run_payroll(&input, &tables).unwrap();

        // One regular increment lands on 2016-07-01 (56100 -> 57800, index 0 -> 1)
        // before the SG date, so origIndex == 1 and the SG grant lands on index 3.
        assert_eq!(
            period_on(&result, NaiveDate::from_ymd_opt(2016, 7, 1).unwrap()).basic_pay,
            57800
        );
        assert_eq!(period_on(&result, sg_date).basic_pay, 61300);
    }

    /// §8 scenario 5: a 60-day break in service shifts the first scheduled
    /// increment date by 60 days past the unshifted schedule date.
    #[test]
    fn scenario_break_in_service_shifts_first_increment() {
        let doj = NaiveDate::from_ymd_opt(2020, 7, 1).unwrap();
        let input = base_input(
            doj,
            Commission::Seventh,
            JoiningPay::Level { level: 7, basic_pay: 56100 },
            doj,
        );
        let tables = ReferenceTables::default_tables();
        let simulator = Simulator::new(&input, &tables);

        assert_eq!(
            simulator.first_scheduled_increment_date(60).unwrap(),
            NaiveDate::from_ymd_opt(2021, 8, 30).unwrap()
        );
    }

    /// §8 scenario 6: an account-test pass preceding the next scheduled
    /// increment grants two in-scale increments that month, one regular and
    /// one for the test, and is tallied once under `accountTest`.
    #[test]
    fn scenario_account_test_double_increment() {
        let doj = NaiveDate::from_ymd_opt(2015, 7, 1).unwrap();
        let mut input = base_input(
            doj,
            Commission::Seventh,
            JoiningPay::Level { level: 7, basic_pay: 56100 },
            NaiveDate::from_ymd_opt(2016, 8, 1).unwrap(),
        );
        input.account_test_events.push(AccountTestEvent {
            pass_date: NaiveDate::from_ymd_opt(2016, 3, 1).unwrap(),
            description: "Account Test".to_string(),
        });
        let tables = ReferenceTables::default_tables();
        let result = run_payroll(&input, &tables).unwrap();

        let scheduled = NaiveDate::from_ymd_opt(2016, 7, 1).unwrap();
        assert_eq!(period_on(&result, scheduled).basic_pay, 59500);
        assert_eq!(result.increment_analysis.account_test, 1);
        assert_eq!(result.increment_analysis.regular, 1);
    }
}
