//! Mutable simulation state carried month-to-month (§3 "Simulation State").

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::employee::Post;
use crate::types::Commission;

/// The commission-appropriate pay representation. Exactly one variant is
/// active at a time, matching §3's "exactly one of {...} is active" invariant
/// as a tagged enum rather than a bag of optional fields (§9 design note).
#[derive(Debug, Clone, PartialEq)]
pub enum PayState {
    /// 3rd/4th/5th PC: a basic pay confined to a scale.
    Scale {
        scale_id: String,
        /// The scale before any selection/special-grade scale change, used
        /// to resolve a *later* grade event against the right source scale
        /// rather than one already altered by an earlier grade event.
        ordinary_scale_id: String,
        basic_pay: i64,
    },
    /// 6th PC: pay-in-pay-band plus grade pay.
    PipbGp { pipb: i64, grade_pay: u32, basic_pay: i64 },
    /// 7th PC: a level and a basic pay that is one of its stages.
    Matrix { level: u32, basic_pay: i64 },
}

impl PayState {
    pub fn basic_pay(&self) -> i64 {
        match self {
            PayState::Scale { basic_pay, .. } => *basic_pay,
            PayState::PipbGp { basic_pay, .. } => *basic_pay,
            PayState::Matrix { basic_pay, .. } => *basic_pay,
        }
    }
}

/// Tally of increments granted by category (§4.11 `incrementAnalysis`).
#[derive(Debug, Clone, Copy, Default)]
pub struct IncrementCounters {
    pub regular: u32,
    pub selection_grade: u32,
    pub special_grade: u32,
    pub promotion: u32,
    pub account_test: u32,
}

impl IncrementCounters {
    pub fn total(&self) -> u32 {
        self.regular + self.selection_grade + self.special_grade + self.promotion + self.account_test
    }
}

/// A fixation snapshot recorded when a commission transition fires (§4.11).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixationSnapshot {
    pub commission: Commission,
    pub effective_date: NaiveDate,
    pub prior_basic_pay: i64,
    pub initial_revised_pay: i64,
    pub detail: String,
}

/// State threaded through the monthly simulation loop.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub date: NaiveDate,
    pub commission: Commission,
    pub pay: PayState,
    pub current_post: Post,

    /// Ordinal of the next annual increment to be evaluated (the `n` in §4.9).
    pub next_increment_ordinal: u32,
    pub next_scheduled_increment_date: NaiveDate,
    pub account_test_increment_pending: bool,

    pub increments: IncrementCounters,
    pub fixation_snapshots: Vec<FixationSnapshot>,
    pub applied_revisions: Vec<String>,

    /// Remarks accumulated for the month currently being processed; drained
    /// into the emitted [`crate::result::PayrollPeriod`] each month.
    pub remarks_this_month: Vec<String>,
}

impl SimulationState {
    pub fn add_remark(&mut self, remark: impl Into<String>) {
        self.remarks_this_month.push(remark.into());
    }

    pub fn take_remarks(&mut self) -> Vec<String> {
        std::mem::take(&mut self.remarks_this_month)
    }
}
