//! Event timeline construction (§4.5–§4.7, §4.10).
//!
//! Events are collected once at the start of a run from the static
//! [`crate::employee::EmployeeInput`] record, then scanned per month by the
//! simulator. DA changes are *not* modeled as discrete events here: the
//! simulator looks up the applicable DA rate live every month from
//! [`crate::reference::DaTable`], which is behaviorally equivalent to an
//! event-sourced `currentDaRate` field and sidesteps the ordering question
//! the spec raises about a same-month DA change vs. a commission transition
//! (see `DESIGN.md`).

use chrono::NaiveDate;

use crate::employee::{AccountTestEvent, EmployeeInput, GradeEvent, Promotion};
use crate::types::Commission;

/// Fixed commission-transition dates, in order. Each employee's timeline
/// includes only the transitions at or after their joining commission.
pub const TRANSITIONS: [(Commission, Commission, (i32, u32, u32)); 4] = [
    (Commission::Third, Commission::Fourth, (1986, 1, 1)),
    (Commission::Fourth, Commission::Fifth, (1996, 1, 1)),
    (Commission::Fifth, Commission::Sixth, (2006, 1, 1)),
    (Commission::Sixth, Commission::Seventh, (2016, 1, 1)),
];

#[derive(Debug, Clone)]
pub enum EventKind {
    CommissionTransition { to: Commission },
    SelectionGrade(GradeEvent),
    SpecialGrade(GradeEvent),
    Promotion(Promotion),
    AccountTestPass(AccountTestEvent),
}

impl EventKind {
    /// §4.10/§9: DA=1, commission transitions=2, all others=3. DA events are
    /// never constructed (see module docs), so this is effectively 2 vs 3.
    pub fn priority(&self) -> u8 {
        match self {
            EventKind::CommissionTransition { .. } => 2,
            _ => 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TimelineEvent {
    pub date: NaiveDate,
    pub priority: u8,
    pub kind: EventKind,
}

/// Build the full, date-sorted event timeline for one employee.
///
/// Sorting is by `(date, priority)` and uses a stable sort, so events within
/// the same month and priority retain their input order (§8: "reordering DA
/// events... has no effect if the relative order by date is preserved").
pub fn build_timeline(input: &EmployeeInput) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    for (from, to, (y, m, d)) in TRANSITIONS {
        if from < input.joining_commission {
            continue;
        }
        let date = NaiveDate::from_ymd_opt(y, m, d).expect("transition date is a valid calendar date");
        if date > input.date_of_joining_service {
            events.push(TimelineEvent { date, priority: 2, kind: EventKind::CommissionTransition { to } });
        }
    }

    if let Some(sg) = input.selection_grade {
        events.push(TimelineEvent { date: sg.effective_date, priority: 3, kind: EventKind::SelectionGrade(sg) });
    }
    if let Some(spg) = input.special_grade {
        events.push(TimelineEvent { date: spg.effective_date, priority: 3, kind: EventKind::SpecialGrade(spg) });
    }

    for promotion in &input.promotions {
        events.push(TimelineEvent {
            date: promotion.date,
            priority: 3,
            kind: EventKind::Promotion(promotion.clone()),
        });
    }

    for test_event in &input.account_test_events {
        events.push(TimelineEvent {
            date: test_event.pass_date,
            priority: 3,
            kind: EventKind::AccountTestPass(test_event.clone()),
        });
    }

    events.sort_by(|a, b| (a.date, a.priority).cmp(&(b.date, b.priority)));
    events
}
