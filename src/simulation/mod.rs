//! Event timeline and monthly simulator (§4.5–§4.10). Mirrors the teacher's
//! `projection/` module: `state.rs` (mutable per-policy state), `engine.rs`
//! (the month-at-a-time loop), plus `events.rs`, new here, for the
//! chronological event queue that drives commission transitions, grade
//! events, and promotions.

mod engine;
mod events;
mod state;

pub use engine::{SimulationOutput, Simulator};
pub use state::{FixationSnapshot, IncrementCounters, PayState, SimulationState};
