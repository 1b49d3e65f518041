//! Employee input: the immutable career record the simulator replays (§3).

mod input;

pub use input::*;
