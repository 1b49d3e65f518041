//! Small shared enums used across reference tables, employee input, and the
//! simulator. Kept in one place the way the teacher keeps `Gender` /
//! `QualStatus` next to `Policy` — these are cross-cutting, not owned by any
//! single module.

use serde::{Deserialize, Serialize};

/// The pay commission in effect. Ordered: later commissions compare greater,
/// which is what lets the simulator assert `commission` is monotonic
/// non-decreasing across a period series (§8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Commission {
    Third = 3,
    Fourth = 4,
    Fifth = 5,
    Sixth = 6,
    Seventh = 7,
}

impl Commission {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// The commission this one transitions from, if any (3rd is the floor).
    pub fn predecessor(self) -> Option<Commission> {
        match self {
            Commission::Third => None,
            Commission::Fourth => Some(Commission::Third),
            Commission::Fifth => Some(Commission::Fourth),
            Commission::Sixth => Some(Commission::Fifth),
            Commission::Seventh => Some(Commission::Sixth),
        }
    }
}

/// City classification as recorded on the employee input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CityClass {
    A,
    B,
    C,
}

/// HRA city grade, the axis HRA slab tables are keyed on (§4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CityGrade {
    GradeIa,
    GradeIb,
    GradeIi,
    Unclassified,
}

impl CityClass {
    /// City class A -> Grade I(a), B -> Grade I(b), C -> Grade II (§4.4).
    pub fn hra_grade(self) -> CityGrade {
        match self {
            CityClass::A => CityGrade::GradeIa,
            CityClass::B => CityGrade::GradeIb,
            CityClass::C => CityGrade::GradeIi,
        }
    }
}
