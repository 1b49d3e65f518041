//! Reference tables: pay scales, pay matrix, DA/HRA/CCA rates, grade-pay
//! mappings, and government-order citations (§2.1, §6).
//!
//! Mirrors the teacher's `assumptions` module: a plain data container with a
//! hand-coded `default_tables()` (matching `Assumptions::default_pricing()`)
//! and a `from_csv_path()` loader (matching `Assumptions::from_csv_path()`).

mod cca;
mod da;
mod grade_pay;
mod hra;
pub mod loader;
mod pay_matrix;
mod pay_scales;

pub use cca::CcaTable;
pub use da::DaTable;
pub use grade_pay::{GradePayTable, PayBand};
pub use hra::{HraEra, HraSlab, HraTable};
pub use pay_matrix::PayMatrix;
pub use pay_scales::{PayScaleTable, ScaleTransitionMap};

use std::path::Path;

use chrono::NaiveDate;

use crate::error::EngineError;
use crate::scale::Scale;
use crate::types::{CityClass, CityGrade, Commission};

/// All reference data the simulator consults. Read-only once built; safe to
/// share (by reference) across independent simulations.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub scales_3rd: PayScaleTable,
    pub scales_4th: PayScaleTable,
    pub scales_5th: PayScaleTable,

    pub third_to_fourth: ScaleTransitionMap,
    pub fourth_to_fifth: ScaleTransitionMap,
    pub fifth_to_selection_grade: ScaleTransitionMap,
    pub fifth_to_special_grade: ScaleTransitionMap,

    pub pay_matrix: PayMatrix,
    pub da: DaTable,
    pub hra: HraTable,
    pub cca: CcaTable,
    pub grade_pay: GradePayTable,

    /// Government-order citations available for use in period remarks.
    pub go_citations: Vec<String>,
}

impl ReferenceTables {
    /// Hand-coded illustrative tables matching the shape of the real TN
    /// government-order schedule. These are representative, not a verbatim
    /// transcription of every historical GO — see `DESIGN.md`. Production
    /// deployments should supply the authoritative figures via
    /// [`ReferenceTables::from_csv_path`].
    pub fn default_tables() -> Self {
        let mut scales_3rd = PayScaleTable::new();
        scales_3rd.insert(Scale::parse("975-25-1150-30-1540").unwrap());

        let mut scales_4th = PayScaleTable::new();
        scales_4th.insert(Scale::parse("1200-30-1440-40-1800-50-2200").unwrap());

        let mut scales_5th = PayScaleTable::new();
        scales_5th.insert(Scale::parse("4000-100-6000").unwrap());
        scales_5th.insert(Scale::parse("6500-200-10500").unwrap());

        let mut third_to_fourth = ScaleTransitionMap::new();
        third_to_fourth.insert("975-25-1150-30-1540", "1200-30-1440-40-1800-50-2200");

        let mut fourth_to_fifth = ScaleTransitionMap::new();
        fourth_to_fifth.insert("1200-30-1440-40-1800-50-2200", "4000-100-6000");

        let mut fifth_to_selection_grade = ScaleTransitionMap::new();
        fifth_to_selection_grade.insert("4000-100-6000", "4500-125-7000");

        let mut fifth_to_special_grade = ScaleTransitionMap::new();
        fifth_to_special_grade.insert("4000-100-6000", "4800-150-7200");

        let mut pay_matrix = PayMatrix::new();
        pay_matrix.insert_level(
            7,
            vec![56100, 57800, 59500, 61300, 63100, 65000, 66900, 68900, 70200, 72300],
        );
        pay_matrix.insert_level(
            8,
            vec![47600, 49100, 50600, 52100, 53700, 55300, 56900, 58600, 60300, 62100],
        );

        let mut da = DaTable::new();
        da.push(Commission::Fifth, NaiveDate::from_ymd_opt(1996, 1, 1).unwrap(), 0.0);
        da.push(Commission::Fifth, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 21.0);
        da.push(Commission::Fifth, NaiveDate::from_ymd_opt(2004, 1, 1).unwrap(), 59.0);
        da.push(Commission::Sixth, NaiveDate::from_ymd_opt(2006, 1, 1).unwrap(), 0.0);
        da.push(Commission::Sixth, NaiveDate::from_ymd_opt(2009, 1, 1).unwrap(), 22.0);
        da.push(Commission::Sixth, NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(), 100.0);
        da.push(Commission::Seventh, NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(), 0.0);
        da.push(Commission::Seventh, NaiveDate::from_ymd_opt(2018, 7, 1).unwrap(), 9.0);
        da.push(Commission::Seventh, NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(), 12.0);
        da.push(Commission::Seventh, NaiveDate::from_ymd_opt(2019, 7, 1).unwrap(), 17.0);

        let mut hra = HraTable::new();
        hra.push_era(HraEra {
            effective_from: NaiveDate::from_ymd_opt(1996, 1, 1).unwrap(),
            slabs: vec![HraSlab {
                min: 0,
                max: None,
                rates: vec![
                    (CityGrade::GradeIa, 0.15),
                    (CityGrade::GradeIb, 0.10),
                    (CityGrade::GradeIi, 0.075),
                    (CityGrade::Unclassified, 0.05),
                ],
            }],
        });
        hra.push_era(HraEra {
            effective_from: NaiveDate::from_ymd_opt(2006, 1, 1).unwrap(),
            slabs: vec![HraSlab {
                min: 0,
                max: None,
                rates: vec![
                    (CityGrade::GradeIa, 0.20),
                    (CityGrade::GradeIb, 0.135),
                    (CityGrade::GradeIi, 0.10),
                    (CityGrade::Unclassified, 0.075),
                ],
            }],
        });
        hra.push_era(HraEra {
            effective_from: NaiveDate::from_ymd_opt(2009, 6, 1).unwrap(),
            slabs: vec![HraSlab {
                min: 0,
                max: None,
                rates: vec![
                    (CityGrade::GradeIa, 0.24),
                    (CityGrade::GradeIb, 0.16),
                    (CityGrade::GradeIi, 0.12),
                    (CityGrade::Unclassified, 0.09),
                ],
            }],
        });
        hra.push_era(HraEra {
            effective_from: NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
            slabs: vec![HraSlab {
                min: 0,
                max: None,
                rates: vec![
                    (CityGrade::GradeIa, 0.24),
                    (CityGrade::GradeIb, 0.16),
                    (CityGrade::GradeIi, 0.08),
                    (CityGrade::Unclassified, 0.08),
                ],
            }],
        });

        let mut cca = CcaTable::new();
        cca.insert(CityClass::A, 300);
        cca.insert(CityClass::B, 180);
        cca.insert(CityClass::C, 0);

        let mut grade_pay = GradePayTable::new();
        grade_pay.set_level(1900, 2);
        grade_pay.set_level(2000, 3);
        grade_pay.set_level(2400, 4);
        grade_pay.set_level(2800, 5);
        grade_pay.set_level(4200, 8);
        grade_pay.set_level(4600, 9);
        grade_pay.set_level(4800, 10);
        grade_pay.set_level(5400, 11);
        grade_pay.set_band(2800, PayBand { min: 5200, max: Some(20200) });
        grade_pay.set_band(4200, PayBand { min: 9300, max: Some(34800) });
        grade_pay.set_band(4600, PayBand { min: 9300, max: Some(34800) });
        grade_pay.set_band(4800, PayBand { min: 9300, max: Some(34800) });
        grade_pay.set_band(5400, PayBand { min: 15600, max: Some(39100) });
        grade_pay.map_fifth_scale("4000-100-6000", 2800);
        grade_pay.map_fifth_scale("6500-200-10500", 4200);

        Self {
            scales_3rd,
            scales_4th,
            scales_5th,
            third_to_fourth,
            fourth_to_fifth,
            fifth_to_selection_grade,
            fifth_to_special_grade,
            pay_matrix,
            da,
            hra,
            cca,
            grade_pay,
            go_citations: vec![
                "G.O.Ms.No.234, Finance (PC) Department, dated 01.06.2009".to_string(),
                "G.O.Ms.No.303, Finance (Allowances) Department, dated 05.12.2017".to_string(),
            ],
        }
    }

    /// Load every table from a directory of CSVs (see `reference::loader` for
    /// the expected filenames and column layout).
    pub fn from_csv_path(dir: &Path) -> Result<Self, EngineError> {
        let mut grade_pay = GradePayTable::new();
        loader::load_grade_pay_levels(dir, &mut grade_pay)?;
        loader::load_pay_bands(dir, &mut grade_pay)?;
        loader::load_fifth_scale_to_gp(dir, &mut grade_pay)?;

        Ok(Self {
            scales_3rd: loader::load_pay_scale_table(dir, "pay_scales_3.csv")?,
            scales_4th: loader::load_pay_scale_table(dir, "pay_scales_4.csv")?,
            scales_5th: loader::load_pay_scale_table(dir, "pay_scales_5.csv")?,
            third_to_fourth: loader::load_scale_transition_map(dir, "third_to_fourth.csv")?,
            fourth_to_fifth: loader::load_scale_transition_map(dir, "fourth_to_fifth.csv")?,
            fifth_to_selection_grade: loader::load_scale_transition_map(dir, "fifth_to_selection_grade.csv")?,
            fifth_to_special_grade: loader::load_scale_transition_map(dir, "fifth_to_special_grade.csv")?,
            pay_matrix: loader::load_pay_matrix(dir)?,
            da: loader::load_da_table(dir)?,
            hra: loader::load_hra_table(dir)?,
            cca: loader::load_cca_table(dir)?,
            grade_pay,
            go_citations: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_resolve_core_lookups() {
        let tables = ReferenceTables::default_tables();
        assert_eq!(tables.grade_pay.level_for_grade_pay(4200).unwrap(), 8);
        assert_eq!(tables.pay_matrix.first_stage(7).unwrap(), 56100);
        assert!(tables.scales_5th.get("4000-100-6000").is_ok());
        assert_eq!(tables.cca.lookup(Commission::Seventh, CityClass::A), 0);
    }
}
