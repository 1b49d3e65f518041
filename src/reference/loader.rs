//! CSV-based reference table loader, mirroring the teacher's
//! `assumptions::loader` one-file-per-table pattern: each table lives in its
//! own CSV under a directory, and a missing directory falls back to the
//! hand-coded defaults in [`super::ReferenceTables::default_tables`].

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::EngineError;
use crate::scale::Scale;
use crate::types::{CityClass, CityGrade, Commission};

use super::cca::CcaTable;
use super::da::DaTable;
use super::grade_pay::{GradePayTable, PayBand};
use super::hra::{HraEra, HraSlab, HraTable};
use super::pay_matrix::PayMatrix;
use super::pay_scales::{PayScaleTable, ScaleTransitionMap};

/// Default directory the engine looks for reference-table CSVs in.
pub const DEFAULT_REFERENCE_PATH: &str = "data/reference";

fn open(dir: &Path, name: &str) -> Result<csv::Reader<File>, EngineError> {
    let path = dir.join(name);
    let file = File::open(&path).map_err(|e| EngineError::InvalidInput {
        field: name.to_string(),
        reason: format!("could not open {}: {e}", path.display()),
    })?;
    Ok(csv::Reader::from_reader(file))
}

fn field_err(name: &str, e: impl std::fmt::Display) -> EngineError {
    EngineError::InvalidInput { field: name.to_string(), reason: e.to_string() }
}

fn parse_commission(s: &str) -> Result<Commission, EngineError> {
    match s {
        "3" => Ok(Commission::Third),
        "4" => Ok(Commission::Fourth),
        "5" => Ok(Commission::Fifth),
        "6" => Ok(Commission::Sixth),
        "7" => Ok(Commission::Seventh),
        other => Err(field_err("commission", format!("unknown commission `{other}`"))),
    }
}

fn parse_city_class(s: &str) -> Result<CityClass, EngineError> {
    match s {
        "A" => Ok(CityClass::A),
        "B" => Ok(CityClass::B),
        "C" => Ok(CityClass::C),
        other => Err(field_err("city_class", format!("unknown city class `{other}`"))),
    }
}

fn parse_city_grade(s: &str) -> Result<CityGrade, EngineError> {
    match s {
        "GradeIa" => Ok(CityGrade::GradeIa),
        "GradeIb" => Ok(CityGrade::GradeIb),
        "GradeII" => Ok(CityGrade::GradeIi),
        "Unclassified" => Ok(CityGrade::Unclassified),
        other => Err(field_err("city_grade", format!("unknown city grade `{other}`"))),
    }
}

/// Load a pre-6th-PC scale table (`pay_scales_{3,4,5}.csv`, columns `scale`).
pub fn load_pay_scale_table(dir: &Path, filename: &str) -> Result<PayScaleTable, EngineError> {
    let mut reader = open(dir, filename)?;
    let mut table = PayScaleTable::new();
    for record in reader.records() {
        let record = record.map_err(|e| field_err(filename, e))?;
        table.insert(Scale::parse(&record[0])?);
    }
    Ok(table)
}

/// Load a scale-transition map (`from_scale,to_scale` columns).
pub fn load_scale_transition_map(dir: &Path, filename: &str) -> Result<ScaleTransitionMap, EngineError> {
    let mut reader = open(dir, filename)?;
    let mut map = ScaleTransitionMap::new();
    for record in reader.records() {
        let record = record.map_err(|e| field_err(filename, e))?;
        map.insert(record[0].to_string(), record[1].to_string());
    }
    Ok(map)
}

/// Load `pay_matrix.csv` (columns: `level,stage_values` where stage_values is `;`-separated).
pub fn load_pay_matrix(dir: &Path) -> Result<PayMatrix, EngineError> {
    let mut reader = open(dir, "pay_matrix.csv")?;
    let mut matrix = PayMatrix::new();
    for record in reader.records() {
        let record = record.map_err(|e| field_err("pay_matrix.csv", e))?;
        let level: u32 = record[0].parse().map_err(|e| field_err("level", e))?;
        let stages: Vec<i64> = record[1]
            .split(';')
            .map(|s| s.trim().parse::<i64>().map_err(|e| field_err("stage", e)))
            .collect::<Result<_, _>>()?;
        matrix.insert_level(level, stages);
    }
    Ok(matrix)
}

/// Load `da_rates.csv` (columns: `commission,effective_date,rate_percent`).
pub fn load_da_table(dir: &Path) -> Result<DaTable, EngineError> {
    let mut reader = open(dir, "da_rates.csv")?;
    let mut table = DaTable::new();
    for record in reader.records() {
        let record = record.map_err(|e| field_err("da_rates.csv", e))?;
        let commission = parse_commission(&record[0])?;
        let date: NaiveDate = record[1].parse().map_err(|e| field_err("effective_date", e))?;
        let rate: f64 = record[2].parse().map_err(|e| field_err("rate_percent", e))?;
        table.push(commission, date, rate);
    }
    Ok(table)
}

/// Load `cca_rates.csv` (columns: `city_class,amount`).
pub fn load_cca_table(dir: &Path) -> Result<CcaTable, EngineError> {
    let mut reader = open(dir, "cca_rates.csv")?;
    let mut table = CcaTable::new();
    for record in reader.records() {
        let record = record.map_err(|e| field_err("cca_rates.csv", e))?;
        let city = parse_city_class(&record[0])?;
        let amount: i64 = record[1].parse().map_err(|e| field_err("amount", e))?;
        table.insert(city, amount);
    }
    Ok(table)
}

/// Load `grade_pay_levels.csv` (columns: `grade_pay,level`).
pub fn load_grade_pay_levels(dir: &Path, table: &mut GradePayTable) -> Result<(), EngineError> {
    let mut reader = open(dir, "grade_pay_levels.csv")?;
    for record in reader.records() {
        let record = record.map_err(|e| field_err("grade_pay_levels.csv", e))?;
        let gp: u32 = record[0].parse().map_err(|e| field_err("grade_pay", e))?;
        let level: u32 = record[1].parse().map_err(|e| field_err("level", e))?;
        table.set_level(gp, level);
    }
    Ok(())
}

/// Load `pay_bands.csv` (columns: `grade_pay,min,max` where `max` may be empty for unbounded).
pub fn load_pay_bands(dir: &Path, table: &mut GradePayTable) -> Result<(), EngineError> {
    let mut reader = open(dir, "pay_bands.csv")?;
    for record in reader.records() {
        let record = record.map_err(|e| field_err("pay_bands.csv", e))?;
        let gp: u32 = record[0].parse().map_err(|e| field_err("grade_pay", e))?;
        let min: i64 = record[1].parse().map_err(|e| field_err("min", e))?;
        let max = if record[2].trim().is_empty() {
            None
        } else {
            Some(record[2].parse().map_err(|e| field_err("max", e))?)
        };
        table.set_band(gp, PayBand { min, max });
    }
    Ok(())
}

/// Load `fifth_scale_grade_pay.csv` (columns: `fifth_scale,grade_pay`).
pub fn load_fifth_scale_to_gp(dir: &Path, table: &mut GradePayTable) -> Result<(), EngineError> {
    let mut reader = open(dir, "fifth_scale_grade_pay.csv")?;
    for record in reader.records() {
        let record = record.map_err(|e| field_err("fifth_scale_grade_pay.csv", e))?;
        let gp: u32 = record[1].parse().map_err(|e| field_err("grade_pay", e))?;
        table.map_fifth_scale(record[0].to_string(), gp);
    }
    Ok(())
}

/// Load `hra_slabs.csv` (columns: `effective_from,min,max,city_grade,rate_percent`; rows
/// sharing an `effective_from`/`min`/`max` triple form one slab's rate rows).
pub fn load_hra_table(dir: &Path) -> Result<HraTable, EngineError> {
    let mut reader = open(dir, "hra_slabs.csv")?;
    let mut table = HraTable::new();
    let mut current: Option<(NaiveDate, i64, Option<i64>, Vec<(CityGrade, f64)>)> = None;
    let mut era_slabs: Vec<(NaiveDate, Vec<HraSlab>)> = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| field_err("hra_slabs.csv", e))?;
        let effective_from: NaiveDate = record[0].parse().map_err(|e| field_err("effective_from", e))?;
        let min: i64 = record[1].parse().map_err(|e| field_err("min", e))?;
        let max = if record[2].trim().is_empty() {
            None
        } else {
            Some(record[2].parse().map_err(|e| field_err("max", e))?)
        };
        let grade = parse_city_grade(&record[3])?;
        let rate: f64 = record[4].parse().map_err(|e| field_err("rate_percent", e))?;

        let is_new_slab = match &current {
            Some((ef, mn, mx, _)) => *ef != effective_from || *mn != min || *mx != max,
            None => true,
        };
        if is_new_slab {
            if let Some((ef, mn, mx, rates)) = current.take() {
                push_slab(&mut era_slabs, ef, mn, mx, rates);
            }
            current = Some((effective_from, min, max, vec![(grade, rate)]));
        } else if let Some((_, _, _, rates)) = &mut current {
            rates.push((grade, rate));
        }
    }
    if let Some((ef, mn, mx, rates)) = current.take() {
        push_slab(&mut era_slabs, ef, mn, mx, rates);
    }

    for (effective_from, slabs) in era_slabs {
        table.push_era(HraEra { effective_from, slabs });
    }
    Ok(table)
}

fn push_slab(
    era_slabs: &mut Vec<(NaiveDate, Vec<HraSlab>)>,
    effective_from: NaiveDate,
    min: i64,
    max: Option<i64>,
    rates: Vec<(CityGrade, f64)>,
) {
    let slab = HraSlab { min, max, rates };
    match era_slabs.iter_mut().find(|(ef, _)| *ef == effective_from) {
        Some((_, slabs)) => slabs.push(slab),
        None => era_slabs.push((effective_from, vec![slab])),
    }
}
