//! Pay operators (§4.2–§4.4): 6th-PC increment arithmetic and the
//! DA/HRA/CCA allowance lookups. Scale and pay-matrix operators live on
//! [`crate::scale::Scale`] and [`crate::reference::PayMatrix`] directly;
//! this module holds the operators that don't belong to a single table.

use chrono::NaiveDate;

use crate::reference::{GradePayTable, ReferenceTables};
use crate::types::{CityClass, Commission};

/// Half-away-from-zero rounding to the nearest rupee (§9: "conventional round").
pub fn round_currency(amount: f64) -> i64 {
    amount.round() as i64
}

/// §4.3: 6th-PC increment. `inc = round((PIPB + GP) * 0.03)`, clamped to the
/// band's max if one is defined, repeated `n` times.
pub fn increment_in_6th_pc(
    pipb: i64,
    grade_pay: u32,
    grade_pay_table: &GradePayTable,
    n: u32,
) -> Result<(i64, i64), crate::error::EngineError> {
    let band = grade_pay_table.band_for_grade_pay(grade_pay)?;
    let mut current = pipb;
    for _ in 0..n {
        let inc = round_currency((current + grade_pay as i64) as f64 * 0.03);
        current += inc;
        if let Some(max) = band.max {
            current = current.min(max);
        }
    }
    Ok((current, current + grade_pay as i64))
}

/// §4.4 DA: amount rounded from `basic_pay * rate / 100`. An override, if
/// supplied, replaces the looked-up rate for every month.
pub fn da_amount(basic_pay: i64, rate_percent: f64) -> i64 {
    round_currency(basic_pay as f64 * rate_percent / 100.0)
}

/// §4.4 HRA: percentage-of-basic-pay amount for the applicable era/slab/grade.
pub fn hra_amount(tables: &ReferenceTables, date: NaiveDate, basic_pay: i64, city: CityClass) -> i64 {
    let rate = tables.hra.lookup(date, basic_pay, city.hra_grade());
    round_currency(basic_pay as f64 * rate)
}

/// §4.4 CCA: flat city-class amount, zero from the 7th PC onward.
pub fn cca_amount(tables: &ReferenceTables, commission: Commission, city: CityClass) -> i64 {
    tables.cca.lookup(commission, city)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::PayBand;

    fn band_table() -> GradePayTable {
        let mut t = GradePayTable::new();
        t.set_band(4200, PayBand { min: 9300, max: Some(34800) });
        t
    }

    #[test]
    fn sixth_pc_increment_rounds_and_accumulates() {
        let table = band_table();
        let (pipb, basic) = increment_in_6th_pc(9300, 4200, &table, 1).unwrap();
        // (9300+4200)*0.03 = 405
        assert_eq!(pipb, 9705);
        assert_eq!(basic, 9705 + 4200);
    }

    #[test]
    fn sixth_pc_increment_clamps_at_band_max() {
        let table = band_table();
        let (pipb, _) = increment_in_6th_pc(34700, 4200, &table, 1).unwrap();
        assert_eq!(pipb, 34800);
    }

    #[test]
    fn da_amount_rounds_half_away_from_zero() {
        assert_eq!(da_amount(10000, 12.5), 1250);
        assert_eq!(da_amount(10001, 9.0), 900); // 900.09 -> 900
    }

    #[test]
    fn round_currency_rounds_half_up() {
        assert_eq!(round_currency(1250.5), 1251);
        assert_eq!(round_currency(1250.49), 1250);
    }
}
