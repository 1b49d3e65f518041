//! City Compensatory Allowance rates (§4.4). Flat monthly amount per city
//! class; merged into pay and zeroed from the 7th PC onward.

use std::collections::HashMap;

use crate::types::{CityClass, Commission};

#[derive(Debug, Clone, Default)]
pub struct CcaTable {
    rates: HashMap<CityClass, i64>,
}

impl CcaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, city: CityClass, amount: i64) {
        self.rates.insert(city, amount);
    }

    /// §4.4: zero for 7th PC (CCA merged into pay), else the flat city-class rate.
    pub fn lookup(&self, commission: Commission, city: CityClass) -> i64 {
        if commission == Commission::Seventh {
            return 0;
        }
        self.rates.get(&city).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_from_seventh_pc() {
        let mut t = CcaTable::new();
        t.insert(CityClass::A, 300);
        assert_eq!(t.lookup(Commission::Seventh, CityClass::A), 0);
        assert_eq!(t.lookup(Commission::Sixth, CityClass::A), 300);
    }

    #[test]
    fn unmapped_city_is_zero() {
        let t = CcaTable::new();
        assert_eq!(t.lookup(Commission::Fifth, CityClass::B), 0);
    }
}
