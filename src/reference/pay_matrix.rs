//! 7th PC pay matrix: level -> ordered list of discrete pay stages (§4.2).

use std::collections::HashMap;

use crate::error::EngineError;

/// Level -> ordered stages table for the 7th Pay Commission.
#[derive(Debug, Clone, Default)]
pub struct PayMatrix {
    levels: HashMap<u32, Vec<i64>>,
}

impl PayMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_level(&mut self, level: u32, stages: Vec<i64>) {
        self.levels.insert(level, stages);
    }

    fn stages(&self, level: u32) -> Result<&[i64], EngineError> {
        self.levels
            .get(&level)
            .map(Vec::as_slice)
            .filter(|s| !s.is_empty())
            .ok_or(EngineError::UnknownPayMatrixLevel { level })
    }

    /// Stage-0 (first) pay of a level — the new-entrant basic pay.
    pub fn first_stage(&self, level: u32) -> Result<i64, EngineError> {
        Ok(self.stages(level)?[0])
    }

    /// §4.2 `fitIntoLevel`: least stage >= `pay`, or the max stage if none qualifies.
    pub fn fit_into_level(&self, pay: i64, level: u32) -> Result<i64, EngineError> {
        let stages = self.stages(level)?;
        Ok(stages
            .iter()
            .copied()
            .find(|&s| s >= pay)
            .unwrap_or(*stages.last().unwrap()))
    }

    /// §4.2 `increment7th`. If `pay` is itself a stage, index = its index + n,
    /// clamped to the last index. Otherwise find the first stage above `pay`
    /// and shift by `n - 1` from there.
    pub fn increment(&self, pay: i64, level: u32, n: i64) -> Result<i64, EngineError> {
        let stages = self.stages(level)?;
        let last = stages.len() as i64 - 1;

        let idx = if let Some(pos) = stages.iter().position(|&s| s == pay) {
            pos as i64 + n
        } else {
            let above = stages.iter().position(|&s| s > pay).unwrap_or(stages.len() - 1);
            above as i64 + n - 1
        };

        let idx = idx.clamp(0, last) as usize;
        Ok(stages[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PayMatrix {
        let mut m = PayMatrix::new();
        m.insert_level(8, vec![47600, 49100, 50600, 52100, 53700]);
        m
    }

    #[test]
    fn fit_into_level_exact_and_between() {
        let m = sample();
        assert_eq!(m.fit_into_level(47600, 8).unwrap(), 47600);
        assert_eq!(m.fit_into_level(48000, 8).unwrap(), 49100);
        assert_eq!(m.fit_into_level(60000, 8).unwrap(), 53700);
    }

    #[test]
    fn increment_from_exact_stage() {
        let m = sample();
        assert_eq!(m.increment(47600, 8, 1).unwrap(), 49100);
        assert_eq!(m.increment(47600, 8, 2).unwrap(), 50600);
    }

    #[test]
    fn increment_from_between_stages() {
        let m = sample();
        // 48000 is between 47600 and 49100; first stage above is 49100 (idx 1);
        // n=1 -> idx 1 + 1 - 1 = 1 -> 49100
        assert_eq!(m.increment(48000, 8, 1).unwrap(), 49100);
    }

    #[test]
    fn increment_clamps_at_top() {
        let m = sample();
        assert_eq!(m.increment(53700, 8, 5).unwrap(), 53700);
    }

    #[test]
    fn unknown_level_errors() {
        let m = sample();
        assert!(m.fit_into_level(1000, 99).is_err());
    }
}
