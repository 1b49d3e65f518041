//! Date and scale primitives (§4.1).
//!
//! A scale string such as `"1200-30-1440-40-1800"` parses to a sequence of
//! stages, each with a `from`/`to`/`inc`. These are the pre-6th-PC pay
//! ladders; 6th/7th PC have their own representations (pay band / pay
//! matrix) in [`crate::reference`].

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// One piecewise-increment range within a [`Scale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleStage {
    pub from: i64,
    pub to: i64,
    pub inc: i64,
}

/// A parsed pre-6th-PC pay scale: an ordered ladder of stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    /// Identifier as it appears in reference tables (e.g. `"1200-30-1440-40-1800"`).
    pub id: String,
    pub stages: Vec<ScaleStage>,
    pub start: i64,
    pub max: i64,
}

impl Scale {
    /// Parse a scale string like `"1200-30-1440-40-1800"` into stages.
    ///
    /// The grammar is `start(-inc-to)+`: an initial value followed by
    /// repeating (increment, upper-bound) pairs.
    pub fn parse(raw: &str) -> Result<Self, EngineError> {
        let parts: Vec<i64> = raw
            .split('-')
            .map(|p| {
                p.trim().parse::<i64>().map_err(|_| EngineError::MalformedScale {
                    raw: raw.to_string(),
                    reason: format!("`{p}` is not an integer"),
                })
            })
            .collect::<Result<_, _>>()?;

        if parts.len() < 3 || parts.len() % 2 == 0 {
            return Err(EngineError::MalformedScale {
                raw: raw.to_string(),
                reason: "expected start followed by (inc, to) pairs".to_string(),
            });
        }

        let start = parts[0];
        let mut stages = Vec::new();
        let mut from = start;
        let mut i = 1;
        while i + 1 < parts.len() + 1 && i < parts.len() {
            let inc = parts[i];
            let to = parts[i + 1];
            stages.push(ScaleStage { from, to, inc });
            from = to;
            i += 2;
        }

        let max = stages.last().map(|s| s.to).unwrap_or(start);

        Ok(Self { id: raw.to_string(), stages, start, max })
    }

    /// Advance `pay` by `n` increments within the scale (§4.1 `increment`).
    pub fn increment(&self, pay: i64, n: u32) -> i64 {
        let mut current = pay;
        for _ in 0..n {
            if current >= self.max {
                current = self.max;
                break;
            }
            let inc = self
                .stages
                .iter()
                .find(|s| s.to > current)
                .map(|s| s.inc)
                .or_else(|| self.stages.last().map(|s| s.inc))
                .unwrap_or(0);
            current += inc;
        }
        current.min(self.max)
    }

    /// Find the next stage strictly higher than `pay` (§4.1 `fitNextHigher`).
    pub fn fit_next_higher(&self, pay: i64) -> i64 {
        if pay >= self.max {
            return self.max;
        }
        if pay < self.start {
            return self.start;
        }
        let mut current = self.start;
        while current <= pay && current < self.max {
            current = self.increment(current, 1);
            if current == self.max && current <= pay {
                break;
            }
        }
        current.min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Scale {
        Scale::parse("1200-30-1440-40-1800").unwrap()
    }

    #[test]
    fn parses_stages() {
        let scale = sample();
        assert_eq!(scale.start, 1200);
        assert_eq!(scale.max, 1800);
        assert_eq!(
            scale.stages,
            vec![
                ScaleStage { from: 1200, to: 1440, inc: 30 },
                ScaleStage { from: 1440, to: 1800, inc: 40 },
            ]
        );
    }

    #[test]
    fn increment_within_first_stage() {
        let scale = sample();
        assert_eq!(scale.increment(1200, 1), 1230);
    }

    #[test]
    fn increment_crosses_stage_boundary() {
        let scale = sample();
        // 1410 + 30 = 1440 (still below `to` is false since 1440 is not > 1440,
        // so the next increment at 1440 uses the second stage's inc of 40).
        assert_eq!(scale.increment(1410, 1), 1440);
        assert_eq!(scale.increment(1440, 1), 1480);
    }

    #[test]
    fn increment_clamps_at_max() {
        let scale = sample();
        assert_eq!(scale.increment(1790, 1), 1800);
        assert_eq!(scale.increment(1800, 1), 1800);
        assert_eq!(scale.increment(1800, 5), 1800);
    }

    #[test]
    fn fit_next_higher_below_start() {
        let scale = sample();
        assert_eq!(scale.fit_next_higher(1000), 1200);
    }

    #[test]
    fn fit_next_higher_above_max() {
        let scale = sample();
        assert_eq!(scale.fit_next_higher(2000), 1800);
    }

    #[test]
    fn fit_next_higher_mid_scale() {
        let scale = sample();
        // next stage strictly above 1230 is 1260
        assert_eq!(scale.fit_next_higher(1230), 1260);
    }

    #[test]
    fn malformed_scale_rejected() {
        assert!(Scale::parse("not-a-scale").is_err());
        assert!(Scale::parse("1200-30").is_err());
    }
}
