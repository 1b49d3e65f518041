//! Grade-pay <-> level mapping, 6th PC pay-band bounds, and the 5th-PC
//! scale -> grade-pay mapping used at the 5->6 fixation (§4.5).

use std::collections::HashMap;

use crate::error::EngineError;

/// Pay-in-Pay-Band bounds for one grade pay.
#[derive(Debug, Clone, Copy)]
pub struct PayBand {
    pub min: i64,
    /// `None` means unbounded above.
    pub max: Option<i64>,
}

impl PayBand {
    pub fn clamp(&self, pipb: i64) -> i64 {
        let floored = pipb.max(self.min);
        match self.max {
            Some(max) => floored.min(max),
            None => floored,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GradePayTable {
    gp_to_level: HashMap<u32, u32>,
    pay_bands: HashMap<u32, PayBand>,
    fifth_scale_to_gp: HashMap<String, u32>,
}

impl GradePayTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_level(&mut self, grade_pay: u32, level: u32) {
        self.gp_to_level.insert(grade_pay, level);
    }

    pub fn set_band(&mut self, grade_pay: u32, band: PayBand) {
        self.pay_bands.insert(grade_pay, band);
    }

    pub fn map_fifth_scale(&mut self, fifth_scale_id: impl Into<String>, grade_pay: u32) {
        self.fifth_scale_to_gp.insert(fifth_scale_id.into(), grade_pay);
    }

    /// 6th->7th transition: GP -> Level.
    pub fn level_for_grade_pay(&self, grade_pay: u32) -> Result<u32, EngineError> {
        self.gp_to_level
            .get(&grade_pay)
            .copied()
            .ok_or(EngineError::GradePayToLevelUnknown { grade_pay })
    }

    pub fn band_for_grade_pay(&self, grade_pay: u32) -> Result<PayBand, EngineError> {
        self.pay_bands
            .get(&grade_pay)
            .copied()
            .ok_or(EngineError::GradePayToLevelUnknown { grade_pay })
    }

    /// 5th->6th transition: the GP that corresponds to the employee's current 5th-PC scale.
    pub fn grade_pay_for_fifth_scale(&self, scale_id: &str) -> Result<u32, EngineError> {
        self.fifth_scale_to_gp.get(scale_id).copied().ok_or_else(|| {
            EngineError::ScaleMappingFailed { from_scale: scale_id.to_string(), commission: 5 }
        })
    }
}
