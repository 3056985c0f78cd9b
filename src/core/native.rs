use crate::core::ComputeModule;
use crate::utils::error::{CalcError, Result};

/// In-process implementation of the compute capability.
#[derive(Debug, Default, Clone)]
pub struct NativeModule;

impl NativeModule {
    pub fn new() -> Self {
        Self
    }
}

impl ComputeModule for NativeModule {
    fn factorial(&self, n: i64) -> Result<u64> {
        if n < 0 {
            return Err(CalcError::NegativeInput);
        }
        // 21! overflows u64; 20! = 2_432_902_008_176_640_000 still fits.
        if n > 20 {
            return Err(CalcError::InputTooLarge);
        }
        Ok((2..=n as u64).product())
    }

    fn sum_list(&self, values: &[f64]) -> Result<f64> {
        if values.is_empty() {
            return Err(CalcError::EmptyArray);
        }
        // Left-to-right accumulation; NaN and infinities propagate as-is.
        Ok(values.iter().fold(0.0, |acc, v| acc + v))
    }
}
