use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Capability contract for the compute module. The in-process implementation
/// lives in `core::native`; a real foreign module can be substituted without
/// touching the calling code.
pub trait ComputeModule: Send + Sync {
    fn factorial(&self, n: i64) -> Result<u64>;
    fn sum_list(&self, values: &[f64]) -> Result<f64>;
}

/// Produces a compute module. Implementations report load failures as
/// `CalcError::ModuleUnavailable`.
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn ComputeModule>>;
}

pub trait ConfigProvider: Send + Sync {
    fn number_input(&self) -> &str;
    fn list_input(&self) -> &str;
    fn load_delay(&self) -> Duration;
}
