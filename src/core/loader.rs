use crate::core::native::NativeModule;
use crate::core::{ComputeModule, ConfigProvider, ModuleLoader};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Fixed-delay loader standing in for a real module-loading mechanism.
/// One shot: no cancellation, no retry, no timeout.
#[derive(Debug, Clone)]
pub struct SimulatedLoader {
    delay: Duration,
}

impl SimulatedLoader {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.load_delay())
    }
}

#[async_trait]
impl ModuleLoader for SimulatedLoader {
    async fn load(&self) -> Result<Arc<dyn ComputeModule>> {
        tracing::info!("Loading compute module (simulated, {:?})", self.delay);
        tokio::time::sleep(self.delay).await;
        tracing::info!("Compute module ready");
        Ok(Arc::new(NativeModule::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_returns_working_module() {
        let loader = SimulatedLoader::new(Duration::from_millis(0));
        let module = loader.load().await.unwrap();
        assert_eq!(module.factorial(4).unwrap(), 24);
    }
}
