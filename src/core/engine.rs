use crate::core::loader::SimulatedLoader;
use crate::core::{Computation, ComputeModule, ConfigProvider, ModuleLoader, Outcome, Result};
use crate::utils::validation;
use std::sync::Arc;

pub struct CalcEngine {
    module: Arc<dyn ComputeModule>,
}

impl CalcEngine {
    pub fn new(module: Arc<dyn ComputeModule>) -> Self {
        Self { module }
    }

    /// Validates both raw inputs, then runs the two module operations.
    /// Range checks on the factorial input belong to the module, not the
    /// validator.
    pub fn run(&self, raw_number: &str, raw_list: &str) -> Result<Computation> {
        let n = validation::parse_integer(raw_number)?;
        let values = validation::parse_number_list(raw_list)?;
        tracing::debug!("Validated inputs: n={}, {} list values", n, values.len());

        let factorial = self.module.factorial(n)?;
        let sum = self.module.sum_list(&values)?;
        tracing::debug!("Computed factorial={}, sum={}", factorial, sum);

        Ok(Computation {
            input: n,
            factorial,
            sum,
        })
    }

    /// Top-level recovery point: every error is folded into a displayable
    /// `Outcome::Failed`, never a panic or a process exit. No retries.
    pub fn trigger(&self, raw_number: &str, raw_list: &str) -> Outcome {
        match self.run(raw_number, raw_list) {
            Ok(computation) => Outcome::Ready(computation),
            Err(e) => {
                tracing::warn!("Computation failed: {}", e);
                Outcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Loads a module through the given loader and fires a single trigger.
/// A load failure surfaces as the single visible error message.
pub async fn run_with_loader<C, L>(config: &C, loader: &L) -> Outcome
where
    C: ConfigProvider,
    L: ModuleLoader,
{
    let module = match loader.load().await {
        Ok(module) => module,
        Err(e) => {
            tracing::error!("Module load failed: {}", e);
            return Outcome::Failed {
                message: e.to_string(),
            };
        }
    };

    CalcEngine::new(module).trigger(config.number_input(), config.list_input())
}

/// Library entry used by the binary: simulated load with the configured
/// delay, then one computation over the configured inputs.
pub async fn run_once<C: ConfigProvider>(config: &C) -> Outcome {
    let loader = SimulatedLoader::from_config(config);
    run_with_loader(config, &loader).await
}
