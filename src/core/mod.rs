pub mod engine;
pub mod loader;
pub mod native;

pub use crate::domain::model::{Computation, Outcome};
pub use crate::domain::ports::{ComputeModule, ConfigProvider, ModuleLoader};
pub use crate::utils::error::Result;
