pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::engine::CalcEngine;
pub use crate::core::loader::SimulatedLoader;
pub use crate::core::native::NativeModule;
pub use crate::domain::model::{Computation, Outcome};
pub use crate::utils::error::{CalcError, Result};
