pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;

pub use functions::normalize_args;
pub use types::{Cli, ConfigManager, ValidatedSettings};
