pub mod constants;
pub mod errors;
pub mod functions;

pub use functions::{bind, serve};
