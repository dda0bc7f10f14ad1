pub mod constants;
pub mod functions;
pub mod impls;
pub mod supervisor;
pub mod types;

pub use functions::lookup_for;
pub use supervisor::ProberSupervisor;
pub use types::Prober;
