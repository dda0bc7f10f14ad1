//! DNS Lookup Module
//!
//! Performs the single lookup a prober issues on every tick.
//!
//! # Lookups
//!
//! - [`ServerLookup`] sends one `A` query to a configured resolver server over
//!   UDP or TCP and reports the response code of the answer.
//! - [`SystemLookup`] goes through the operating system resolver and has no
//!   response code to report.
//!
//! Neither lookup enforces a deadline; callers bound each lookup with their
//! own timeout. A system resolution cannot be cancelled, so a [`SystemLookup`]
//! waits for one its caller gave up on before starting the next.
//!
//! # Error Handling
//!
//! Every failure surfaces as a [`LookupError`]. Negative answers (`NXDOMAIN`,
//! `SERVFAIL`, ...) are errors too and carry their response code so it can be
//! used as a metric label.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod traits;
pub mod types;

pub use errors::LookupError;
pub use traits::Lookup;
pub use types::{ServerLookup, SystemLookup};
