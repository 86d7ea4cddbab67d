//! Copy-and-fill template for competitive programming: a line-synced token
//! reader, a buffered writer that always flushes, and a few number helpers.

pub mod debug;
pub mod error;
pub mod io;
pub mod math;
pub mod run;

pub use error::{Error, Result};
pub use io::{InputStream, LineSyncedInput, Output};
pub use math::{gcd, lcm, mod_inv, power, MOD};
pub use run::{run, run_stdio, Cases, Context};
