mod input;
mod output;

pub use input::{InputStream, LineSyncedInput};
pub use output::Output;

use std::io::{StdinLock, StdoutLock};

pub fn stdin() -> LineSyncedInput<StdinLock<'static>> {
    LineSyncedInput::new(std::io::stdin().lock())
}

pub fn stdout() -> Output<StdoutLock<'static>> {
    Output::new(std::io::stdout().lock())
}
