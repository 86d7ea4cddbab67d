use std::io::{BufRead, StdinLock, StdoutLock, Write};

use crate::error::Result;
use crate::io::{self, InputStream, LineSyncedInput, Output};

/// How many times `solve` runs. Picked at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cases {
    #[default]
    Single,
    /// The first token of the input is the number of cases. A negative
    /// count runs no cases.
    Leading,
    Fixed(usize),
}

/// Everything `solve` gets to touch: one reader and one writer.
pub struct Context<R: BufRead, W: Write> {
    pub input: LineSyncedInput<R>,
    pub output: Output<W>,
}

impl<R: BufRead, W: Write> Context<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: LineSyncedInput::new(input),
            output: Output::new(output),
        }
    }

    pub fn close(self) -> Result<()> {
        self.output.close()
    }
}

impl Context<StdinLock<'static>, StdoutLock<'static>> {
    pub fn stdio() -> Self {
        Self {
            input: io::stdin(),
            output: io::stdout(),
        }
    }
}

/// Runs `solve` once per case, then closes the output.
///
/// Errors from `solve` are returned unchanged. The output is flushed on every
/// path out of here, errors and panics included, since `Output` flushes on drop.
pub fn run<R, W, F>(mut ctx: Context<R, W>, cases: Cases, mut solve: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut Context<R, W>) -> Result<()>,
{
    let count = match cases {
        Cases::Single => 1,
        Cases::Leading => usize::try_from(ctx.input.value::<i64>()?).unwrap_or(0),
        Cases::Fixed(n) => n,
    };
    for _ in 0..count {
        solve(&mut ctx)?;
    }
    ctx.close()
}

pub fn run_stdio<F>(cases: Cases, solve: F) -> Result<()>
where
    F: FnMut(&mut Context<StdinLock<'static>, StdoutLock<'static>>) -> Result<()>,
{
    run(Context::stdio(), cases, solve)
}
