use std::io::{BufRead, Write};
use std::process::ExitCode;

#[allow(unused_imports)]
use ps_template::{debug, gcd, lcm, outln, power, InputStream, MOD};
use ps_template::{run_stdio, Cases, Context, Result};

// Cases::Leading reads the number of test cases first
const CASES: Cases = Cases::Single;

#[allow(unused_variables)]
fn solve<R: BufRead, W: Write>(ctx: &mut Context<R, W>) -> Result<()> {
    let Context { input, output } = ctx;

    Ok(())
}

fn main() -> ExitCode {
    match run_stdio(CASES, solve) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
