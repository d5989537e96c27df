use std::io::{BufRead, Write};

use crate::error::Error;
use crate::state::Framework;
use crate::util::client;

/// What the operator decided to do with a framework.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision {
    TearDown,
    Keep,
}

/// Walk the frameworks in order, asking about each in turn and tearing down
/// the confirmed ones.  A failed teardown aborts the remaining frameworks.
pub fn propose_teardowns(
    master: &str,
    frameworks: &[Framework],
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), Error> {
    for framework in frameworks {
        if confirm(framework, input, output)? == Decision::TearDown {
            teardown_framework(master, &framework.id, output)?;
        }
    }

    Ok(())
}

/// Prompt for a framework until the answer is a single `y` or `n`, in either
/// case.  Anything else asks again; a closed input stream is an error, since
/// no answer can ever arrive on it.
pub fn confirm(
    framework: &Framework,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Decision, Error> {
    loop {
        write!(
            output,
            "Kill framework {name} (ID {id}) with {tasks} tasks running? ([y]es, [n]o): ",
            name = framework.name,
            id = framework.id,
            tasks = framework.tasks,
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::EndOfInput);
        }

        match line.trim_end_matches('\n') {
            "y" | "Y" => return Ok(Decision::TearDown),
            "n" | "N" => return Ok(Decision::Keep),
            _ => continue,
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

/// Ask the master to tear the framework down.  The response is ignored: only
/// a transport failure counts as an error.
fn teardown_framework(master: &str, id: &str, output: &mut impl Write) -> Result<(), Error> {
    let url = format!("http://{master}/teardown");
    tracing::debug!(url, id, "requesting teardown");
    client()?.post(&url).body(format!("frameworkId={id}")).send()?;

    writeln!(output, "\nKilled framework {id}")?;
    Ok(())
}
