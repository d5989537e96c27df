use clap::Parser;
use std::env;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

use mesos_teardown::state;
use mesos_teardown::teardown;
use mesos_teardown::{DEFAULT_MASTER, MASTER_ENV};

/// Interactively tear down frameworks running on a Mesos master.
#[derive(Debug, Parser)]
#[command(override_usage = "mesos-teardown [<master>] <name-pattern>")]
struct Args {
    /// Master host:port pair.  When only one argument is given this is the
    /// name pattern instead, and the master is read from $MESOS_MASTER,
    /// falling back to 127.0.0.1:5050.
    #[arg(value_name = "MASTER")]
    master_or_pattern: String,

    /// Name of the frameworks to tear down.  A regular expression, matched
    /// anywhere in the name, so it is fine to match several frameworks.
    #[arg(value_name = "NAME-PATTERN")]
    pattern: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            // every failure of this tool exits 1, clap's default of 2
            // included; --help still goes to stdout and exits 0
            let _ = error.print();
            process::exit(if error.use_stderr() { 1 } else { 0 });
        }
    };
    let (master, pattern) = resolve(args);

    let frameworks = match state::find_matching_frameworks(&master, &pattern) {
        Ok(frameworks) => frameworks,
        Err(error) => {
            eprintln!("error: {error}");
            process::exit(1);
        }
    };

    if frameworks.is_empty() {
        println!("No frameworks matching '{pattern}' found.");
        process::exit(0);
    }

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    if let Err(error) = teardown::propose_teardowns(&master, &frameworks, &mut input, &mut output) {
        eprintln!("error: {error}");
        process::exit(1);
    }
}

/// Figure out which positional argument is which.  With both given they are
/// the master and the pattern, in that order; with only one, it is the
/// pattern and the master comes from the environment.
fn resolve(args: Args) -> (String, String) {
    match args.pattern {
        Some(pattern) => (args.master_or_pattern, pattern),
        None => {
            let master = env::var(MASTER_ENV)
                .ok()
                .filter(|master| !master.is_empty())
                .unwrap_or_else(|| DEFAULT_MASTER.to_string());

            (master, args.master_or_pattern)
        }
    }
}
