pub mod error;
pub mod state;
pub mod teardown;
pub mod util;

/// Master to fall back to when none is given and the environment does not
/// name one either.
pub static DEFAULT_MASTER: &str = "127.0.0.1:5050";

/// Environment variable consulted for the master when it is not given as an
/// argument.
pub static MASTER_ENV: &str = "MESOS_MASTER";
