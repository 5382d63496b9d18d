pub mod args;
pub mod commands;
pub mod logging;

pub use args::{Cli, Commands, GenerateArgs};
pub use commands::{build_config, run};
pub use logging::init_logging;
