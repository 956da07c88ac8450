use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "flexq-server", about = "Resolve and validate broker services, then start the broker")]
pub struct Params {
    /// Broker description (TOML). Built-in defaults when omitted.
    #[arg(long, env = "FLEXQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// tracing filter directive, e.g. `debug` or `flexq=trace`
    #[arg(long, env = "FLEXQ_LOG", default_value = "info")]
    pub log_level: String,

    /// Print the started broker's channels and services as JSON.
    #[arg(long)]
    pub print: bool,
}
