use anyhow::Result;
use clap::Parser;
use flexq_server::server::{self, Params};

fn main() -> Result<()> {
    let params = Params::parse();
    server::init_tracing(&params.log_level);

    let broker = server::start(&params)?;
    if params.print {
        println!("{}", server::render_summary(&broker)?);
    }
    Ok(())
}
