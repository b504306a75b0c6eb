mod align;
mod args;
mod util;

use align::align;
use args::{Cli, SubCommands};
use libmultialign::align::structs::Recurrence;
use util::init_logger;

use clap::Parser;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();

    let cli = Cli::parse();
    init_logger(cli.verbosity);

    match cli.command {
        SubCommands::Global(args) => align(&args, Recurrence::Global)?,
        SubCommands::Local(args) => align(&args, Recurrence::Local)?,
    }
    Ok(())
}
