//! lightctl CLI — drive the shared indicator LED and display backlight.

use std::path::PathBuf;

use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(
    name = "lightctl",
    version,
    about = "Control the shared indicator LED and display backlight"
)]
struct Args {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Re-root all device file paths under this directory
    #[arg(long, global = true, hide = true, value_name = "DIR")]
    sysfs_root: Option<PathBuf>,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Args::parse();

    if let Err(e) = cli::run(args.command, args.json, args.sysfs_root.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
