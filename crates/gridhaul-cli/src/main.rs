mod commands;

use std::time::Instant;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gridhaul_cli::output::{print_footer, print_logo, OutputFormat};

use commands::path::{handle_path_command, PathCommandArgs};
use commands::plan::{handle_demo_command, handle_plan_command, DemoCommandArgs, PlanCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Grid delivery route planning under cargo and fuel limits")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct GlobalOptions {
    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Suppress the banner and the timing footer.
    #[arg(long, global = true)]
    no_logo: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route for a scenario file (or the configured/default scenario).
    Plan(PlanCommandArgs),
    /// Plan the built-in demonstration scenario.
    Demo(DemoCommandArgs),
    /// Print the shortest path between two cells of an empty grid.
    Path(PathCommandArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let format = cli.global.format;
    let decorated = format.is_decorated() && !cli.global.no_logo;

    if decorated {
        print_logo();
    }
    let started = Instant::now();

    match &cli.command {
        Command::Plan(args) => handle_plan_command(format, args)?,
        Command::Demo(args) => handle_demo_command(format, args)?,
        Command::Path(args) => handle_path_command(format, args)?,
    }

    if decorated {
        print_footer(started.elapsed());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
