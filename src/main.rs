use anyhow::Result;
use arrayops::cli::{build_env_filter, execute_command, get_log_level, Cli};
use arrayops::config::Config;
use clap::Parser;
use tracing::{debug, error, trace};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;

    let log_level = get_log_level(cli.verbose, &config.log_level);
    let (filter, warning) = build_env_filter(&log_level);
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("arrayops started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Some(output) = cli.output {
        config.output = output;
    }
    if cli.pretty {
        config.pretty = true;
    }
    debug!("Effective configuration: {:?}", config);

    let rendered = execute_command(cli.command, &config)?;
    println!("{}", rendered);
    Ok(())
}
