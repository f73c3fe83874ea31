use anyhow::Result;
use clap::Parser;
use reefsim_core::config::AppConfig;
use reefsim_lib::app::{run_headless, App};
use reefsim_tui::Tui;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "reefsim.toml")]
    config: PathBuf,

    /// Number of steps for a headless run (overrides the config file)
    #[arg(long)]
    steps: Option<u64>,

    /// Random seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the headless summary as JSON
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    if let Some(steps) = args.steps {
        config.world.steps = steps;
    }
    config.validate()?;

    match args.mode {
        Mode::Headless => {
            reefsim_core::init_logging(&args.log_level);
            let steps = config.world.steps;
            let summary = run_headless(config, steps)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "Seed {} | {} of {} steps | {}",
                    summary.seed, summary.steps_run, summary.steps_requested, summary.counts
                );
                println!(
                    "Births: {} | Deaths: {}",
                    summary.stats.total_births(),
                    summary.stats.total_deaths()
                );
            }
        }
        Mode::Standard => {
            // Log lines would tear through the alternate screen, so the
            // interactive view runs without a subscriber.
            let mut app = App::new(config)?;
            let mut tui = Tui::new()?;
            tui.init()?;

            let res = app.run(&mut tui).await;

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            } else {
                println!("Exited after {} steps.", app.sim.step());
            }
        }
    }

    Ok(())
}
