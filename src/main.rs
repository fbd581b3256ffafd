// Visitor Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/visitor-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/visitor-simulator --tick-interval-ms 250 --ticks 40 --seed 7 --verbose
// ```

use anyhow::{anyhow, Context};
use clap::Parser;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};
use visitor_simulator::simulation::{LoggingConfig, SimulationContext, SimulationSnapshot};
use visitor_simulator::types::config::CliArgs;
use visitor_simulator::types::{OutputFormat, SimulationConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        let json = SimulationConfig::default()
            .print_json()
            .context("Failed to serialize default configuration")?;
        println!("{}", json);
        return Ok(());
    }

    let _logging = LoggingConfig::from_flags(args.verbose, args.debug)
        .init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    info!("Starting Visitor Simulator");

    let dry_run = args.dry_run;
    let submit_contact = args.contact;

    let config = SimulationConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    let output_format = config.get_output_format().map_err(anyhow::Error::msg)?;

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_startup_banner(&config);

    let mut context = SimulationContext::new(config.clone());
    context.start().context("Failed to start simulation")?;

    run_until_done(&context, &config).await?;

    if submit_contact {
        match context.submit_contact_form()? {
            Some(behavior) => eprintln!("Contact form submitted by {}", behavior.visitor_id),
            None => warn!("No current visitor to submit the contact form"),
        }
    }

    let snapshot = context.snapshot()?;
    context.stop().await.context("Failed to stop simulation")?;

    print_report(&snapshot, output_format)?;

    info!("Visitor Simulator completed successfully");
    Ok(())
}

/// Report progress once per tick interval until the configured tick count is
/// reached or the user interrupts
async fn run_until_done(context: &SimulationContext, config: &SimulationConfig) -> anyhow::Result<()> {
    let target = config.ticks as u64;
    let mut progress = time::interval(config.tick_interval());
    progress.set_missed_tick_behavior(MissedTickBehavior::Delay);
    progress.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = progress.tick() => {
                let handle = context.handle()?;
                let analytics = handle.analytics();
                let ticks = handle.tick_count();
                eprintln!(
                    "tick {:>3}/{}: {} visitors ({} active), {} behaviors",
                    ticks,
                    target,
                    analytics.total_visitors,
                    analytics.active_visitors,
                    analytics.total_behaviors
                );
                if ticks >= target {
                    break;
                }
            }
            result = &mut ctrl_c => {
                result.context("Failed to listen for interrupt")?;
                eprintln!("Interrupted, reporting current state");
                break;
            }
        }
    }

    Ok(())
}

fn print_report(snapshot: &SimulationSnapshot, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", snapshot.dashboard()),
        OutputFormat::Json => {
            println!("{}", snapshot.to_json().context("Failed to serialize snapshot")?)
        }
    }
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Visitor Simulator");
    eprintln!("=================");
    eprintln!("Synthetic website visitors with live analytics");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    let run_time = Duration::from_millis(config.tick_interval_ms.saturating_mul(config.ticks as u64));

    eprintln!("Configuration:");
    eprintln!("  Tick Interval: {} ms", config.tick_interval_ms);
    eprintln!("  Ticks: {} (~{:.1}s)", config.ticks, run_time.as_secs_f64());
    eprintln!("  Initial Visitors: {}", config.initial_visitors);
    eprintln!("  New Visitor Chance: {:.0}%", config.new_visitor_probability * 100.0);
    eprintln!(
        "  Current Visitor Switch Chance: {:.0}%",
        config.current_visitor_switch_probability * 100.0
    );
    eprintln!("  Behavior Chance: {:.0}%", config.behavior_probability * 100.0);
    eprintln!("  Behavior Retention: {}", config.behavior_retention);
    eprintln!("  Active Window: {}s", config.active_window_secs);
    eprintln!("  Top-N: {}", config.top_n);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
