// Airport Security Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/airport-security-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/airport-security-simulator --arrival-rate 40 --horizon 480 --verbose
// ```

use airport_security_simulator::simulation::{LoggingConfig, StaffingSweep, SweepReport};
use airport_security_simulator::types::config::CliArgs;
use airport_security_simulator::types::SimulationConfig;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulationConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Airport Security Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    // Print startup banner and configuration
    print_startup_banner(&config);

    // Build and run the staffing sweep
    let sweep = match StaffingSweep::new(config.clone()) {
        Ok(sweep) => sweep,
        Err(e) => {
            error!("Failed to initialize sweep: {}", e);
            process::exit(1);
        }
    };

    info!("Starting staffing sweep over {} configurations", config.sweep_size());
    eprintln!("Evaluating {} staffing configurations...", config.sweep_size());

    let report = match sweep.run() {
        Ok(report) => report,
        Err(e) => {
            error!("Sweep failed: {}", e);
            process::exit(1);
        }
    };

    print_sweep_report(&config, &report);

    // Write the full report to disk if requested
    if let Some(path) = &config.results_output {
        if let Err(e) = report.save_to_file(path) {
            error!("Failed to write results file: {}", e);
            process::exit(1);
        }
        eprintln!("Full results written to: {}", path);
    }

    info!("Airport Security Simulator completed successfully");
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Airport Security Simulator");
    eprintln!("==========================");
    eprintln!("Staffing analysis for a two-stage security checkpoint");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Arrival Rate: {} passengers/min", config.arrival_rate);
    eprintln!("  Mean ID Check Time: {} min", config.mean_id_check_time);
    eprintln!("  Scan Time Window: {} - {} min", config.min_scan_time, config.max_scan_time);
    eprintln!("  Simulation Horizon: {} min", config.horizon);
    eprintln!("  Target Average System Time: {} min", config.target_avg_time);
    eprintln!("  ID Checkers: {} - {}", config.min_id_checkers, config.max_id_checkers);
    eprintln!("  Scanners: {} - {}", config.min_scanners, config.max_scanners);
    eprintln!("  Random Seed: {}", config.seed);
    eprintln!();
}

/// Print the sweep outcome: per-configuration results, viable
/// configurations, and the staffing recommendation.
fn print_sweep_report(config: &SimulationConfig, report: &SweepReport) {
    eprintln!();
    eprintln!("Sweep Results:");
    eprintln!("==============");
    for outcome in &report.evaluated {
        match &outcome.statistics {
            Some(stats) => eprintln!(
                "  {} checkers, {} scanners: avg {:.2} min, max {:.2} min ({} completed)",
                outcome.id_checkers,
                outcome.scanners,
                stats.average_system_time,
                stats.max_system_time,
                stats.completed
            ),
            None => eprintln!(
                "  {} checkers, {} scanners: no passengers completed",
                outcome.id_checkers, outcome.scanners
            ),
        }
    }

    eprintln!();
    if report.solutions.is_empty() {
        eprintln!(
            "No configuration achieved an average system time under {} minutes.",
            config.target_avg_time
        );
        return;
    }

    eprintln!("Configurations meeting the {} minute target:", config.target_avg_time);
    for solution in &report.solutions {
        eprintln!(
            "  {} checkers, {} scanners ({} staff): avg {:.2} min",
            solution.id_checkers, solution.scanners, solution.total_staff,
            solution.average_system_time
        );
    }

    if let Some(best) = report.best_solution() {
        eprintln!();
        eprintln!("Recommended Staffing:");
        eprintln!("  ID Checkers: {}", best.id_checkers);
        eprintln!("  Scanners: {}", best.scanners);
        eprintln!("  Total Staff: {}", best.total_staff);
        eprintln!("  Average System Time: {:.2} min", best.average_system_time);
        eprintln!("  Max System Time: {:.2} min", best.max_system_time);
    }
}
