//! ext-preflight CLI entry point
//!
//! Pre-packaging integrity validation for editor extension projects.

use clap::Parser;
use ext_preflight::checks::get_all_checks;
use ext_preflight::cli::args::{Args, Command};
use ext_preflight::cli::output::get_formatter;
use ext_preflight::version::get_build_info;
use ext_preflight::{run_preflight, CheckCategory, PreflightConfig};

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Some(Command::Version) => {
            println!("{}", get_build_info());
            ExitCode::SUCCESS
        }
        Some(Command::List) => {
            print_check_list();
            ExitCode::SUCCESS
        }
        Some(Command::Check) | None => run_checks(&args),
    }
}

fn print_check_list() {
    println!("Available checks:");

    let catalog = get_all_checks();
    for category in [
        CheckCategory::Manifest,
        CheckCategory::Entry,
        CheckCategory::Library,
    ] {
        println!();
        println!("{} CHECKS:", category.to_string().to_uppercase());
        for check in catalog.iter().filter(|c| c.category == category) {
            println!("  {:<8} {}", check.id, check.description);
        }
    }
}

fn run_checks(args: &Args) -> ExitCode {
    let config = PreflightConfig::from_args(args);
    let report = run_preflight(&config);

    let formatter = get_formatter(args.format, args.no_color, args.verbose, args.quiet);
    println!("{}", formatter.format(&report));

    // Warnings are advisory: only a failed check makes the run fail
    if report.has_failures() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
