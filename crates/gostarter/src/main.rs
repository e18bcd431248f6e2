//! gostarter CLI - Project scaffolding for Go starter projects

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use gostarter_core::tui::CreateArgs;
use gostarter_core::{ProjectType, Settings};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "gostarter")]
#[command(about = "CLI for scaffolding Go starter projects")]
#[command(version)]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project scaffold
    Create(CliCreateArgs),
    /// List the supported project types
    Types,
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Name of the project (also its directory and Go module path)
    pub name: Option<String>,

    /// Type of application you want to build (cli, web, api); unknown values use cli
    #[arg(short = 't', long = "type")]
    pub project_type: Option<String>,

    /// Directory to create the project in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Print the files that would be created without writing anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the Go toolchain check
    #[arg(long = "skip-go-check")]
    pub skip_go_check: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            project_type: args.project_type,
            directory: args.directory,
            dry_run: args.dry_run,
            skip_go_check: args.skip_go_check,
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Warnings only by default so log lines don't interleave with the TUI
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_types() {
    println!("{}", "Project types".cyan().bold());
    println!();
    for project_type in ProjectType::ALL {
        let marker = if project_type == ProjectType::DEFAULT {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {:<4} {}{}",
            "->".blue(),
            project_type.identifier().green(),
            project_type.description(),
            marker
        );
    }
    println!();
    println!(
        "Any other value uses the {} type.",
        ProjectType::DEFAULT.identifier()
    );
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.verbose, args.quiet);

    match args.command {
        Some(Command::Create(create_args)) => {
            let settings = Settings::from_env();
            let result = gostarter_core::run(create_args.into(), &settings);

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::Types) => {
            print_types();
            Ok(())
        }
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}
