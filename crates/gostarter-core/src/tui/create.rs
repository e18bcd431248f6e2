//! Charm-style CLI output for the create command using cliclack

use crate::config::Settings;
use crate::error::Error;
use crate::generator::{GenerationReport, Generator};
use crate::runtime::check::{self, ToolchainStatus};
use crate::templates::manifest::select_manifest;
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; required, but checked here rather than by the parser
    pub name: Option<String>,

    /// Project type identifier; falls back to the environment, then `default`
    pub project_type: Option<String>,

    /// Directory to create the project in
    pub directory: Option<PathBuf>,

    /// Print the plan instead of writing files
    pub dry_run: bool,

    /// Skip the Go toolchain check
    pub skip_go_check: bool,
}

/// Run the create command.
///
/// Generation errors are printed, not returned: the process exit status is
/// the same whether or not the project was created. Only terminal I/O
/// errors propagate.
pub fn run(args: CreateArgs, settings: &Settings) -> Result<()> {
    cliclack::intro("gostarter")?;

    let Some(name) = args.name.as_deref() else {
        cliclack::log::error(format!("Error: {}", Error::NameRequired))?;
        cliclack::outro_cancel("Project was not created")?;
        return Ok(());
    };

    let requested_type = settings.project_type(args.project_type.as_deref());
    let generator = Generator::new().base_dir(settings.base_dir(args.directory.clone()));

    cliclack::log::info(format!("Creating project: {}", name))?;
    cliclack::log::info(format!("Type: {}", requested_type))?;

    if args.dry_run {
        return print_plan(&generator, name, &requested_type);
    }

    let report = match create_project(&generator, name, &requested_type)? {
        Some(report) => report,
        None => {
            cliclack::outro_cancel("Project was not created")?;
            return Ok(());
        }
    };

    if args.skip_go_check {
        cliclack::log::info("Skipping Go toolchain check")?;
    } else {
        check_toolchain()?;
    }

    print_next_steps(&report)?;

    Ok(())
}

fn print_plan(generator: &Generator, name: &str, requested_type: &str) -> Result<()> {
    let plan = select_manifest(requested_type).plan(name);
    let yaml = plan.to_yaml()?;

    cliclack::note(
        format!("Dry run: {}", generator.root_for(name).display()),
        yaml.trim_end(),
    )?;
    cliclack::outro("No files were written")?;

    Ok(())
}

/// Returns `None` when generation failed and the error was shown
fn create_project(
    generator: &Generator,
    name: &str,
    requested_type: &str,
) -> Result<Option<GenerationReport>> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match generator.generate(name, requested_type) {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files in {}",
                report.files.len(),
                report.root.display()
            ));
            Ok(Some(report))
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            cliclack::log::error(format!("Error: {}", e))?;
            Ok(None)
        }
    }
}

fn check_toolchain() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking Go toolchain...");

    match check::check_toolchain() {
        ToolchainStatus::Ready(info) => {
            spinner.stop(format!(
                "Detected {} ({})",
                info.name,
                info.version.as_deref().unwrap_or("unknown")
            ));
        }
        ToolchainStatus::Outdated { info, warning } => {
            spinner.stop(format!(
                "Detected {} ({})",
                info.name,
                info.version.as_deref().unwrap_or("unknown")
            ));
            cliclack::log::warning(&warning)?;
        }
        ToolchainStatus::Missing => {
            spinner.stop("Go not installed");
            cliclack::log::warning("Install Go from https://go.dev/dl/ to build this project")?;
        }
    }

    Ok(())
}

fn print_next_steps(report: &GenerationReport) -> Result<()> {
    let steps = report.project_type.next_steps(&report.root);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
