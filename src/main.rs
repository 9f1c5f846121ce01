use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use semver_update::cli::{run_update_workflow, UpdateWorkflowArgs, WorkflowResult};
use semver_update::config;
use semver_update::descriptor::{MemoryDescriptor, VersionFile};
use semver_update::domain::{LabelKind, NormalVersion};
use semver_update::ui;
use semver_update::Strategy;

#[derive(Parser)]
#[command(
    name = "semver-update",
    version,
    about = "Compute and persist the next semantic version of a project"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        help = "Version file to update (default from config: VERSION)"
    )]
    file: Option<String>,

    #[arg(
        long,
        global = true,
        conflicts_with = "file",
        help = "Operate on this version instead of a file and print the result"
    )]
    current: Option<String>,

    #[arg(long, global = true, help = "Label the updated version as a SNAPSHOT")]
    snapshot: bool,

    #[arg(long, global = true, help = "The unit is a module of a parent project")]
    module: bool,

    #[arg(long, global = true, help = "Process the unit even if it is a module")]
    process_module: bool,

    #[arg(long, global = true, help = "Preview the new version without writing it")]
    dry_run: bool,

    #[command(subcommand)]
    goal: Goal,
}

#[derive(Subcommand)]
enum Goal {
    /// Verify the current version is a valid SemVer
    VerifyCurrent {
        #[arg(long, help = "Print the version to stdout if valid")]
        force_stdout: bool,
    },
    /// Strip all labels, leaving the normal version numbers
    FinalizeCurrent,
    /// Increment the major version by one
    IncrementMajor,
    /// Increment the minor version by one
    IncrementMinor,
    /// Increment the patch version by one
    IncrementPatch,
    /// Increment the major version to the current UTC date
    CalendarMajor,
    /// Increment the minor version to the current UTC date
    CalendarMinor,
    /// Increment the patch version to the current UTC date
    CalendarPatch,
    /// Increment the pre-release label, or set it
    UpdatePreRelease {
        #[arg(long, help = "Label to set instead of incrementing")]
        set: Option<String>,
    },
    /// Increment the build metadata label (deprecated), or set it
    UpdateBuildMetadata {
        #[arg(long, help = "Label to set instead of incrementing")]
        set: Option<String>,
    },
    /// Merge with another version, incrementing it by one
    Merge {
        #[arg(long, help = "The other SemVer to merge with")]
        semver: String,
    },
    /// Merge with another version, incrementing it to the current UTC date
    MergeCalendar {
        #[arg(long, help = "The other SemVer to merge with")]
        semver: String,
    },
}

impl Goal {
    fn into_strategy(self) -> Strategy {
        match self {
            Goal::VerifyCurrent { .. } => Strategy::VerifyCurrent,
            Goal::FinalizeCurrent => Strategy::FinalizeCurrent,
            Goal::IncrementMajor => Strategy::Increment(NormalVersion::Major),
            Goal::IncrementMinor => Strategy::Increment(NormalVersion::Minor),
            Goal::IncrementPatch => Strategy::Increment(NormalVersion::Patch),
            Goal::CalendarMajor => Strategy::Calendar(NormalVersion::Major),
            Goal::CalendarMinor => Strategy::Calendar(NormalVersion::Minor),
            Goal::CalendarPatch => Strategy::Calendar(NormalVersion::Patch),
            Goal::UpdatePreRelease { set } => Strategy::UpdateLabel {
                kind: LabelKind::PreRelease,
                set,
            },
            Goal::UpdateBuildMetadata { set } => Strategy::UpdateLabel {
                kind: LabelKind::BuildMetadata,
                set,
            },
            Goal::Merge { semver } => Strategy::Merge { other: semver },
            Goal::MergeCalendar { semver } => Strategy::MergeCalendar { other: semver },
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let force_stdout = match args.goal {
        Goal::VerifyCurrent { force_stdout } => force_stdout || config.behavior.force_stdout,
        _ => false,
    };

    let workflow_args = UpdateWorkflowArgs {
        strategy: args.goal.into_strategy(),
        snapshot: args.snapshot || config.behavior.snapshot,
        is_module: args.module,
        process_module: args.process_module || config.behavior.process_module,
        dry_run: args.dry_run,
    };
    let now = chrono::Utc::now();

    if let Some(current) = args.current {
        let mut descriptor = MemoryDescriptor::new(current);
        let result = run_update_workflow(&workflow_args, &mut descriptor, &now)?;
        match &result {
            WorkflowResult::Skipped(warning) => ui::display_boundary_warning(warning),
            WorkflowResult::Verified(_) if !force_stdout => {}
            WorkflowResult::Verified(version) | WorkflowResult::Unchanged(version) => {
                println!("{}", version)
            }
            WorkflowResult::Updated { updated, .. } => println!("{}", updated),
        }
        return Ok(());
    }

    let path = args.file.unwrap_or(config.version_file);
    let mut descriptor = VersionFile::new(&path);
    let result = run_update_workflow(&workflow_args, &mut descriptor, &now)
        .with_context(|| format!("Goal '{}' failed for '{}'", workflow_args.strategy.goal(), path))?;
    ui::display_result(&result, force_stdout);

    Ok(())
}
