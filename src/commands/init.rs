//! Init command implementation
//!
//! Sets up linting for a project in three steps:
//! 1. Compose the lint configuration from the selected features
//! 2. Write the configuration and the ignore-pattern file
//! 3. Merge the conventional lint scripts into the project manifest
//!
//! Step 3 failing leaves the artifacts from step 2 in place; a missing or
//! unreadable manifest aborts with an error naming it rather than silently
//! skipping the script merge.

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::fs;
use std::path::PathBuf;

use lintstrap::config::{self, LintConfig};
use lintstrap::features::{self, Feature};
use lintstrap::manifest;
use lintstrap::output::{emoji, OutputConfig};
use lintstrap::overlays;
use lintstrap::suggestions;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Features to enable, in overlay application order
    /// (react, flow, webpack, browser)
    #[arg(value_name = "FEATURE")]
    pub features: Vec<String>,

    /// Ask about each feature instead of reading them from arguments
    #[arg(short, long, conflicts_with = "features")]
    pub interactive: bool,

    /// Project directory (defaults to the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Show what would be written without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Overwrite an existing lint configuration
    #[arg(short, long)]
    pub force: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `init` command.
pub fn execute(args: InitArgs, output: &OutputConfig) -> Result<()> {
    let dir = match args.dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let selected = if args.interactive {
        prompt_features()?
    } else {
        features::parse_features(&args.features)?
    };

    if !args.quiet {
        println!("{} Setting up linting", emoji(output, "🔧", "[INIT]"));
        if args.dry_run {
            println!(
                "{} DRY RUN MODE - no files will be written",
                emoji(output, "🔎", "[DRY]")
            );
        }
        if !selected.is_empty() {
            let names: Vec<&str> = selected.iter().map(|f| f.name()).collect();
            println!("   features: {}", names.join(", "));
        }
    }

    let composed = overlays::compose(LintConfig::base(), &selected);

    let config_path = dir.join(config::CONFIG_FILE_NAME);
    if config_path.exists() && !args.force {
        return Err(suggestions::config_exists(&config_path));
    }

    let rendered = composed.to_pretty_string()?;
    let ignore_path = dir.join(config::IGNORE_FILE_NAME);

    if args.dry_run {
        if !args.quiet {
            println!("Would write {}:", config_path.display());
            print!("{}", rendered);
        }
    } else {
        fs::write(&config_path, &rendered)?;
        if !args.quiet {
            println!("{} Wrote {}", emoji(output, "✅", "[OK]"), config_path.display());
        }

        if args.force || !ignore_path.exists() {
            fs::write(&ignore_path, config::IGNORE_TEMPLATE)?;
            if !args.quiet {
                println!("{} Wrote {}", emoji(output, "✅", "[OK]"), ignore_path.display());
            }
        } else if !args.quiet {
            println!("   keeping existing {}", ignore_path.display());
        }
    }

    merge_scripts(&dir, &args, output)?;

    if !args.quiet {
        println!();
        println!(
            "{} Install the lint toolchain:",
            emoji(output, "💡", "[HINT]")
        );
        println!(
            "   npm install --save-dev {}",
            features::dev_dependencies(&selected).join(" ")
        );
    }

    Ok(())
}

/// Ensure the conventional scripts exist in the project manifest, writing it
/// back only when something changed.
fn merge_scripts(dir: &std::path::Path, args: &InitArgs, output: &OutputConfig) -> Result<()> {
    let manifest_path = dir.join(manifest::MANIFEST_FILE_NAME);
    let (mut project, created) = manifest::acquire(&manifest_path).into_manifest(&manifest_path)?;

    let mut changed = created;
    for (name, command) in [
        (manifest::LINT_SCRIPT_NAME, manifest::LINT_SCRIPT_COMMAND),
        (manifest::TOOL_SCRIPT_NAME, manifest::TOOL_SCRIPT_COMMAND),
    ] {
        let inserted = project.ensure_script(name, command);
        changed |= inserted;
        if !args.quiet {
            if inserted {
                println!("   added script `{}`", name);
            } else {
                println!("   script `{}` already present, left untouched", name);
            }
        }
    }

    if changed && !args.dry_run {
        fs::write(&manifest_path, project.to_pretty_string()?)?;
        if !args.quiet {
            let verb = if created { "Created" } else { "Updated" };
            println!(
                "{} {} {}",
                emoji(output, "✅", "[OK]"),
                verb,
                manifest_path.display()
            );
        }
    }

    Ok(())
}

/// Ask about each feature in turn, in the declared order.
fn prompt_features() -> Result<Vec<Feature>> {
    let theme = ColorfulTheme::default();
    let mut selected = Vec::new();

    for feature in Feature::ALL {
        let enabled = Confirm::with_theme(&theme)
            .with_prompt(feature.prompt())
            .default(false)
            .interact()?;
        if enabled {
            selected.push(feature);
        }
    }

    Ok(selected)
}
