//! Command dispatch

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::tree_view;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::TreeBuilder;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::StdConsole;
use crate::infrastructure::InfraError;

/// Execute the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { dataset }) => cmd_tree(dataset),
        Some(Commands::Stats { dataset }) => cmd_stats(dataset),
        Some(Commands::Config { command }) => cmd_config(command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => match &cli.dataset {
            Some(dataset) => cmd_play(dataset),
            None => Err(CliError::Usage(
                "no dataset given (try `akinator <DATASET>` or --help)".to_string(),
            )),
        },
    }
}

/// Container with settings layered for `dataset`'s directory.
fn container_for(dataset: &Path) -> CliResult<ServiceContainer> {
    let settings = Settings::load(dataset.parent())?;
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings))
}

#[instrument]
fn cmd_play(dataset: &Path) -> CliResult<()> {
    let container = container_for(dataset)?;
    let mut console = StdConsole::stdio();
    let outcome = container.game_service().run(dataset, &mut console)?;
    debug!("outcome: {:?}", outcome);
    Ok(())
}

#[instrument]
fn cmd_tree(dataset: &Path) -> CliResult<()> {
    let container = container_for(dataset)?;
    let tree = container.game_service().build_tree(dataset)?;
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", tree_view::render(&tree))
        .map_err(|e| InfraError::io("write tree", e))?;
    Ok(())
}

#[instrument]
fn cmd_stats(dataset: &Path) -> CliResult<()> {
    let container = container_for(dataset)?;
    let service = container.game_service();
    let characters = service.load_characters(dataset)?;
    let tree = TreeBuilder::new()
        .build(&characters)
        .map_err(ApplicationError::from)?;
    let stats = tree.stats();

    output::header(&dataset.display());
    output::stat("characters", &characters.len());
    output::stat("leaves", &stats.leaves);
    output::stat("questions", &stats.internal);
    output::stat("shortest path", &stats.min_depth);
    output::stat("longest path", &stats.max_depth);
    output::stat("first question", &tree);
    Ok(())
}

fn cmd_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show { dataset } => {
            let dir = dataset.as_deref().and_then(Path::parent);
            let settings = Settings::load(dir)?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init { global, force } => {
            let path = if *global {
                global_config_path().ok_or_else(|| ApplicationError::Config {
                    message: "cannot determine global config directory".to_string(),
                })?
            } else {
                local_config_path(Path::new("."))
            };
            init_config(&path, *force)
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("global config directory unavailable"),
            }
            output::action(
                "local",
                &local_config_path(Path::new("<dataset_dir>")).display(),
            );
            Ok(())
        }
    }
}

fn init_config(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidArgs(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
    }
    std::fs::write(path, Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
