//! Command handlers
//!
//! Each handler turns parsed arguments plus the loaded [`Session`] into a
//! use case call and reports the outcome.

pub mod deploy;
pub mod init;
pub mod status;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use revship::application::DEFAULT_REVISION;
use revship::config::{Config, ConfigWarning};
use revship::domain::services::DEFAULT_MARKER_PATH;
use revship::presentation::Cli;
use revship::ui::primitives::{ColoredText, Icon};
use revship::ui::UiContext;
use revship::GitRepository;

/// Repository, configuration and output settings shared by every command
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
    pub repo: GitRepository,
    /// Repository root; relative additional-file paths resolve against it
    pub workdir: PathBuf,
}

impl Session {
    /// Open the repository around `--repo` and load its configuration
    ///
    /// `local_path` from the command line wins over `[deploy] local_path`.
    pub fn open(cli: &Cli, local_path: Option<&Path>) -> Result<Self> {
        let repo = GitRepository::discover(&cli.repo).with_context(|| {
            format!("{} is not inside a git repository", cli.repo.display())
        })?;
        let workdir = repo
            .workdir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cli.repo.clone());

        let (config, warnings) =
            Config::load_or_default(Some(workdir.as_path()), cli.config.as_deref())?;
        let ui = UiContext::new(cli.json, cli.verbose, cli.quiet, cli.color, &config);
        print_config_warnings(&ui, &warnings);

        let local_path = local_path
            .map(Path::to_path_buf)
            .or_else(|| config.deploy.local_path.clone());
        let repo = repo.with_local_path(local_path);

        Ok(Self {
            config,
            ui,
            repo,
            workdir,
        })
    }

    /// Target spec from the command line, else from config/environment
    pub fn target_spec<'a>(&'a self, cli_target: Option<&'a str>) -> Option<&'a str> {
        cli_target.or(self.config.remote.target.as_deref())
    }

    pub fn marker_path(&self, cli_path: Option<&str>) -> String {
        cli_path
            .or(self.config.deploy.revision_file.as_deref())
            .unwrap_or(DEFAULT_MARKER_PATH)
            .to_string()
    }

    pub fn revision_ref(&self, cli_revision: Option<&str>) -> String {
        cli_revision
            .or(self.config.deploy.revision.as_deref())
            .unwrap_or(DEFAULT_REVISION)
            .to_string()
    }
}

fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        let hint = warning
            .suggestion
            .as_ref()
            .map(|s| format!(" (did you mean '{}'?)", s))
            .unwrap_or_default();
        eprintln!(
            "{} {} unknown config key '{}'{}",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::dim(location).render(ui.color),
            warning.key,
            hint
        );
    }
}
