//! CLI Tooling
//!
//! Command-line interface over [`NoteVault`]. Every command resolves its paths
//! against the current notes root.

use crate::config::{ConfigLoader, NotesConfig};
use crate::error::{StoreError, StoreResult};
use crate::logging::LoggingConfig;
use crate::root::{DirectoryPicker, PromptPicker, RootSelection, RootState, RootStorage};
use crate::tooling::format::{format_listing_json, format_listing_text};
use crate::vault::NoteVault;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Notes CLI - sandboxed markdown note storage
#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Create, read, and organize markdown notes under a single root directory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Notes root for this invocation only (not persisted)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}

impl Cli {
    /// Apply command-line logging flags on top of the configured values.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the notes root if it does not exist
    Init,
    /// Create a note (".mk" is appended when missing)
    Create {
        /// Note path relative to the root
        path: PathBuf,
        /// Initial content
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Print a note's content
    Read {
        /// Note path relative to the root
        path: PathBuf,
    },
    /// Overwrite a note's content
    Save {
        /// Note path relative to the root
        path: PathBuf,
        /// New content
        #[arg(long)]
        content: String,
    },
    /// Create a folder and any missing parents
    Mkdir {
        /// Folder path relative to the root
        path: PathBuf,
    },
    /// Rename or move a note or folder
    Rename {
        /// Existing path
        from: PathBuf,
        /// New path (must not exist)
        to: PathBuf,
    },
    /// Delete a note, or a folder with all of its contents
    Delete {
        /// Path relative to the root
        path: PathBuf,
    },
    /// List notes and folders
    List {
        /// Folder to list (defaults to the root)
        directory: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show or change the notes root
    Root {
        #[command(subcommand)]
        command: RootCommands,
    },
}

#[derive(Subcommand)]
pub enum RootCommands {
    /// Print the current root
    Show,
    /// Set and persist a new root
    Set {
        /// New root directory
        path: PathBuf,
    },
    /// Choose a new root interactively
    Select,
}

/// CLI context: configuration plus the vault commands run against.
pub struct CliContext {
    config: NotesConfig,
    vault: NoteVault,
}

impl CliContext {
    /// Load configuration and the persisted root.
    pub fn new(root: Option<PathBuf>, config_path: Option<PathBuf>) -> StoreResult<Self> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load()?,
        };
        Self::from_config(config, root)
    }

    /// Build a context from configuration that is already loaded.
    pub fn from_config(config: NotesConfig, root: Option<PathBuf>) -> StoreResult<Self> {
        let storage = config.persistence.open_storage()?;
        Self::with_storage(config, storage, root)
    }

    /// Build a context over an explicit storage backend.
    pub fn with_storage(
        config: NotesConfig,
        storage: Arc<dyn RootStorage>,
        root: Option<PathBuf>,
    ) -> StoreResult<Self> {
        let state = match root {
            Some(root) => RootState::with_root(root, storage),
            None => RootState::init(storage, &config.default_root)?,
        };
        Ok(Self {
            config,
            vault: NoteVault::new(Arc::new(state)),
        })
    }

    pub fn config(&self) -> &NotesConfig {
        &self.config
    }

    pub fn vault(&self) -> &NoteVault {
        &self.vault
    }

    /// Execute a command, prompting on the terminal for `root select`.
    pub fn execute(&self, command: &Commands) -> StoreResult<String> {
        self.execute_with_picker(command, &PromptPicker::new())
    }

    pub fn execute_with_picker(
        &self,
        command: &Commands,
        picker: &dyn DirectoryPicker,
    ) -> StoreResult<String> {
        match command {
            Commands::Init => {
                let root = self.vault.root();
                if self.vault.bootstrap()? {
                    Ok(format!("Created notes root at {}", root.display()))
                } else {
                    Ok(format!("Notes root already exists at {}", root.display()))
                }
            }
            Commands::Create { path, content } => {
                let created = self.vault.create_note(path, content)?;
                Ok(format!("Created {}", created.display()))
            }
            Commands::Read { path } => self.vault.read_note(path),
            Commands::Save { path, content } => {
                let saved = self.vault.save_note(path, content)?;
                Ok(format!("Saved {}", saved.display()))
            }
            Commands::Mkdir { path } => {
                let created = self.vault.create_folder(path)?;
                Ok(format!("Created folder {}", created.display()))
            }
            Commands::Rename { from, to } => {
                let moved = self.vault.rename(from, to)?;
                Ok(format!("Renamed {} -> {}", from.display(), moved.display()))
            }
            Commands::Delete { path } => {
                self.vault.delete_item(path)?;
                Ok(format!("Deleted {}", path.display()))
            }
            Commands::List { directory, format } => {
                let directory = directory.clone().unwrap_or_default();
                let outcome = self.vault.list(&directory)?;
                let shown = if directory.as_os_str().is_empty() {
                    self.vault.root()
                } else {
                    directory
                };
                match format.as_str() {
                    "json" => Ok(format_listing_json(&shown, &outcome)),
                    "text" => Ok(format_listing_text(&shown, &outcome)),
                    other => Err(StoreError::InvalidArgument(format!(
                        "Invalid format: {} (must be 'text' or 'json')",
                        other
                    ))),
                }
            }
            Commands::Root { command } => self.execute_root(command, picker),
        }
    }

    fn execute_root(
        &self,
        command: &RootCommands,
        picker: &dyn DirectoryPicker,
    ) -> StoreResult<String> {
        match command {
            RootCommands::Show => Ok(self.vault.root().display().to_string()),
            RootCommands::Set { path } => {
                let root = self.vault.set_root(path)?;
                info!(root = %root.display(), "Root set from CLI");
                Ok(format!("Notes root set to {}", root.display()))
            }
            RootCommands::Select => match self.vault.select_root(picker)? {
                RootSelection::Changed(root) => {
                    Ok(format!("Notes root set to {}", root.display()))
                }
                RootSelection::Unchanged(root) => Ok(format!(
                    "Selection cancelled; notes root remains {}",
                    root.display()
                )),
            },
        }
    }
}
