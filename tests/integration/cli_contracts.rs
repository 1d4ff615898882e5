use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use notes_store::config::{NotesConfig, PersistenceBackend};
use notes_store::root::{FixedPicker, MemoryRootStorage};
use notes_store::tooling::cli::{Cli, CliContext, Commands, RootCommands};
use tempfile::TempDir;

fn context_in(temp: &TempDir) -> CliContext {
    let config = NotesConfig {
        default_root: temp.path().join("notes"),
        ..NotesConfig::default()
    };
    CliContext::with_storage(config, Arc::new(MemoryRootStorage::new()), None).unwrap()
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["notes", "init"],
        vec!["notes", "create", "daily/today", "--content", "hi"],
        vec!["notes", "read", "daily/today.mk"],
        vec!["notes", "save", "a.mk", "--content", ""],
        vec!["notes", "mkdir", "daily"],
        vec!["notes", "rename", "a.mk", "b.mk"],
        vec!["notes", "delete", "daily"],
        vec!["notes", "list"],
        vec!["notes", "list", "daily", "--format", "json"],
        vec!["notes", "--root", "/tmp/n", "root", "show"],
        vec!["notes", "root", "set", "/tmp/n"],
        vec!["notes", "root", "select"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_save_without_content() {
    assert!(Cli::try_parse_from(["notes", "save", "a.mk"]).is_err());
}

#[test]
fn init_create_list_json_contract() {
    let temp = TempDir::new().unwrap();
    let cli = context_in(&temp);

    let empty = cli
        .execute(&Commands::List {
            directory: None,
            format: "json".to_string(),
        });
    assert!(empty.is_err(), "root does not exist before init");

    cli.execute(&Commands::Init).unwrap();
    cli.execute(&Commands::Create {
        path: PathBuf::from("hello"),
        content: "world".to_string(),
    })
    .unwrap();

    let output = cli
        .execute(&Commands::List {
            directory: None,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["empty"], serde_json::Value::Bool(false));
    assert_eq!(parsed["entries"], serde_json::json!(["hello.mk"]));

    let content = cli
        .execute(&Commands::Read {
            path: PathBuf::from("hello.mk"),
        })
        .unwrap();
    assert_eq!(content, "world");
}

#[test]
fn list_rejects_unknown_format() {
    let temp = TempDir::new().unwrap();
    let cli = context_in(&temp);
    cli.execute(&Commands::Init).unwrap();
    assert!(cli
        .execute(&Commands::List {
            directory: None,
            format: "yaml".to_string(),
        })
        .is_err());
}

#[test]
fn root_select_cancel_reports_unchanged_root() {
    let temp = TempDir::new().unwrap();
    let cli = context_in(&temp);
    let before = cli.vault().root();

    let output = cli
        .execute_with_picker(
            &Commands::Root {
                command: RootCommands::Select,
            },
            &FixedPicker::cancelled(),
        )
        .unwrap();
    assert!(output.contains("cancelled"));
    assert_eq!(cli.vault().root(), before);
}

#[test]
fn root_override_is_used_without_persisting() {
    let temp = TempDir::new().unwrap();
    let storage = Arc::new(MemoryRootStorage::new());
    let override_root = temp.path().join("override");
    let cli = CliContext::with_storage(
        NotesConfig::default(),
        storage,
        Some(override_root.clone()),
    )
    .unwrap();

    let shown = cli
        .execute(&Commands::Root {
            command: RootCommands::Show,
        })
        .unwrap();
    assert_eq!(PathBuf::from(shown), override_root);
}

#[test]
fn context_from_loaded_config_uses_configured_state_file() {
    let temp = TempDir::new().unwrap();
    let default_root = temp.path().join("notes");
    let chosen = temp.path().join("chosen");
    let mut config = NotesConfig {
        default_root: default_root.clone(),
        ..NotesConfig::default()
    };
    config.persistence.backend = PersistenceBackend::File;
    config.persistence.state_file = Some(temp.path().join("state.toml"));

    let cli = CliContext::from_config(config.clone(), None).unwrap();
    let show = Commands::Root {
        command: RootCommands::Show,
    };
    assert_eq!(PathBuf::from(cli.execute(&show).unwrap()), default_root);
    cli.execute(&Commands::Root {
        command: RootCommands::Set {
            path: chosen.clone(),
        },
    })
    .unwrap();

    // Logging is built from the same config before the next context exists.
    let parsed = Cli::try_parse_from(["notes", "--log-level", "debug", "root", "show"]).unwrap();
    assert_eq!(parsed.logging_config(&config.logging).level, "debug");

    let reloaded = CliContext::from_config(config, parsed.root.clone()).unwrap();
    assert_eq!(PathBuf::from(reloaded.execute(&show).unwrap()), chosen);
}
