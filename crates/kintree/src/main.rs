//! `kintr` - CLI for kintree
//!
//! This binary provides the command-line interface for maintaining a JSON
//! family tree document: adding person records interactively and inspecting
//! the stored tree.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::Context;
use clap::Parser;

use kintree::cli::{Cli, Command, ConfigCommand, ListCommand, ShowCommand};
use kintree::{init_logging, Config, Person, Prompter, TreeStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Resolve the tree document path: --file beats configuration
    let tree_path = cli.file.clone().unwrap_or_else(|| config.tree_path());

    // Execute the command; plain `kintr` runs the add flow
    match cli.command.unwrap_or(Command::Add) {
        Command::Add => handle_add(&tree_path),
        Command::List(list_cmd) => handle_list(&tree_path, &list_cmd),
        Command::Show(show_cmd) => handle_show(&tree_path, &show_cmd),
        Command::Status(status_cmd) => handle_status(&tree_path, status_cmd.json),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_add(tree_path: &Path) -> anyhow::Result<()> {
    let mut store = TreeStore::open(tree_path)
        .with_context(|| format!("could not load {}", tree_path.display()))?;

    let mut prompter = Prompter::stdio();
    let person = prompter.collect_person().context("failed to read input")?;
    let full_name = person.full_name();

    store.tree_mut().append(person);
    println!("\nAdded '{full_name}' to the family tree.");

    // A failed save is reported rather than propagated; the document on
    // disk is left as it was.
    match store.save() {
        Ok(()) => println!("Family tree data saved to '{}'.", store.path().display()),
        Err(e) => eprintln!("Error saving file: {e}"),
    }
    Ok(())
}

fn handle_list(tree_path: &Path, cmd: &ListCommand) -> anyhow::Result<()> {
    let store = TreeStore::open(tree_path)?;
    let people: Vec<&Person> = store
        .tree()
        .people()
        .iter()
        .filter(|p| !cmd.alive || p.alive)
        .collect();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&people)?);
    } else if people.is_empty() {
        println!("No people recorded in {}", tree_path.display());
    } else {
        for person in people {
            println!(
                "{:<16} {} {} ({})",
                person.id,
                person.first_name,
                person.last_name,
                if person.alive { "alive" } else { "deceased" }
            );
        }
    }
    Ok(())
}

fn handle_show(tree_path: &Path, cmd: &ShowCommand) -> anyhow::Result<()> {
    let store = TreeStore::open(tree_path)?;
    let Some(person) = store.tree().person(&cmd.id) else {
        anyhow::bail!("no person with id '{}' in {}", cmd.id, tree_path.display());
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(person)?);
    } else {
        println!("{} ({})", person.full_name(), person.id);
        println!("  Alive:          {}", person.alive);
        println!("  Gender:         {}", person.gender);
        println!("  Parents:        {}", join_ids(&person.parents));
        println!("  Spouses:        {}", join_ids(&person.spouses));
        println!("  Children:       {}", join_ids(&person.children));
        println!("  Birth family:   {}", person.birth_family_id);
        println!("  Current family: {}", person.current_family_id);
    }
    Ok(())
}

fn handle_status(tree_path: &Path, json: bool) -> anyhow::Result<()> {
    let store = TreeStore::open(tree_path)?;
    let stats = store.stats();

    if json {
        let status = serde_json::json!({
            "tree_path": tree_path,
            "total_people": stats.total_people,
            "alive_people": stats.alive_people,
            "file_size_bytes": stats.file_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("kintr status");
        println!("------------");
        println!("Document:   {}", tree_path.display());
        println!("People:     {}", stats.total_people);
        println!("Alive:      {}", stats.alive_people);
        println!("File size:  {} bytes", stats.file_size_bytes);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Tree document: {}", config.tree_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { config_file } => {
            let path = config_file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn join_ids(ids: &[String]) -> String {
    if ids.is_empty() {
        "-".to_string()
    } else {
        ids.join(", ")
    }
}
