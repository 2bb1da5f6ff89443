//! snipman - a terminal code snippet manager
//!
//! Stores snippets in a TOML file and renders them with incremental,
//! rule-table based syntax highlighting.

mod commands;
mod config;
mod error;
mod render;
mod store;
mod syntax;

use std::env;
use std::process;

use error::{Result, SnipError};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let command = match args.first() {
        Some(c) => c.as_str(),
        None => {
            print_usage();
            return Ok(());
        }
    };
    let rest = &args[1..];

    match command {
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" => {
            print_version();
            Ok(())
        }
        "add" => commands::add(rest),
        "list" | "ls" => commands::list(rest),
        "show" => commands::show(rest),
        "edit" => commands::edit(rest),
        "rm" | "delete" => commands::remove(rest),
        "preview" => commands::preview(rest),
        "languages" => commands::languages(),
        "config" => commands::config(rest),
        other => Err(SnipError::Usage(format!(
            "unknown command: {} (try --help)",
            other
        ))),
    }
}

fn print_usage() {
    println!("snipman {} - terminal code snippet manager", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: snipman <command> [options]");
    println!();
    println!("Commands:");
    println!("  add <title> [-l LANG] [-t TAGS] [-d DESC] [-f FILE]");
    println!("                 Add a snippet (code from FILE or stdin)");
    println!("  list [-s TEXT] [--tag TAG] [-l LANG]");
    println!("                 List snippets, most recently updated first");
    println!("  show <id> [--plain]");
    println!("                 Show a snippet with syntax highlighting");
    println!("  edit <id> [--title T] [-l LANG] [-t TAGS] [-d DESC] [-f FILE]");
    println!("                 Update fields of a snippet");
    println!("  rm <id>        Delete a snippet");
    println!("  preview <file> [-l LANG]");
    println!("                 Highlight a file (language from extension)");
    println!("  languages      List known languages");
    println!("  config [KEY [VALUE]]");
    println!("                 Show, read, or write settings");
    println!();
    println!("Settings keys include editor/tab_size, display/time_format,");
    println!("editor/line_numbers_visible and syntax_colors/<group>.");
}

fn print_version() {
    println!("snipman {}", env!("CARGO_PKG_VERSION"));
}
