//! CLI subcommands
//!
//! Each subcommand parses its own flags in a simple loop, then works
//! against the snippet store, settings, and highlighter session.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{Result, SnipError};
use crate::render;
use crate::store::{SnippetStore, SnippetUpdate};
use crate::syntax::{language_for_extension, Session, LANGUAGE_NAMES};

/// Parsed flags for `add`
#[derive(Debug, Default, PartialEq)]
struct AddArgs {
    title: String,
    language: String,
    tags: String,
    description: String,
    file: Option<PathBuf>,
}

/// Parsed flags for `edit`
#[derive(Debug, Default)]
struct EditArgs {
    id: String,
    title: Option<String>,
    language: Option<String>,
    tags: Option<String>,
    description: Option<String>,
    file: Option<PathBuf>,
}

/// Parsed flags for `list`
#[derive(Debug, Default, PartialEq)]
struct ListArgs {
    search: String,
    tag: Option<String>,
    language: Option<String>,
}

/// Open the store at the default location
fn open_store() -> Result<SnippetStore> {
    let path = SnippetStore::default_path()
        .ok_or_else(|| SnipError::Usage("could not determine home directory".into()))?;
    SnippetStore::open(&path)
}

/// The value following a flag
fn value_for(args: &[String], index: &mut usize, flag: &str) -> Result<String> {
    *index += 1;
    args.get(*index)
        .cloned()
        .ok_or_else(|| SnipError::Usage(format!("{} requires a value", flag)))
}

fn parse_add(args: &[String]) -> Result<AddArgs> {
    let mut parsed = AddArgs {
        language: "text".to_string(),
        ..Default::default()
    };

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--language" | "-l" => parsed.language = value_for(args, &mut index, "--language")?,
            "--tags" | "-t" => parsed.tags = value_for(args, &mut index, "--tags")?,
            "--description" | "-d" => {
                parsed.description = value_for(args, &mut index, "--description")?
            }
            "--file" | "-f" => {
                parsed.file = Some(PathBuf::from(value_for(args, &mut index, "--file")?))
            }
            flag if flag.starts_with('-') => {
                return Err(SnipError::Usage(format!("unknown flag: {}", flag)));
            }
            title if parsed.title.is_empty() => parsed.title = title.to_string(),
            extra => {
                return Err(SnipError::Usage(format!("unexpected argument: {}", extra)));
            }
        }
        index += 1;
    }

    if parsed.title.is_empty() {
        return Err(SnipError::Usage("add requires a title".into()));
    }
    Ok(parsed)
}

/// Add a snippet; code comes from --file or stdin
pub fn add(args: &[String]) -> Result<()> {
    let parsed = parse_add(args)?;

    let code = match &parsed.file {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };

    let mut store = open_store()?;
    let id = store.create(
        &parsed.title,
        &code,
        &parsed.language,
        &parsed.tags,
        &parsed.description,
    )?;
    store.save()?;

    println!("added {}", id);
    Ok(())
}

fn parse_list(args: &[String]) -> Result<ListArgs> {
    let mut parsed = ListArgs::default();

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--search" | "-s" => parsed.search = value_for(args, &mut index, "--search")?,
            "--tag" | "-t" => parsed.tag = Some(value_for(args, &mut index, "--tag")?),
            "--language" | "-l" => {
                parsed.language = Some(value_for(args, &mut index, "--language")?)
            }
            other => return Err(SnipError::Usage(format!("unexpected argument: {}", other))),
        }
        index += 1;
    }

    Ok(parsed)
}

/// List snippets, optionally filtered
pub fn list(args: &[String]) -> Result<()> {
    let parsed = parse_list(args)?;
    let store = open_store()?;

    let hits = store.search(
        &parsed.search,
        parsed.tag.as_deref(),
        parsed.language.as_deref(),
    );

    if hits.is_empty() {
        println!("no snippets");
        return Ok(());
    }
    for (id, title) in hits {
        println!("{}  {}", id, title);
    }
    Ok(())
}

/// Show one snippet with highlighted code
pub fn show(args: &[String]) -> Result<()> {
    let mut plain = false;
    let mut id = None;
    for arg in args {
        match arg.as_str() {
            "--plain" | "-p" => plain = true,
            other if id.is_none() => id = Some(other.to_string()),
            other => return Err(SnipError::Usage(format!("unexpected argument: {}", other))),
        }
    }
    let id = id.ok_or_else(|| SnipError::Usage("show requires a snippet id".into()))?;

    let store = open_store()?;
    let snippet = store
        .get(&id)
        .ok_or_else(|| SnipError::SnippetNotFound(id.clone()))?;

    let settings = Settings::load();

    println!("{}", snippet.title);
    if !snippet.language.is_empty() {
        println!("language: {}", snippet.language);
    }
    if !snippet.tags.is_empty() {
        println!("tags: {}", snippet.tags);
    }
    if !snippet.description.is_empty() {
        println!("{}", snippet.description);
    }
    println!(
        "created {}  updated {}",
        render::format_timestamp(&snippet.created_at, settings.time_format),
        render::format_timestamp(&snippet.updated_at, settings.time_format),
    );
    println!();

    if plain {
        println!("{}", snippet.code);
    } else {
        let session = Session::new(&snippet.language, &settings);
        let mut out = io::stdout().lock();
        render::print_highlighted(&mut out, &snippet.code, &session, &settings)?;
        out.flush()?;
    }
    Ok(())
}

fn parse_edit(args: &[String]) -> Result<EditArgs> {
    let mut parsed = EditArgs::default();

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--title" => parsed.title = Some(value_for(args, &mut index, "--title")?),
            "--language" | "-l" => {
                parsed.language = Some(value_for(args, &mut index, "--language")?)
            }
            "--tags" | "-t" => parsed.tags = Some(value_for(args, &mut index, "--tags")?),
            "--description" | "-d" => {
                parsed.description = Some(value_for(args, &mut index, "--description")?)
            }
            "--file" | "-f" => {
                parsed.file = Some(PathBuf::from(value_for(args, &mut index, "--file")?))
            }
            flag if flag.starts_with('-') => {
                return Err(SnipError::Usage(format!("unknown flag: {}", flag)));
            }
            id if parsed.id.is_empty() => parsed.id = id.to_string(),
            extra => {
                return Err(SnipError::Usage(format!("unexpected argument: {}", extra)));
            }
        }
        index += 1;
    }

    if parsed.id.is_empty() {
        return Err(SnipError::Usage("edit requires a snippet id".into()));
    }
    Ok(parsed)
}

/// Update fields of an existing snippet
pub fn edit(args: &[String]) -> Result<()> {
    let parsed = parse_edit(args)?;

    let code = match &parsed.file {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    let mut store = open_store()?;
    store.update(
        &parsed.id,
        SnippetUpdate {
            title: parsed.title,
            code,
            language: parsed.language,
            tags: parsed.tags,
            description: parsed.description,
        },
    )?;
    store.save()?;

    println!("updated {}", parsed.id);
    Ok(())
}

/// Delete a snippet
pub fn remove(args: &[String]) -> Result<()> {
    let id = args
        .first()
        .ok_or_else(|| SnipError::Usage("rm requires a snippet id".into()))?;

    let mut store = open_store()?;
    store.delete(id)?;
    store.save()?;

    println!("deleted {}", id);
    Ok(())
}

/// Highlight a file straight from disk
pub fn preview(args: &[String]) -> Result<()> {
    let mut language = None;
    let mut path = None;
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--language" | "-l" => language = Some(value_for(args, &mut index, "--language")?),
            other if path.is_none() => path = Some(PathBuf::from(other)),
            other => return Err(SnipError::Usage(format!("unexpected argument: {}", other))),
        }
        index += 1;
    }
    let path = path.ok_or_else(|| SnipError::Usage("preview requires a file".into()))?;

    let language = language.unwrap_or_else(|| {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(language_for_extension)
            .unwrap_or("text")
            .to_string()
    });

    let code = fs::read_to_string(&path)?;
    let settings = Settings::load();
    let session = Session::new(&language, &settings);

    let mut out = io::stdout().lock();
    render::print_highlighted(&mut out, &code, &session, &settings)?;
    out.flush()?;
    Ok(())
}

/// List the languages with dedicated rule sets, plus any others present
/// in the store
pub fn languages() -> Result<()> {
    for name in LANGUAGE_NAMES {
        println!("{}", name);
    }

    if let Ok(store) = open_store() {
        for extra in store.unique_languages() {
            if !LANGUAGE_NAMES
                .iter()
                .any(|n| n.eq_ignore_ascii_case(&extra))
            {
                println!("{} (from store)", extra);
            }
        }
    }
    Ok(())
}

/// Print, read, or write settings
pub fn config(args: &[String]) -> Result<()> {
    let mut settings = Settings::load();

    match args {
        [] => {
            println!("editor/tab_size = {}", settings.tab_size);
            println!(
                "editor/line_numbers_visible = {}",
                settings.line_numbers_visible
            );
            println!(
                "display/time_format = {}",
                settings.time_format.as_value()
            );
            if !settings.theme.is_empty() {
                println!("appearance/theme = {}", settings.theme);
            }
            let mut overrides: Vec<_> = settings.syntax_colors.iter().collect();
            overrides.sort();
            for (group, color) in overrides {
                println!("syntax_colors/{} = {}", group, color);
            }
            Ok(())
        }
        [key] => match settings.get(key) {
            Some(value) => {
                println!("{}", value);
                Ok(())
            }
            None => Err(SnipError::Usage(format!("unknown or unset key: {}", key))),
        },
        [key, value] => {
            if !settings.set(key, value) {
                return Err(SnipError::Usage(format!("unknown key: {}", key)));
            }
            settings.save()?;
            Ok(())
        }
        _ => Err(SnipError::Usage("config takes at most a key and a value".into())),
    }
}
