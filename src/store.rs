//! Snippet storage
//!
//! Snippets live in a single TOML file (one `[[snippets]]` table per
//! record), loaded fully into memory and rewritten on save. Timestamps
//! are store-assigned; `updated_at` refreshes on every mutation and
//! drives the most-recently-updated-first listing order.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::home_dir;
use crate::error::{Result, SnipError};

/// Timestamp format used in the store file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One stored snippet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    /// Opaque unique id
    pub id: String,
    /// Non-empty title
    pub title: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
    /// Comma-joined normalized tags
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Snippet {
    /// Individual tags, in stored order
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags.split(',').filter(|t| !t.is_empty()).collect()
    }

    /// Exact tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag_list().iter().any(|t| *t == tag)
    }
}

/// Partial update for an existing snippet; None leaves the field alone
#[derive(Debug, Default)]
pub struct SnippetUpdate {
    pub title: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub tags: Option<String>,
    pub description: Option<String>,
}

/// On-disk shape of the store file
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    snippets: Vec<Snippet>,
}

/// The snippet store
pub struct SnippetStore {
    /// Backing file; None for a purely in-memory store
    path: Option<PathBuf>,
    snippets: Vec<Snippet>,
    /// Disambiguates ids created within one timestamp tick
    next_seq: u32,
}

impl SnippetStore {
    /// Default store file path
    pub fn default_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".snipman-snippets.toml"))
    }

    /// Open a store file, treating a missing file as an empty store
    pub fn open(path: &Path) -> Result<Self> {
        let snippets = if path.exists() {
            let contents = fs::read_to_string(path)?;
            let file: StoreFile = toml::from_str(&contents)?;
            file.snippets
        } else {
            Vec::new()
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            snippets,
            next_seq: 0,
        })
    }

    /// Create a store with no backing file
    pub fn in_memory() -> Self {
        Self {
            path: None,
            snippets: Vec::new(),
            next_seq: 0,
        }
    }

    /// Write the store back to its file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.path {
            let file = StoreFile {
                snippets: self.snippets.clone(),
            };
            fs::write(path, toml::to_string_pretty(&file)?)?;
        }
        Ok(())
    }

    /// Number of stored snippets
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Check for an empty store
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Add a snippet; returns its generated id
    pub fn create(
        &mut self,
        title: &str,
        code: &str,
        language: &str,
        tags: &str,
        description: &str,
    ) -> Result<String> {
        if title.trim().is_empty() {
            return Err(SnipError::EmptyTitle);
        }

        let now = now_timestamp();
        let id = self.generate_id();
        self.snippets.push(Snippet {
            id: id.clone(),
            title: title.trim().to_string(),
            code: code.to_string(),
            language: language.to_string(),
            tags: normalize_tags(tags),
            description: description.to_string(),
            created_at: now.clone(),
            updated_at: now,
        });

        Ok(id)
    }

    /// Update fields of an existing snippet, refreshing its timestamp
    pub fn update(&mut self, id: &str, update: SnippetUpdate) -> Result<()> {
        let snippet = self
            .snippets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SnipError::SnippetNotFound(id.to_string()))?;

        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(SnipError::EmptyTitle);
            }
            snippet.title = title.trim().to_string();
        }
        if let Some(code) = update.code {
            snippet.code = code;
        }
        if let Some(language) = update.language {
            snippet.language = language;
        }
        if let Some(tags) = update.tags {
            snippet.tags = normalize_tags(&tags);
        }
        if let Some(description) = update.description {
            snippet.description = description;
        }
        snippet.updated_at = now_timestamp();

        Ok(())
    }

    /// Remove a snippet by id
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.snippets.len();
        self.snippets.retain(|s| s.id != id);
        if self.snippets.len() == before {
            return Err(SnipError::SnippetNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Fetch a snippet by id
    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    /// List (id, title) pairs matching the filters, most recently
    /// updated first
    ///
    /// The search term matches case-insensitively as a substring of any
    /// text field; the tag filter is exact membership; the language
    /// filter is an exact match.
    pub fn search(
        &self,
        term: &str,
        tag: Option<&str>,
        language: Option<&str>,
    ) -> Vec<(&str, &str)> {
        let needle = term.to_lowercase();

        let mut hits: Vec<&Snippet> = self
            .snippets
            .iter()
            .filter(|s| {
                if !needle.is_empty() {
                    let haystack = format!(
                        "{}\n{}\n{}\n{}\n{}",
                        s.title, s.tags, s.language, s.description, s.code
                    )
                    .to_lowercase();
                    if !haystack.contains(&needle) {
                        return false;
                    }
                }
                if let Some(tag) = tag {
                    if !s.has_tag(tag) {
                        return false;
                    }
                }
                if let Some(language) = language {
                    if s.language != language {
                        return false;
                    }
                }
                true
            })
            .collect();

        // the timestamp format sorts lexicographically
        hits.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        hits.iter()
            .map(|s| (s.id.as_str(), s.title.as_str()))
            .collect()
    }

    /// All distinct tags, sorted
    pub fn unique_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .snippets
            .iter()
            .flat_map(|s| s.tag_list().into_iter().map(String::from))
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    /// All distinct non-empty languages, sorted
    pub fn unique_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self
            .snippets
            .iter()
            .filter(|s| !s.language.is_empty())
            .map(|s| s.language.clone())
            .collect();
        languages.sort();
        languages.dedup();
        languages
    }

    /// Generate an opaque id from the clock and a per-store sequence
    fn generate_id(&mut self) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        format!("{:x}{:04x}", nanos, seq)
    }
}

/// Trim tags, drop empties, re-join with bare commas
pub fn normalize_tags(tags: &str) -> String {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// The current UTC time in store format
pub fn now_timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(entries: &[(&str, &str, &str, &str)]) -> SnippetStore {
        let mut store = SnippetStore::in_memory();
        for (title, code, language, tags) in entries {
            store.create(title, code, language, tags, "").unwrap();
        }
        store
    }

    #[test]
    fn test_tag_round_trip() {
        let mut store = SnippetStore::in_memory();
        let id = store.create("t", "", "python", "a, b ,c", "").unwrap();

        let snippet = store.get(&id).unwrap();
        assert_eq!(snippet.tags, "a,b,c");
        assert_eq!(snippet.tag_list(), vec!["a", "b", "c"]);

        assert_eq!(store.search("", Some("b"), None).len(), 1);
        assert_eq!(store.search("", Some("d"), None).len(), 0);
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut store = SnippetStore::in_memory();
        assert!(matches!(
            store.create("  ", "", "", "", ""),
            Err(SnipError::EmptyTitle)
        ));
    }

    #[test]
    fn test_search_substring_across_fields() {
        let store = store_with(&[
            ("binary search", "fn bsearch() {}", "c++", "algo"),
            ("hello", "print('greeting')", "python", "demo"),
        ]);

        assert_eq!(store.search("BSEARCH", None, None).len(), 1);
        assert_eq!(store.search("greeting", None, None).len(), 1);
        assert_eq!(store.search("nothing here", None, None).len(), 0);
        assert_eq!(store.search("", None, None).len(), 2);
    }

    #[test]
    fn test_language_filter_is_exact() {
        let store = store_with(&[
            ("a", "", "c++", ""),
            ("b", "", "c", ""),
        ]);

        let hits = store.search("", None, Some("c"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1, "b");
    }

    #[test]
    fn test_search_orders_by_updated_at() {
        let mut store = store_with(&[("old", "", "", ""), ("new", "", "", "")]);

        // force distinct timestamps
        let ids: Vec<String> = store.snippets.iter().map(|s| s.id.clone()).collect();
        store.snippets[0].updated_at = "2024-01-01 00:00:00".into();
        store.snippets[1].updated_at = "2024-06-01 00:00:00".into();

        let hits = store.search("", None, None);
        assert_eq!(hits[0].1, "new");
        assert_eq!(hits[1].1, "old");

        // touching a snippet moves it to the front
        store.update(&ids[0], SnippetUpdate::default()).unwrap();
        let hits = store.search("", None, None);
        assert_eq!(hits[0].1, "old");
    }

    #[test]
    fn test_update_refreshes_fields() {
        let mut store = SnippetStore::in_memory();
        let id = store.create("title", "old code", "python", "x", "").unwrap();

        store
            .update(
                &id,
                SnippetUpdate {
                    code: Some("new code".into()),
                    tags: Some(" p , q ".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        let snippet = store.get(&id).unwrap();
        assert_eq!(snippet.code, "new code");
        assert_eq!(snippet.tags, "p,q");
        assert_eq!(snippet.title, "title");
    }

    #[test]
    fn test_update_missing_id() {
        let mut store = SnippetStore::in_memory();
        assert!(matches!(
            store.update("nope", SnippetUpdate::default()),
            Err(SnipError::SnippetNotFound(_))
        ));
    }

    #[test]
    fn test_delete() {
        let mut store = SnippetStore::in_memory();
        let id = store.create("t", "", "", "", "").unwrap();
        store.delete(&id).unwrap();
        assert!(store.is_empty());
        assert!(matches!(
            store.delete(&id),
            Err(SnipError::SnippetNotFound(_))
        ));
    }

    #[test]
    fn test_unique_tags_and_languages() {
        let store = store_with(&[
            ("a", "", "python", "web,db"),
            ("b", "", "python", "db"),
            ("c", "", "sql", ""),
        ]);

        assert_eq!(store.unique_tags(), vec!["db", "web"]);
        assert_eq!(store.unique_languages(), vec!["python", "sql"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = SnippetStore::in_memory();
        let a = store.create("a", "", "", "", "").unwrap();
        let b = store.create("b", "", "", "", "").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("snipman-store-{}.toml", std::process::id()));
        let _ = fs::remove_file(&path);

        {
            let mut store = SnippetStore::open(&path).unwrap();
            store.create("saved", "code()", "python", "a,b", "desc").unwrap();
            store.save().unwrap();
        }

        let store = SnippetStore::open(&path).unwrap();
        assert_eq!(store.len(), 1);
        let hits = store.search("saved", None, None);
        assert_eq!(hits.len(), 1);
        let snippet = store.get(hits[0].0).unwrap();
        assert_eq!(snippet.code, "code()");
        assert_eq!(snippet.tags, "a,b");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let path = std::env::temp_dir().join(format!("snipman-none-{}.toml", std::process::id()));
        let _ = fs::remove_file(&path);
        let store = SnippetStore::open(&path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_normalize_tags() {
        assert_eq!(normalize_tags("a, b ,c"), "a,b,c");
        assert_eq!(normalize_tags(""), "");
        assert_eq!(normalize_tags(" , ,"), "");
        assert_eq!(normalize_tags("one"), "one");
    }
}
