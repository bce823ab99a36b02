// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Unicode character names for the glyph panel.
//!
//! Names come from the Unicode Character Database (`UnicodeData.txt`).
//! The file is downloaded once on a background thread and cached as JSON;
//! the editor polls for it every frame and shows a status message until it
//! arrives. Nothing here ever blocks the caller.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::CodePoint;
use crate::settings::Config;

/// Where a name lookup is at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStatus {
    NotStarted,
    Loading,
    Error,
    Ready,
}

/// Character names, which may not be available yet
pub trait NameLookupService {
    fn status(&self) -> NameStatus;

    /// Human readable status, shown in place of a name until ready
    fn status_message(&self) -> String;

    /// The name of `code_point`, once the names are ready
    fn name_for(&self, code_point: CodePoint) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum NameDataError {
    #[error("Parse error line {line}")]
    Parse { line: usize },
    #[error("Expected end-of-range indicator, line {line}")]
    MissingRangeEnd { line: usize },
    #[error("Download failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// A block of characters sharing one name, such as CJK ideographs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRange {
    pub first: CodePoint,
    pub last: CodePoint,
    pub name: String,
}

/// Parsed character names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTable {
    names: BTreeMap<CodePoint, String>,
    ranges: Vec<NameRange>,
}

impl NameTable {
    pub fn get(&self, code_point: CodePoint) -> Option<&str> {
        self.names.get(&code_point).map(String::as_str).or_else(|| {
            self.ranges
                .iter()
                .find(|r| (r.first..=r.last).contains(&code_point))
                .map(|r| r.name.as_str())
        })
    }

    pub fn len(&self) -> usize {
        self.names.len() + self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.ranges.is_empty()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read name cache {:?}", path))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse name cache {:?}", path))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {:?}", dir))?;
        }
        let text = serde_json::to_string(self).context("Failed to serialize names")?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write name cache {:?}", path))
    }
}

/// Parse `UnicodeData.txt`.
///
/// Each line is `code;name;...`. A name ending in `, First>` opens a range
/// that the next line (ending in `, Last>`) closes; the range is named
/// without the `, First` marker. Line numbers in errors are 1-based.
pub fn parse_unicode_data(text: &str) -> Result<NameTable, NameDataError> {
    let mut table = NameTable::default();
    let mut lines = text.lines().enumerate();
    while let Some((i, line)) = lines.next() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (code, name) = split_fields(line, i + 1)?;
        let Some(stem) = name.strip_suffix(", First>") else {
            table.names.insert(code, name.to_string());
            continue;
        };

        let Some((j, end)) = lines.next() else {
            return Err(NameDataError::MissingRangeEnd { line: i + 2 });
        };
        let (last, end_name) = split_fields(end.trim(), j + 1)?;
        if !end_name.ends_with(", Last>") {
            return Err(NameDataError::MissingRangeEnd { line: j + 1 });
        }
        table.ranges.push(NameRange {
            first: code,
            last,
            name: format!("{stem}>"),
        });
    }
    Ok(table)
}

fn split_fields(line: &str, number: usize) -> Result<(CodePoint, &str), NameDataError> {
    let mut fields = line.split(';');
    let (Some(code), Some(name)) = (fields.next(), fields.next()) else {
        return Err(NameDataError::Parse { line: number });
    };
    let code = CodePoint::from_str_radix(code.trim(), 16)
        .map_err(|_| NameDataError::Parse { line: number })?;
    Ok((code, name))
}

fn download(url: &str) -> Result<NameTable, NameDataError> {
    let text = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    parse_unicode_data(&text)
}

enum LoadState {
    NotStarted,
    Loading(Receiver<Result<NameTable, NameDataError>>),
    Failed(String),
    Ready(NameTable),
}

/// Unicode names from a local cache or a background download
pub struct UnicodeNames {
    state: LoadState,
    url: String,
    cache: Option<PathBuf>,
    fetch: bool,
}

impl std::fmt::Debug for UnicodeNames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnicodeNames")
            .field("status", &self.status())
            .field("url", &self.url)
            .field("cache", &self.cache)
            .field("fetch", &self.fetch)
            .finish()
    }
}

impl UnicodeNames {
    pub fn new(url: impl Into<String>, cache: Option<PathBuf>, fetch: bool) -> Self {
        Self {
            state: LoadState::NotStarted,
            url: url.into(),
            cache,
            fetch,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.unicode_data_url.clone(),
            config.name_cache.clone(),
            config.fetch_names,
        )
    }

    /// Names that are ready from the start
    pub fn with_table(table: NameTable) -> Self {
        let mut names = Self::new(String::new(), None, false);
        names.state = LoadState::Ready(table);
        names
    }

    /// Advance the lookup. Call once per frame; returns immediately.
    pub fn poll(&mut self) {
        match &self.state {
            LoadState::Ready(_) | LoadState::Failed(_) => {}
            LoadState::NotStarted => self.start(),
            LoadState::Loading(rx) => match rx.try_recv() {
                Ok(Ok(table)) => {
                    tracing::info!("Downloaded {} Unicode names", table.len());
                    self.store_cache(&table);
                    self.state = LoadState::Ready(table);
                }
                Ok(Err(e)) => {
                    tracing::error!("Failed to load Unicode names: {}", e);
                    self.state = LoadState::Failed(e.to_string());
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    tracing::error!("Unicode name download stopped without a result");
                    self.state = LoadState::Failed("Download stopped".to_string());
                }
            },
        }
    }

    /// Poll until the names settle or `timeout` passes. For tools without
    /// a frame loop.
    pub fn wait(&mut self, timeout: Duration) -> NameStatus {
        let deadline = Instant::now() + timeout;
        self.poll();
        while self.status() == NameStatus::Loading && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(50));
            self.poll();
        }
        self.status()
    }

    fn start(&mut self) {
        if let Some(cache) = &self.cache
            && cache.exists()
        {
            match NameTable::load(cache) {
                Ok(table) => {
                    tracing::info!("Loaded {} Unicode names from {}", table.len(), cache.display());
                    self.state = LoadState::Ready(table);
                    return;
                }
                Err(e) => tracing::warn!("{:#}; downloading names again", e),
            }
        }
        if !self.fetch {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let url = self.url.clone();
        tracing::info!("Downloading Unicode names from {}", url);
        let spawned = thread::Builder::new()
            .name("unicode-names".to_string())
            .spawn(move || {
                // The receiver may be gone if the editor closed
                let _ = tx.send(download(&url));
            });
        self.state = match spawned {
            Ok(_) => LoadState::Loading(rx),
            Err(e) => {
                tracing::error!("Failed to start name download: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
    }

    fn store_cache(&self, table: &NameTable) {
        if let Some(cache) = &self.cache
            && let Err(e) = table.save(cache)
        {
            tracing::warn!("{:#}", e);
        }
    }
}

impl NameLookupService for UnicodeNames {
    fn status(&self) -> NameStatus {
        match self.state {
            LoadState::NotStarted => NameStatus::NotStarted,
            LoadState::Loading(_) => NameStatus::Loading,
            LoadState::Failed(_) => NameStatus::Error,
            LoadState::Ready(_) => NameStatus::Ready,
        }
    }

    fn status_message(&self) -> String {
        match &self.state {
            LoadState::NotStarted => "Not started".to_string(),
            LoadState::Loading(_) => "Downloading…".to_string(),
            LoadState::Failed(message) => message.clone(),
            LoadState::Ready(_) => "Done.".to_string(),
        }
    }

    fn name_for(&self, code_point: CodePoint) -> Option<&str> {
        match &self.state {
            LoadState::Ready(table) => table.get(code_point),
            _ => None,
        }
    }
}
