//! Append-only record stores: a JSON-lines file and an in-memory vector.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::types::Record;

/// Per-user history with no update or delete.
pub trait RecordStore<R: Record> {
    fn append(&mut self, record: &R) -> Result<()>;

    /// Up to `limit` records for `user_id`, newest first.
    fn list(&self, user_id: &str, limit: usize) -> Result<Vec<R>>;
}

/// Newest first; records with equal timestamps keep reverse append order.
fn newest_first<R: Record>(mut rows: Vec<R>, limit: usize) -> Vec<R> {
    rows.reverse();
    rows.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    rows.truncate(limit);
    rows
}

/// One JSON object per line.
#[derive(Debug, Clone)]
pub struct JsonlStore<R> {
    path: PathBuf,
    _record: PhantomData<R>,
}

impl<R: Record> JsonlStore<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every readable record in append order. Malformed lines are skipped.
    pub fn read_all(&self) -> Result<Vec<R>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let f = File::open(&self.path).with_context(|| format!("open {}", self.path.display()))?;

        let mut rows = Vec::new();
        for (n, line) in BufReader::new(f).lines().enumerate() {
            let line = line.with_context(|| format!("read {}", self.path.display()))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<R>(&line) {
                Ok(r) => rows.push(r),
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), line = n + 1, error = %e, "skipping malformed record");
                }
            }
        }
        Ok(rows)
    }
}

impl<R: Record> RecordStore<R> for JsonlStore<R> {
    fn append(&mut self, record: &R) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;

        let line = serde_json::to_string(record).context("serialize record")?;
        writeln!(f, "{}", line).with_context(|| format!("write {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), user = record.user_id(), "record appended");
        Ok(())
    }

    fn list(&self, user_id: &str, limit: usize) -> Result<Vec<R>> {
        let rows = self
            .read_all()?
            .into_iter()
            .filter(|r| r.user_id() == user_id)
            .collect();
        Ok(newest_first(rows, limit))
    }
}

/// Vector-backed store; backs `--no-save` dry runs.
#[derive(Debug, Clone)]
pub struct MemoryStore<R> {
    records: Vec<R>,
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<R: Record + Clone> MemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record + Clone> RecordStore<R> for MemoryStore<R> {
    fn append(&mut self, record: &R) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn list(&self, user_id: &str, limit: usize) -> Result<Vec<R>> {
        let rows = self
            .records
            .iter()
            .filter(|r| r.user_id() == user_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, limit))
    }
}
