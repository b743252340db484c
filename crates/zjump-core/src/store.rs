//! The z database: flat text, one `path|rank|lastAccess` record per line.
//!
//! The file is owned by an external shell tracking agent; this store only
//! reads the full record set and rewrites exactly one record on selection.
//! Every search re-reads the file, so concurrent updates from the agent are
//! visible on the next keystroke.

use crate::error::{Error, Result};
use crate::score::frecency;
use crate::types::{RankedResult, Record, TouchOutcome};
use parking_lot::Mutex;
use regex::RegexBuilder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Handle over one z database file.
///
/// `search` is read-only and safe to call concurrently. `touch` rewrites the
/// file through a temporary file in the same directory followed by an atomic
/// rename, and holds a mutex for the duration so overlapping selections
/// cannot interleave writes.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Search the database for records whose path matches `query`, ranked by
    /// frecency descending and truncated to `max_results`.
    pub fn search(&self, query: &str, max_results: usize) -> Result<Vec<RankedResult>> {
        self.search_at(query, max_results, unix_now())
    }

    /// Same scan as [`Self::search`] with an explicit clock, so callers can
    /// replay a search deterministically.
    ///
    /// `query` is compiled as a case-insensitive regular expression and
    /// matched against the parsed path field. Malformed lines are skipped.
    /// Ties in frecency keep database order.
    pub fn search_at(
        &self,
        query: &str,
        max_results: usize,
        now: f64,
    ) -> Result<Vec<RankedResult>> {
        let pattern = RegexBuilder::new(query).case_insensitive(true).build()?;
        let contents = fs::read_to_string(&self.path).map_err(Error::StoreRead)?;

        let mut results: Vec<RankedResult> = Vec::new();
        for line in contents.lines() {
            if line.is_empty() {
                continue;
            }
            let Some(record) = Record::parse(line) else {
                tracing::warn!(line, store = %self.path.display(), "Skipping malformed record");
                continue;
            };
            if !pattern.is_match(&record.path) {
                continue;
            }
            let frecency = frecency(record.rank, record.last_access, now);
            results.push(RankedResult { record, frecency });
        }

        // sort_by is stable, so equal frecency values keep input order
        results.sort_by(|a, b| b.frecency.total_cmp(&a.frecency));
        results.truncate(max_results);

        tracing::debug!(query, matched = results.len(), "Search completed");
        Ok(results)
    }

    /// Find the record whose path equals `path` exactly (string equality,
    /// not pattern matching).
    pub fn lookup(&self, path: &str) -> Result<Option<Record>> {
        let contents = fs::read_to_string(&self.path).map_err(Error::StoreRead)?;
        Ok(contents
            .lines()
            .filter_map(Record::parse)
            .find(|record| record.path == path))
    }

    /// Replace the record for `path` with `path|new_rank|new_time`, keeping
    /// every other line byte-identical and in original order.
    ///
    /// The rewrite goes through a temporary file in the database's directory
    /// and an atomic rename, so a concurrent reader sees either the old file
    /// or the new one, never a truncated one. A failed write leaves the
    /// original file intact.
    ///
    /// A missing record is not an error: the file is rewritten unchanged and
    /// [`TouchOutcome::NotFound`] is returned.
    pub fn touch(&self, path: &str, new_rank: f64, new_time: f64) -> Result<TouchOutcome> {
        let _guard = self.write_lock.lock();

        tracing::debug!(
            path,
            rank = new_rank,
            time = new_time,
            store = %self.path.display(),
            "Updating record"
        );

        let contents = fs::read_to_string(&self.path).map_err(Error::StoreRead)?;

        let mut replaced = false;
        let mut rewritten = String::with_capacity(contents.len() + LINE_ENDING.len());
        for line in contents.split_inclusive('\n') {
            let stripped = line.trim_end_matches(['\r', '\n']);
            match Record::parse(stripped) {
                Some(record) if record.path == path => {
                    let updated = Record {
                        path: path.to_string(),
                        rank: new_rank,
                        last_access: new_time,
                    };
                    rewritten.push_str(&updated.to_line());
                    rewritten.push_str(LINE_ENDING);
                    replaced = true;
                }
                _ => rewritten.push_str(line),
            }
        }

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(Error::StoreStage)?;
        staged
            .write_all(rewritten.as_bytes())
            .map_err(Error::StoreStage)?;
        staged
            .persist(&self.path)
            .map_err(|persist| Error::StorePersist(persist.error))?;

        if replaced {
            Ok(TouchOutcome::Updated)
        } else {
            tracing::warn!(path, store = %self.path.display(), "Record not found; database left unchanged");
            Ok(TouchOutcome::NotFound)
        }
    }
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0)
}
