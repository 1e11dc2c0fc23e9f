use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use storage::models::VoteChoice;
use tracing::warn;

use crate::Result;

/// Namespace key of the marker document.
pub const MARKER_NAMESPACE: &str = "unbeaten-votes-v1";

/// Client-side memory of "I already voted on this match".
///
/// Markers are advisory: they only keep a client from prompting twice, the
/// server accepts repeated votes regardless.
pub trait VoteMarkerStore {
    fn recorded_vote(&self, match_id: &str) -> Result<Option<VoteChoice>>;

    fn record_vote(&mut self, match_id: &str, choice: VoteChoice) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryMarkerStore {
    votes: HashMap<String, VoteChoice>,
}

impl MemoryMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VoteMarkerStore for MemoryMarkerStore {
    fn recorded_vote(&self, match_id: &str) -> Result<Option<VoteChoice>> {
        Ok(self.votes.get(match_id).copied())
    }

    fn record_vote(&mut self, match_id: &str, choice: VoteChoice) -> Result<()> {
        self.votes.insert(match_id.to_string(), choice);
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct MarkerDocument {
    #[serde(rename = "unbeaten-votes-v1", default)]
    votes: HashMap<String, VoteChoice>,
}

/// Markers kept in a JSON file on disk.
pub struct FileMarkerStore {
    path: PathBuf,
}

impl FileMarkerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing, unreadable or corrupt file reads as an empty document.
    fn load(&self) -> MarkerDocument {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return MarkerDocument::default(),
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring unreadable marker file {}: {}", self.path.display(), e);
            MarkerDocument::default()
        })
    }
}

impl VoteMarkerStore for FileMarkerStore {
    fn recorded_vote(&self, match_id: &str) -> Result<Option<VoteChoice>> {
        Ok(self.load().votes.get(match_id).copied())
    }

    fn record_vote(&mut self, match_id: &str, choice: VoteChoice) -> Result<()> {
        let mut document = self.load();
        document.votes.insert(match_id.to_string(), choice);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&document)?)?;
        Ok(())
    }
}
