//! Persisted player lists (wishlist, guillotine).
//!
//! Membership lives in memory and every change is written through to a JSON
//! file. Storage problems are logged and otherwise ignored so the list keeps
//! working for the rest of the session.

use log::{debug, warn};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::cache::{cache_root, try_read_to_string, write_string};
use crate::{FplError, PlayerId};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ListKind {
    /// Players you want to bring in
    Wishlist,
    /// Players you want to get rid of
    Guillotine,
}

impl ListKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            ListKind::Wishlist => "wishlist.json",
            ListKind::Guillotine => "guillotine.json",
        }
    }

    /// Path: ~/.cache/fpl-planner/{kind}.json
    pub fn default_path(&self) -> PathBuf {
        cache_root().join(self.file_name())
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Wishlist => write!(f, "Wishlist"),
            ListKind::Guillotine => write!(f, "Guillotine"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerList {
    kind: ListKind,
    ids: BTreeSet<PlayerId>,
    path: Option<PathBuf>,
}

impl PlayerList {
    /// A list that is never written to disk.
    pub fn in_memory(kind: ListKind) -> Self {
        Self {
            kind,
            ids: BTreeSet::new(),
            path: None,
        }
    }

    /// Load from `path`; a missing or unreadable file gives an empty list.
    pub fn load(kind: ListKind, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ids = match try_read_to_string(&path) {
            Some(raw) => match serde_json::from_str::<Vec<PlayerId>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    warn!("{} at {} is unreadable: {}", kind, path.display(), e);
                    BTreeSet::new()
                }
            },
            None => {
                debug!("{} not found at {}, starting empty", kind, path.display());
                BTreeSet::new()
            }
        };

        Self {
            kind,
            ids,
            path: Some(path),
        }
    }

    pub fn load_default(kind: ListKind) -> Self {
        Self::load(kind, kind.default_path())
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns `true` if the player was not already listed.
    pub fn add(&mut self, id: PlayerId) -> bool {
        let added = self.ids.insert(id);
        if added {
            self.persist();
        }
        added
    }

    /// Returns `true` if the player was listed.
    pub fn remove(&mut self, id: PlayerId) -> bool {
        let removed = self.ids.remove(&id);
        if removed {
            self.persist();
        }
        removed
    }

    /// Flip membership; returns the new state.
    pub fn toggle(&mut self, id: PlayerId) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.ids.iter().copied()
    }

    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let ids: Vec<PlayerId> = self.ids.iter().copied().collect();
        let result = serde_json::to_string(&ids)
            .map_err(FplError::from)
            .and_then(|json| write_string(path, &json).map_err(FplError::from));
        if let Err(e) = result {
            warn!("Could not save {} to {}: {}", self.kind, path.display(), e);
        }
    }
}
