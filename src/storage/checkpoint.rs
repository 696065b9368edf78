//! Fixed-layout binary checkpoint of the working context.
//!
//! Layout (11 bytes): `[0..4]` selected account index as little-endian `i32`,
//! `[4..11]` the active span in its `YYYY_MM` form.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    domain::Span,
    errors::Result,
    storage::{read_if_exists, write_replacing},
};

const INDEX_LEN: usize = 4;
pub const CHECKPOINT_LEN: usize = INDEX_LEN + Span::ENCODED_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    /// `-1` when no account is selected.
    pub selected_account_index: i32,
    pub active_span: Span,
}

impl Checkpoint {
    pub const NO_SELECTION: i32 = -1;

    pub fn new(selected_account_index: i32, active_span: Span) -> Self {
        Self {
            selected_account_index,
            active_span,
        }
    }

    /// The selected index, if the checkpoint names one.
    pub fn selected_index(&self) -> Option<u32> {
        u32::try_from(self.selected_account_index).ok()
    }

    /// Encodes the checkpoint, or returns `None` when nothing is selected and
    /// no checkpoint should be written.
    pub fn encode(&self) -> Option<[u8; CHECKPOINT_LEN]> {
        if self.selected_account_index < 0 {
            return None;
        }
        let mut out = [0_u8; CHECKPOINT_LEN];
        out[..INDEX_LEN].copy_from_slice(&self.selected_account_index.to_le_bytes());
        out[INDEX_LEN..].copy_from_slice(self.active_span.to_string().as_bytes());
        Some(out)
    }

    /// Decodes a checkpoint blob. Anything shorter than the index field means
    /// "no prior selection"; a missing or unreadable span falls back to `fallback_span`.
    pub fn decode(bytes: &[u8], fallback_span: Span) -> Self {
        let Some(index_bytes) = bytes.get(..INDEX_LEN) else {
            return Self::new(Self::NO_SELECTION, fallback_span);
        };
        let mut index = [0_u8; INDEX_LEN];
        index.copy_from_slice(index_bytes);
        let selected_account_index = i32::from_le_bytes(index);

        let span_bytes = &bytes[INDEX_LEN..bytes.len().min(CHECKPOINT_LEN)];
        let active_span = if span_bytes.is_empty() {
            fallback_span
        } else {
            match std::str::from_utf8(span_bytes)
                .ok()
                .and_then(|raw| raw.parse::<Span>().ok())
            {
                Some(span) => span,
                None => {
                    warn!(
                        raw = ?span_bytes,
                        fallback = %fallback_span,
                        "checkpoint span unreadable; using fallback"
                    );
                    fallback_span
                }
            }
        };

        Self::new(selected_account_index, active_span)
    }
}

/// Reads and writes the checkpoint file.
#[derive(Debug, Clone)]
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the checkpoint; an absent file decodes like an empty one.
    pub fn load(&self, fallback_span: Span) -> Result<Checkpoint> {
        let bytes = read_if_exists(&self.path)?.unwrap_or_default();
        let checkpoint = Checkpoint::decode(&bytes, fallback_span);
        debug!(
            path = %self.path.display(),
            len = bytes.len(),
            index = checkpoint.selected_account_index,
            span = %checkpoint.active_span,
            "checkpoint loaded"
        );
        Ok(checkpoint)
    }

    /// Writes the checkpoint. Returns `false` without touching the file when the
    /// checkpoint has no selection, so an older checkpoint on disk survives.
    pub fn save(&self, checkpoint: &Checkpoint) -> Result<bool> {
        let Some(bytes) = checkpoint.encode() else {
            debug!(path = %self.path.display(), "no account selected; checkpoint not written");
            return Ok(false);
        };
        write_replacing(&self.path, &bytes)?;
        debug!(path = %self.path.display(), "checkpoint written");
        Ok(true)
    }
}
