//! Merge error types.

use std::fmt;

use thiserror::Error;

/// Which half of the defensive-copy round-trip failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStage {
    /// Serializing the source form to the interchange snapshot.
    Export,
    /// Re-applying the snapshot to the fresh form.
    Import,
}

impl fmt::Display for CopyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyStage::Export => f.write_str("problem exporting"),
            CopyStage::Import => f.write_str("problem importing"),
        }
    }
}

/// Errors that can occur while preparing or performing a merge.
///
/// Only structural failures are represented here. A per-field shape mismatch
/// is reported as `false` by the text accessor, and a missing match as
/// `None` by the searches; neither aborts a merge.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Input could not be parsed into a node tree.
    #[error("Load error: {0}")]
    Load(String),

    /// Defensive copy round-trip failed. The merge in progress must stop;
    /// falling back to mutating the shared original would corrupt it.
    #[error("Defensive copy error ({stage}): {source}")]
    Copy {
        stage: CopyStage,
        source: serde_json::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MergeError {
    /// Creates a load error.
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load(message.into())
    }

    pub(crate) fn copy_export(source: serde_json::Error) -> Self {
        Self::Copy {
            stage: CopyStage::Export,
            source,
        }
    }

    pub(crate) fn copy_import(source: serde_json::Error) -> Self {
        Self::Copy {
            stage: CopyStage::Import,
            source,
        }
    }
}
