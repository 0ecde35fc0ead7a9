/// Asset load requests and completions.
///
/// A load is submitted to the engine as a [`LoadRequest`] carrying a
/// [`LoadTicket`] (the viewer epoch at submission time). The engine reports
/// the outcome through a [`CompletionSender`], possibly from a decoder
/// thread; the viewer drains completions on the rendering thread and
/// discards any whose ticket no longer matches its epoch.

use std::fmt;
use std::sync::mpsc::{Receiver, Sender};
use crate::error::Result;

// ===== SCENE FORMAT =====

/// Point-cloud formats recognized by the splat loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneFormat {
    /// Compressed splat format (`.ksplat`)
    KSplat,
    /// Raw 32-byte-per-splat format (`.splat`)
    Splat,
    /// Polygon file format point cloud (`.ply`)
    Ply,
}

impl SceneFormat {
    /// Infer the format from a file name or URL suffix (case-insensitive).
    ///
    /// Unrecognized suffixes return `None` and the asset loads without a
    /// format hint.
    pub fn from_locator(name_or_url: &str) -> Option<Self> {
        let lower = name_or_url.to_lowercase();
        // ".ksplat" must be tested before ".splat"
        if lower.ends_with(".ksplat") {
            Some(SceneFormat::KSplat)
        } else if lower.ends_with(".splat") {
            Some(SceneFormat::Splat)
        } else if lower.ends_with(".ply") {
            Some(SceneFormat::Ply)
        } else {
            None
        }
    }

    /// File extension including the dot
    pub fn extension(&self) -> &'static str {
        match self {
            SceneFormat::KSplat => ".ksplat",
            SceneFormat::Splat => ".splat",
            SceneFormat::Ply => ".ply",
        }
    }
}

impl fmt::Display for SceneFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

// ===== ASSET LOCATOR =====

/// Where a scene comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLocator {
    /// Remote asset fetched by URL (subject to cross-origin policy)
    Remote { url: String },
    /// Local file exposed to the engine through an object URL
    LocalFile { object_url: String, file_name: String },
}

impl AssetLocator {
    pub fn remote(url: impl Into<String>) -> Self {
        AssetLocator::Remote { url: url.into() }
    }

    pub fn local_file(object_url: impl Into<String>, file_name: impl Into<String>) -> Self {
        AssetLocator::LocalFile {
            object_url: object_url.into(),
            file_name: file_name.into(),
        }
    }

    /// URL handed to the engine
    pub fn url(&self) -> &str {
        match self {
            AssetLocator::Remote { url } => url,
            AssetLocator::LocalFile { object_url, .. } => object_url,
        }
    }

    /// Name shown in the status badge once the scene is ready.
    ///
    /// Local files show their file name; URLs show their last path
    /// segment, or `"scene"` when that segment is empty.
    pub fn display_name(&self) -> String {
        let name = match self {
            AssetLocator::Remote { url } => url.rsplit('/').next().unwrap_or_default(),
            AssetLocator::LocalFile { file_name, .. } => file_name.as_str(),
        };
        if name.is_empty() {
            "scene".to_string()
        } else {
            name.to_string()
        }
    }

    /// Format inferred from the file name (local) or URL (remote)
    pub fn inferred_format(&self) -> Option<SceneFormat> {
        match self {
            AssetLocator::Remote { url } => SceneFormat::from_locator(url),
            AssetLocator::LocalFile { file_name, .. } => SceneFormat::from_locator(file_name),
        }
    }
}

// ===== TICKETS / REQUESTS =====

/// Identifies one load submission by the viewer epoch it was made in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket {
    epoch: u64,
}

impl LoadTicket {
    pub fn new(epoch: u64) -> Self {
        Self { epoch }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Request passed to `ViewerSession::begin_load`
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub locator: AssetLocator,
    /// Forced format; `None` lets the engine sniff the content
    pub format: Option<SceneFormat>,
    /// Let the engine draw its own progress indicator
    pub show_loading_ui: bool,
}

/// Outcome of one load, reported by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct LoadCompletion {
    pub ticket: LoadTicket,
    pub result: Result<()>,
}

/// Channel end the engine uses to report a load outcome.
///
/// `Send`, so decoders running on worker threads can report directly;
/// the viewer applies the outcome on the rendering thread.
#[derive(Debug, Clone)]
pub struct CompletionSender {
    ticket: LoadTicket,
    sender: Sender<LoadCompletion>,
}

impl CompletionSender {
    pub fn new(ticket: LoadTicket, sender: Sender<LoadCompletion>) -> Self {
        Self { ticket, sender }
    }

    /// Ticket of the load this sender reports for
    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    /// Report the outcome. Returns false if the viewer is gone.
    pub fn complete(self, result: Result<()>) -> bool {
        self.sender
            .send(LoadCompletion { ticket: self.ticket, result })
            .is_ok()
    }
}

/// Create a completion channel (viewer side keeps the receiver)
pub fn completion_channel() -> (Sender<LoadCompletion>, Receiver<LoadCompletion>) {
    std::sync::mpsc::channel()
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
