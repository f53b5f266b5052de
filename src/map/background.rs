//! The background map the overlay is composited onto.
//!
//! The map is kept as text. Its own nodes are never parsed or regenerated;
//! the overlay markup is spliced in just before the root's closing tag so it
//! ends up as the last child of the map root.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

/// Symbols the renderer references through `xlink:href`.
pub const REQUIRED_SYMBOLS: [&str; 3] = ["army", "fleet", "sc"];

const ROOT_CLOSE: &str = "</svg>";

/// Errors raised while loading a background map.
#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("background map has no <svg> root element")]
    MissingRoot,

    #[error("background map root element is never closed")]
    UnclosedRoot,
}

/// A loaded background map.
#[derive(Debug, Clone)]
pub struct BackgroundMap {
    source: String,
    insert_at: usize,
}

impl BackgroundMap {
    /// Wraps SVG text, locating the root's closing tag.
    pub fn from_svg(source: impl Into<String>) -> Result<Self, BackgroundError> {
        let source = source.into();
        let open = source.find("<svg").ok_or(BackgroundError::MissingRoot)?;
        let insert_at = source
            .rfind(ROOT_CLOSE)
            .filter(|&close| close > open)
            .ok_or(BackgroundError::UnclosedRoot)?;
        let map = Self { source, insert_at };
        for symbol in map.missing_symbols() {
            warn!(symbol, "background map does not define a symbol the renderer uses");
        }
        Ok(map)
    }

    /// Reads a background map from disk.
    pub fn load(path: &Path) -> Result<Self, BackgroundError> {
        let source = fs::read_to_string(path).map_err(|source| BackgroundError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_svg(source)
    }

    /// Required symbol ids that the map does not define.
    pub fn missing_symbols(&self) -> Vec<&'static str> {
        REQUIRED_SYMBOLS
            .iter()
            .copied()
            .filter(|symbol| {
                !self.source.contains(&format!("id=\"{}\"", symbol))
                    && !self.source.contains(&format!("id='{}'", symbol))
            })
            .collect()
    }

    /// Returns the map with `overlay` inserted as the root's last child.
    pub fn composite(&self, overlay: &str) -> String {
        let (head, tail) = self.source.split_at(self.insert_at);
        let mut out = String::with_capacity(self.source.len() + overlay.len());
        out.push_str(head);
        out.push_str(overlay);
        out.push_str(tail);
        out
    }
}
