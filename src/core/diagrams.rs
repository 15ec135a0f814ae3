/// Incorrect-guess drawings, shown after every miss
use std::path::Path;
use tracing::info;

use crate::core::error::AssetError;

/// Every drawing is exactly this many lines tall
pub const DIAGRAM_HEIGHT: usize = 8;

const BUILTIN_DIAGRAMS: [[&str; DIAGRAM_HEIGHT]; 10] = [
    [
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "==========",
    ],
    [
        "",
        "",
        "",
        "",
        "",
        "",
        "  |",
        "==========",
    ],
    [
        "",
        "  |",
        "  |",
        "  |",
        "  |",
        "  |",
        "  |",
        "==========",
    ],
    [
        "  +-----+",
        "  |",
        "  |",
        "  |",
        "  |",
        "  |",
        "  |",
        "==========",
    ],
    [
        "  +-----+",
        "  |     |",
        "  |",
        "  |",
        "  |",
        "  |",
        "  |",
        "==========",
    ],
    [
        "  +-----+",
        "  |     |",
        "  |     O",
        "  |",
        "  |",
        "  |",
        "  |",
        "==========",
    ],
    [
        "  +-----+",
        "  |     |",
        "  |     O",
        "  |     |",
        "  |     |",
        "  |",
        "  |",
        "==========",
    ],
    [
        "  +-----+",
        "  |     |",
        "  |     O",
        "  |    /|\\",
        "  |     |",
        "  |",
        "  |",
        "==========",
    ],
    [
        "  +-----+",
        "  |     |",
        "  |     O",
        "  |    /|\\",
        "  |     |",
        "  |    /",
        "  |",
        "==========",
    ],
    [
        "  +-----+",
        "  |     |",
        "  |     O",
        "  |    /|\\",
        "  |     |",
        "  |    / \\",
        "  |",
        "==========",
    ],
];

#[derive(Debug, Clone)]
pub struct Diagrams {
    drawings: Vec<String>,
}

impl Diagrams {
    /// Split text into consecutive blocks of [`DIAGRAM_HEIGHT`] lines
    pub fn parse(text: &str) -> Result<Self, AssetError> {
        let lines: Vec<&str> = text.lines().collect();
        let mut drawings = Vec::with_capacity(lines.len() / DIAGRAM_HEIGHT);

        for (index, block) in lines.chunks(DIAGRAM_HEIGHT).enumerate() {
            if block.len() != DIAGRAM_HEIGHT {
                return Err(AssetError::TruncatedDiagram {
                    index,
                    lines: block.len(),
                });
            }
            let mut drawing = block.join("\n");
            drawing.push('\n');
            drawings.push(drawing);
        }

        Ok(Self { drawings })
    }

    pub fn from_path(path: &Path) -> Result<Self, AssetError> {
        let text = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let diagrams = Self::parse(&text)?;
        info!(path = %path.display(), count = diagrams.len(), "loaded diagrams");
        Ok(diagrams)
    }

    pub fn builtin() -> Self {
        let drawings = BUILTIN_DIAGRAMS
            .iter()
            .map(|rows| {
                let mut drawing = rows.join("\n");
                drawing.push('\n');
                drawing
            })
            .collect();
        Self { drawings }
    }

    /// Drawing for the given number of incorrect guesses.
    ///
    /// The first miss shows the first drawing. When a round allows more
    /// misses than there are drawings the last one is repeated.
    pub fn for_incorrect(&self, incorrect: u32) -> Option<&str> {
        if incorrect == 0 {
            return None;
        }
        let index = (incorrect as usize - 1).min(self.drawings.len().checked_sub(1)?);
        self.drawings.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.drawings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }
}
