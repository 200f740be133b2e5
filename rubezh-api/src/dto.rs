//! Data Transfer Objects for API

use crate::error::Result;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for segmentation
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => Ok(fs::read_to_string(&path)?),
            Input::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

/// Boundary position in both offset systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryDTO {
    /// Character (code point) offset in the text
    pub char_offset: usize,
    /// Byte offset in the text
    pub byte_offset: usize,
}

/// Type alias for ergonomic use
pub type Boundary = BoundaryDTO;

/// A materialized sentence
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceDTO {
    /// Trimmed sentence text
    pub text: String,
    /// Character offset of the first kept character
    pub start: usize,
    /// Character offset one past the last kept character
    pub end: usize,
}

/// Type alias for ergonomic use
pub type Sentence = SentenceDTO;

impl From<rubezh_core::Sentence> for SentenceDTO {
    fn from(sentence: rubezh_core::Sentence) -> Self {
        Self {
            text: sentence.text,
            start: sentence.start,
            end: sentence.end,
        }
    }
}

/// Segmentation metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes processed
    pub total_bytes: usize,
    /// Total characters processed
    pub total_chars: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Heuristic quality estimate for the segmentation, in [0.0, 1.0]
    pub quality_score: f64,
}

/// Complete output with sentences, boundaries, and metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Materialized sentences
    pub sentences: Vec<SentenceDTO>,
    /// Detected boundaries
    pub boundaries: Vec<BoundaryDTO>,
    /// Segmentation metadata
    pub metadata: Metadata,
}
