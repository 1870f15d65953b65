//! File kind classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The closed set of file kinds tracked by the catalog.
///
/// Stored as lowercase text; anything the catalog cannot classify is a
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Generic document (the default).
    Document,
    /// Image file.
    Photo,
    /// Video file.
    Video,
    /// Audio file.
    Audio,
}

impl FileKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }

    /// Classify a file by its extension.
    pub fn from_filename(filename: &str) -> Self {
        let ext = match filename.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => return Self::Document,
        };
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" => Self::Photo,
            "mp4" | "mov" | "avi" | "mkv" => Self::Video,
            "mp3" | "wav" | "ogg" | "m4a" => Self::Audio,
            _ => Self::Document,
        }
    }

    /// Parse a stored label, falling back to `Document` for unknown values.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Self::Document)
    }
}

impl Default for FileKind {
    fn default() -> Self {
        Self::Document
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "document" => Ok(Self::Document),
            "photo" => Ok(Self::Photo),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            _ => Err(AppError::validation(format!(
                "Invalid file kind: '{s}'. Expected one of: document, photo, video, audio"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_filename() {
        assert_eq!(FileKind::from_filename("photo.JPG"), FileKind::Photo);
        assert_eq!(FileKind::from_filename("clip.mp4"), FileKind::Video);
        assert_eq!(FileKind::from_filename("talk.mp3"), FileKind::Audio);
        assert_eq!(FileKind::from_filename("notes.pdf"), FileKind::Document);
        assert_eq!(FileKind::from_filename("README"), FileKind::Document);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("photo".parse::<FileKind>().unwrap(), FileKind::Photo);
        assert_eq!("VIDEO".parse::<FileKind>().unwrap(), FileKind::Video);
        assert!("archive".parse::<FileKind>().is_err());
        assert_eq!(FileKind::from_label("archive"), FileKind::Document);
    }
}
