//! Prompt entry representation and the prompt-directory name codec.
//!
//! One generation request's output lives in a single directory named
//! `YYYY-MM-DD_HH-MM-SS_<prompt>`. Date and time are fixed-width and
//! zero-padded so that lexicographic order over directory names matches
//! chronological order. The prompt is the remainder of the name and may
//! contain any character the filesystem accepts, including `_`.

use std::path::PathBuf;

use unicode_normalization::UnicodeNormalization;

use crate::error::{CoreError, CoreResult};

/// One generation result: a prompt plus the image variants produced for it.
///
/// `PromptEntry` is immutable — the generation pipeline is the only writer
/// of the underlying directories, and the repository manager only observes
/// them. `image_paths` are ordered by variant index (file name order), not
/// by time.
///
/// # Examples
///
/// ```
/// use easel_core::PromptEntry;
///
/// let entry = PromptEntry::new(
///     "a red fox".into(),
///     "default".into(),
///     "2024-01-01".into(),
///     "09-30-00".into(),
///     vec!["001.png".into(), "002.png".into()],
/// );
/// assert_eq!(entry.variant_count(), 2);
/// assert_eq!(entry.dir_name(), "2024-01-01_09-30-00_a red fox");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptEntry {
    prompt: String,
    repo: String,
    date: String,
    time: String,
    variant_count: usize,
    image_paths: Vec<PathBuf>,
}

impl PromptEntry {
    /// Creates a new entry. `variant_count` is derived from `image_paths`.
    pub fn new(
        prompt: String,
        repo: String,
        date: String,
        time: String,
        image_paths: Vec<PathBuf>,
    ) -> Self {
        Self {
            prompt,
            repo,
            variant_count: image_paths.len(),
            date,
            time,
            image_paths,
        }
    }

    /// The text prompt this entry was generated from.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The owning repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Creation date, `YYYY-MM-DD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Creation time, `HH-MM-SS`.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Number of image variants produced for this prompt.
    pub fn variant_count(&self) -> usize {
        self.variant_count
    }

    /// File locations of each variant, in variant-index order.
    pub fn image_paths(&self) -> &[PathBuf] {
        &self.image_paths
    }

    /// Reassembles the on-disk directory name for this entry.
    ///
    /// Inverse of [`parse_dir_name`] with respect to `(date, time, prompt)`.
    pub fn dir_name(&self) -> String {
        format!("{}_{}_{}", self.date, self.time, self.prompt)
    }
}

/// Byte length of the `YYYY-MM-DD` date component.
const DATE_LEN: usize = 10;
/// Byte length of the `HH-MM-SS` time component.
const TIME_LEN: usize = 8;
/// Minimum directory name length: date, time, two separators, 1-byte prompt.
const MIN_NAME_LEN: usize = DATE_LEN + 1 + TIME_LEN + 1 + 1;

/// Parses a prompt directory name into `(date, time, prompt)`.
///
/// The prompt is NFC-normalised (macOS stores names in NFD, which would
/// otherwise make the same prompt compare unequal across platforms).
///
/// # Errors
///
/// [`CoreError::InvalidEntryName`] if the name is too short, the date or
/// time component is not fixed-width zero-padded digits, or the prompt is
/// empty.
pub fn parse_dir_name(name: &str) -> CoreResult<(String, String, String)> {
    let bytes = name.as_bytes();
    if bytes.len() < MIN_NAME_LEN {
        return Err(CoreError::InvalidEntryName(name.to_string()));
    }

    let date = &bytes[..DATE_LEN];
    let time = &bytes[DATE_LEN + 1..DATE_LEN + 1 + TIME_LEN];
    if bytes[DATE_LEN] != b'_'
        || bytes[DATE_LEN + 1 + TIME_LEN] != b'_'
        || !is_valid_date(date)
        || !is_valid_time(time)
    {
        return Err(CoreError::InvalidEntryName(name.to_string()));
    }

    // The first 20 bytes are ASCII, so these slices sit on char boundaries.
    let date = name[..DATE_LEN].to_string();
    let time = name[DATE_LEN + 1..DATE_LEN + 1 + TIME_LEN].to_string();
    let prompt: String = name[DATE_LEN + 1 + TIME_LEN + 1..].nfc().collect();

    Ok((date, time, prompt))
}

fn is_valid_date(bytes: &[u8]) -> bool {
    // YYYY-MM-DD
    bytes.len() == DATE_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn is_valid_time(bytes: &[u8]) -> bool {
    // HH-MM-SS
    bytes.len() == TIME_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
