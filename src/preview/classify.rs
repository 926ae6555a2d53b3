//! File classification for the preview pane.
//!
//! Extension allow-lists are consulted first; content sniffing over the first
//! [`SNIFF_LEN`] bytes only runs when the extension says nothing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected when sniffing content.
pub const SNIFF_LEN: usize = 512;

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "svg", "ico", "tiff",
];

const TEXT_EXTENSIONS: &[&str] = &[
    "md", "markdown", "txt", "go", "c", "cpp", "h", "py", "js", "ts", "html", "css", "json",
    "yaml", "yml", "toml", "sh", "mod", "sum",
];

const OCTET_STREAM: &str = "application/octet-stream";

/// How a file is previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// Drawn as a graphics overlay.
    Image,
    /// Read, sniffed and highlighted into the viewport.
    Text,
}

/// Outcome of sniffing a file's leading bytes on the text path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sniffed {
    Text,
    Binary { mime: String },
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

fn has_extension_in(path: &Path, list: &[&str]) -> bool {
    extension(path).is_some_and(|ext| list.contains(&ext.as_str()))
}

/// Decides whether `path` is previewed as an image or as text.
///
/// Unreadable and empty files are text; the text path reports the error.
#[must_use]
pub fn classify(path: &Path) -> PreviewKind {
    if has_extension_in(path, IMAGE_EXTENSIONS) {
        return PreviewKind::Image;
    }

    let Ok(head) = read_head(path) else {
        return PreviewKind::Text;
    };

    match infer::get(&head) {
        Some(kind) if kind.matcher_type() == infer::MatcherType::Image => PreviewKind::Image,
        _ => PreviewKind::Text,
    }
}

/// Returns `true` when `path` has an extension known to hold text.
#[must_use]
pub fn is_known_text(path: &Path) -> bool {
    has_extension_in(path, TEXT_EXTENSIONS)
}

/// Sniffs the leading bytes of already-read content.
///
/// Audio and video signatures, and content that does not look like text,
/// are binary. The reported MIME type is the detected one, or
/// `application/octet-stream` when nothing is recognized.
#[must_use]
pub fn sniff(content: &[u8]) -> Sniffed {
    let head = &content[..content.len().min(SNIFF_LEN)];
    let detected = infer::get(head);

    if let Some(kind) = detected {
        if matches!(
            kind.matcher_type(),
            infer::MatcherType::Audio | infer::MatcherType::Video
        ) {
            return Sniffed::Binary {
                mime: kind.mime_type().to_string(),
            };
        }
    }

    if content_inspector::inspect(head).is_binary() {
        let mime = detected.map_or(OCTET_STREAM, |kind| kind.mime_type());
        return Sniffed::Binary {
            mime: mime.to_string(),
        };
    }

    Sniffed::Text
}

fn read_head(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut head = Vec::with_capacity(SNIFF_LEN);
    File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut head)?;
    Ok(head)
}
