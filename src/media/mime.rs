use std::path::Path;

use mime_guess::mime::{self, Mime};

/// Video containers whose MIME string is pinned rather than looked up.
///
/// Looked up before the `mime_guess` database so that container types
/// players care about always resolve to the same string.
pub const VIDEO_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/mp4"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("mov", "video/quicktime"),
    ("ts", "video/mp2t"),
    ("m2ts", "video/mp2t"),
    ("mts", "video/mp2t"),
    ("mpg", "video/mpeg"),
    ("mpeg", "video/mpeg"),
    ("wmv", "video/x-ms-wmv"),
    ("flv", "video/x-flv"),
    ("ogv", "video/ogg"),
    ("webm", "video/webm"),
    ("3gp", "video/3gpp"),
];

/// Resolve a content type for `path` from its extension.
///
/// Returns `None` when the path has no extension or the extension is
/// unknown. Extensions are matched case-insensitively.
pub fn classify(path: &Path) -> Option<Mime> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();

    if let Some((_, pinned)) = VIDEO_TYPES.iter().find(|(e, _)| *e == ext) {
        return pinned.parse().ok();
    }

    mime_guess::from_ext(&ext).first()
}

/// True when the top-level type is `video` (`video/mp4`, `video/x-matroska`, ...).
pub fn is_video(content_type: &Mime) -> bool {
    content_type.type_() == mime::VIDEO
}
