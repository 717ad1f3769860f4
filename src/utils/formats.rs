use std::path::Path;

/// File extension handled by the padder, compared case-insensitively.
pub const PNG_EXTENSION: &str = "png";

/// Check if the file name ends in `.png` (`a.png`, `b.PNG`, `c.Png`, `.png`, ...)
pub fn is_png_path(path: impl AsRef<Path>) -> bool {
    let suffix = format!(".{PNG_EXTENSION}");
    path.as_ref()
        .file_name()
        .is_some_and(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(&suffix))
}

/// Get the file name component as a display string.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
