//! Path utilities: expand ~, derive report paths from the input document.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `ticket.docx` → `ticket.<ext>`, next to the input.
pub fn sibling_with_extension(input: &Path, ext: &str) -> PathBuf {
    input.with_extension(ext)
}
