// src/utils.rs
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read a file, treating a missing file as `None`
pub fn read_if_found(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(c) => Ok(Some(c)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read file: {}", path.display())),
    }
}

/// Ensure the parent directory of a file exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Expand `~` and `$VAR`, then make a relative path absolute against the
/// current working directory
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    let path = match path.to_str() {
        Some(raw) => PathBuf::from(
            shellexpand::full(raw)
                .with_context(|| format!("Failed to expand path: {}", raw))?
                .into_owned(),
        ),
        None => path.to_path_buf(),
    };

    if path.is_absolute() {
        Ok(path)
    } else {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(current_dir.join(path))
    }
}

/// Collapse runs of whitespace and blank lines into single spaces
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedy word wrap used by the text renderers
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
