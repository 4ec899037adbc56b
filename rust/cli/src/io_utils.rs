//! File I/O helpers shared by the commands.
//!
//! - Reading round record files with automatic `.zst` decompression
//! - Finding record files under a directory
//! - Ensuring parent directories exist before file writes
//!
//! Errors are returned as `String` so commands can wrap them in whichever
//! [`crate::CliError`] variant fits.

use std::path::{Path, PathBuf};

/// Read a text file, decompressing it first when the path ends with `.zst`.
///
/// A leading UTF-8 BOM is stripped.
///
/// # Example
///
/// ```rust,no_run
/// # use blackjack_cli::io_utils::read_text_auto;
/// let plain = read_text_auto("data/rounds.jsonl").unwrap();
/// let compressed = read_text_auto("data/rounds.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Whether a file name looks like a round record file.
pub fn is_record_file(name: &str) -> bool {
    name.ends_with(".jsonl") || name.ends_with(".jsonl.zst")
}

/// Every record file below `dir`, recursively, in sorted order.
/// Unreadable subdirectories are skipped.
pub fn find_record_files(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        let Ok(rd) = std::fs::read_dir(&d) else {
            continue;
        };
        for entry in rd.filter_map(Result::ok) {
            let p = entry.path();
            if p.is_dir() {
                stack.push(p);
            } else if p
                .file_name()
                .and_then(|f| f.to_str())
                .is_some_and(is_record_file)
            {
                found.push(p);
            }
        }
    }
    found.sort();
    found
}

/// Ensure the parent directory of `path` exists, creating it if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
