// src/store.rs
//
// The two files a run leaves behind: the raw download cache and the final page.
// Both are overwritten whole on every run.

use std::{fs, path::Path};

use crate::acquire::RawDocument;
use crate::error::{Error, Result};

pub fn save_raw(path: &Path, raw: &RawDocument) -> Result<()> {
    write_file(path, raw.as_str())?;
    logf!("Saved raw programme ({} chunks) to {}", raw.chunk_count(), path.display());
    Ok(())
}

/// Read back a raw document from an earlier run.
pub fn load_raw(path: &Path) -> Result<RawDocument> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let raw = RawDocument::new(text);
    logf!("Reusing raw programme ({} chunks) from {}", raw.chunk_count(), path.display());
    Ok(raw)
}

pub fn save_page(path: &Path, page: &str) -> Result<()> {
    write_file(path, page)?;
    logf!("Wrote {}", path.display());
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let e = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(Error::io(dir, e));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}
