//! Flat index export format
//!
//! One line per distinct word, `word:pos0,pos1,...`, words in lexical order.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Result, XrefError};
use crate::tokenize::References;

/// Render an index in export format
pub fn render_index(references: &References) -> String {
    let mut out = String::new();
    for (word, positions) in references {
        out.push_str(word);
        out.push(':');
        let line = positions.iter().map(usize::to_string).collect::<Vec<_>>().join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write an index to a file that must not exist yet
pub fn write_new(path: &Path, references: &References) -> Result<()> {
    let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(XrefError::IoExists {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(XrefError::IoError {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    file.write_all(render_index(references).as_bytes())
        .map_err(|source| XrefError::IoError {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), words = references.len(), "Wrote index");
    Ok(())
}

/// Write an index to a file, replacing any previous content
pub fn write_truncate(path: &Path, references: &References) -> Result<()> {
    fs::write(path, render_index(references)).map_err(|source| XrefError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), words = references.len(), "Exported index");
    Ok(())
}
