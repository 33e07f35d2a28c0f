use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::OutputMode;
use crate::error::{AppError, Result};

/// Default file written in [`OutputMode::File`].
pub const DEFAULT_OUTPUT_FILE: &str = "fpick-output.txt";

/// Where the output ended up, for the closing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    Stdout,
    Clipboard,
    File(PathBuf),
}

/// Send `text` to the destination named by `mode`.
pub fn emit(mode: OutputMode, text: &str, output_file: &Path) -> Result<Emitted> {
    match mode {
        OutputMode::Stdout => {
            write_to(&mut io::stdout().lock(), text)?;
            Ok(Emitted::Stdout)
        }
        OutputMode::File => {
            write_file(output_file, text)?;
            Ok(Emitted::File(output_file.to_path_buf()))
        }
        OutputMode::Clipboard => {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
            clipboard
                .set_text(text.to_string())
                .map_err(|e| AppError::Clipboard(e.to_string()))?;
            Ok(Emitted::Clipboard)
        }
    }
}

fn write_to(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "output written");
    Ok(())
}
