use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Opens the CSV destination: the given file, or stdout when `path` is `None`.
pub fn open_output(path: Option<&str>) -> Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => {
            let full_path = Path::new(path);
            if let Some(parent) = full_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            tracing::info!("📁 Writing CSV to {}", full_path.display());
            Ok(Box::new(File::create(full_path)?))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
