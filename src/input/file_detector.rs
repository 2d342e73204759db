//! Resume file type detection

use crate::cli::validate_file_extension;
use crate::error::{HireFlowError, Result};
use log::debug;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFileType {
    Pdf,
    Doc,
    Docx,
    Unknown,
}

/// Extensions the upload flow accepts
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

impl ResumeFileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => ResumeFileType::Pdf,
            "doc" => ResumeFileType::Doc,
            "docx" => ResumeFileType::Docx,
            _ => ResumeFileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(ResumeFileType::Unknown)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ResumeFileType::Unknown)
    }
}

/// File name and `file://` URL for an uploaded resume. The file must exist with an accepted
/// extension; its content is never read.
pub fn resume_source(path: &Path) -> Result<(String, String)> {
    validate_file_extension(path, &ACCEPTED_EXTENSIONS)
        .map_err(|e| HireFlowError::UnsupportedFormat(format!("{}: {}", path.display(), e)))?;

    if !path.exists() {
        return Err(HireFlowError::NotFound(format!("File not found: {}", path.display())));
    }
    debug!("Resume {} detected as {:?}", path.display(), ResumeFileType::from_path(path));

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| HireFlowError::InvalidInput(format!("Invalid file name: {}", path.display())))?
        .to_string();

    Ok((file_name, format!("file://{}", path.display())))
}
