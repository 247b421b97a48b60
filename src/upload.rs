//! Model-file intake checks for the quote widget.

use thiserror::Error;

pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("Please upload an STL file (.stl).")]
    NotStl,
    #[error("File is too large. Maximum size is {}.", format_file_size(*limit))]
    TooLarge { limit: u64 },
}

/// Name and size of the file currently feeding the estimator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
}

impl UploadedFile {
    pub fn accept(name: &str, size: u64, limit: u64) -> Result<Self, UploadRejection> {
        if !is_stl_name(name) {
            return Err(UploadRejection::NotStl);
        }
        if size > limit {
            return Err(UploadRejection::TooLarge { limit });
        }
        Ok(Self {
            name: name.to_string(),
            size,
        })
    }

    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

pub fn is_stl_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".stl")
}

/// Base-1024 size with at most two decimals, trailing zeros dropped
/// ("1.5 KB", "2 MB").
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}
