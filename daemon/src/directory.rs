//! Pre-authorization sources for the gate's visitor directory.

use crate::config::ConfigError;
use serde::Deserialize;
use society_types::{Timestamp, VisitorStatus};
use society_verification::{VisitorDirectory, VisitorRecord};
use std::path::Path;

/// Layout of a directory file: a list of `[[visitors]]` tables.
#[derive(Debug, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    visitors: Vec<VisitorRecord>,
}

/// Load visitors from a TOML directory file.
pub fn load_directory_file(path: &Path) -> Result<VisitorDirectory, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_directory(&content)
}

pub fn parse_directory(s: &str) -> Result<VisitorDirectory, ConfigError> {
    let file: DirectoryFile = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok(VisitorDirectory::load(file.visitors)?)
}

/// The portal's sample visitor log, with two passes pre-authorized for today.
pub fn demo_directory() -> Result<VisitorDirectory, ConfigError> {
    let records = [
        VisitorRecord::new("1", "Ravi Sharma", "A-101")
            .with_vehicle("MH-02-AB-1234")
            .with_status(VisitorStatus::Exited)
            .with_expected_at(Timestamp::new(1_722_160_800))
            .with_exit_at(Timestamp::new(1_722_166_200)),
        VisitorRecord::new("2", "Priya Singh", "B-304")
            .with_purpose("Service")
            .with_status(VisitorStatus::Inside)
            .with_expected_at(Timestamp::new(1_722_159_900)),
        VisitorRecord::new("3", "Delivery Agent", "C-502")
            .with_purpose("Delivery")
            .with_vehicle("MH-04-CD-5678")
            .with_status(VisitorStatus::Exited)
            .with_expected_at(Timestamp::new(1_722_159_000))
            .with_exit_at(Timestamp::new(1_722_159_300)),
        VisitorRecord::new("4", "Amit Patel", "A-210")
            .with_purpose("Family Guest")
            .with_access_code("VP-2024-001")
            .with_expected_at(Timestamp::new(1_722_261_600)),
        VisitorRecord::new("5", "Sunita Gupta", "D-112")
            .with_vehicle("MH-12-EF-9012")
            .with_status(VisitorStatus::Exited)
            .with_expected_at(Timestamp::new(1_722_106_800))
            .with_exit_at(Timestamp::new(1_722_117_600)),
        VisitorRecord::new("6", "Urban Company", "C-502")
            .with_purpose("Service")
            .with_access_code("VP-2024-002")
            .with_vehicle("MH-02-BZ-9999")
            .with_expected_at(Timestamp::new(1_722_267_000)),
    ];
    Ok(VisitorDirectory::load(records)?)
}
