// Core structs: Movie, WinningRecord, IntervalRecord, AnalysisResult
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// One line of the award list as stored in the `movies` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub year: i32,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: bool,
}

/// A winning row exactly as the data source returns it; `recipients` is still
/// the raw comma-delimited producer string.
#[derive(Debug, Clone, PartialEq)]
pub struct WinningRow {
    pub year: i32,
    pub recipients: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WinningRecord {
    pub year: i32,
    pub recipients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalRecord {
    pub producer: String,
    pub interval: i64,
    pub previous_win: i32,
    pub following_win: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub min: Vec<IntervalRecord>,
    pub max: Vec<IntervalRecord>,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum ParserError {
    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: invalid year `{value}`")]
    InvalidYear { line: usize, value: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParserError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
