use crate::analyzer::{Analyzer, IntervalAnalyzer};
use crate::model::{AnalysisResult, StorageError};
use crate::normalizer::normalize_all;
use crate::storage::WinnerSource;
use std::sync::Arc;
use tracing::info;

/// Producer win-interval queries over a winner source.
pub struct IntervalService {
    source: Arc<dyn WinnerSource>,
    analyzer: IntervalAnalyzer,
}

impl IntervalService {
    pub fn new(source: Arc<dyn WinnerSource>) -> Self {
        Self {
            source,
            analyzer: IntervalAnalyzer::new(),
        }
    }

    /// Fetches every winning row and reports the shortest and longest gaps
    /// between consecutive wins. Data source errors are returned unchanged.
    pub async fn producer_intervals(&self) -> Result<AnalysisResult, StorageError> {
        let rows = self.source.fetch_winning_records().await?;
        let records = normalize_all(&rows);
        let result = self.analyzer.compute_intervals(&records);

        info!(
            "Producer intervals over {} winning records: {} min, {} max",
            records.len(),
            result.min.len(),
            result.max.len()
        );
        Ok(result)
    }
}
