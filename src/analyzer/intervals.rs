use crate::model::{AnalysisResult, IntervalRecord, WinningRecord};
use std::collections::HashMap;
use tracing::debug;

/// Trait defining the interface for a win-interval analyzer.
pub trait Analyzer {
    fn compute_intervals(&self, records: &[WinningRecord]) -> AnalysisResult;
}

/// Groups wins by producer and reports the shortest and longest gaps
/// between consecutive wins, keeping every tie.
pub struct IntervalAnalyzer;

impl IntervalAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for IntervalAnalyzer {
    fn compute_intervals(&self, records: &[WinningRecord]) -> AnalysisResult {
        let intervals: Vec<IntervalRecord> = group_wins(records)
            .into_iter()
            .flat_map(|(producer, years)| consecutive_intervals(producer, years))
            .collect();

        let (Some(min_value), Some(max_value)) = (
            intervals.iter().map(|i| i.interval).min(),
            intervals.iter().map(|i| i.interval).max(),
        ) else {
            debug!("No producer with more than one win");
            return AnalysisResult::default();
        };

        debug!(
            "Derived {} intervals: min = {}, max = {}",
            intervals.len(),
            min_value,
            max_value
        );

        AnalysisResult {
            min: with_interval(&intervals, min_value),
            max: with_interval(&intervals, max_value),
        }
    }
}

/// Win years per producer, in the order producers are first seen.
fn group_wins(records: &[WinningRecord]) -> Vec<(&str, Vec<i32>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut grouped: Vec<(&str, Vec<i32>)> = Vec::new();

    for record in records {
        for producer in &record.recipients {
            let slot = *index.entry(producer.as_str()).or_insert_with(|| {
                grouped.push((producer.as_str(), Vec::new()));
                grouped.len() - 1
            });
            grouped[slot].1.push(record.year);
        }
    }

    grouped
}

fn consecutive_intervals(producer: &str, mut years: Vec<i32>) -> Vec<IntervalRecord> {
    years.sort();
    years
        .windows(2)
        .map(|pair| IntervalRecord {
            producer: producer.to_string(),
            interval: i64::from(pair[1]) - i64::from(pair[0]),
            previous_win: pair[0],
            following_win: pair[1],
        })
        .collect()
}

fn with_interval(intervals: &[IntervalRecord], value: i64) -> Vec<IntervalRecord> {
    intervals
        .iter()
        .filter(|i| i.interval == value)
        .cloned()
        .collect()
}
