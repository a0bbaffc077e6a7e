// Analyzer module: win-interval analysis over producer win histories.

pub mod intervals;

pub use intervals::{Analyzer, IntervalAnalyzer};
