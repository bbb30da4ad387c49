use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Score;

/// A scored episode, tagged with the difficulty bucket it's reported under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeResult {
    pub sample_id: String,
    pub difficulty: u8,
    pub score: Score,
}

/// Accuracy within a single difficulty bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub count: usize,
    pub accuracy: f64,
}

/// Aggregate results of an evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    pub started_at: DateTime<Local>,
    /// Episodes that were scored.
    pub total: usize,
    /// Episodes aborted by a fatal error before they could be scored.
    pub errored: usize,
    pub accuracy: f64,
    pub stderr: f64,
    pub by_difficulty: BTreeMap<u8, GroupStats>,
}

impl EvalReport {
    pub fn new(started_at: DateTime<Local>, results: &[EpisodeResult], errored: usize) -> Self {
        let values = results
            .iter()
            .map(|r| r.score.value.as_f64())
            .collect::<Vec<_>>();

        let mut buckets: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
        for result in results {
            buckets
                .entry(result.difficulty)
                .or_default()
                .push(result.score.value.as_f64());
        }
        let by_difficulty = buckets
            .into_iter()
            .map(|(difficulty, values)| {
                (
                    difficulty,
                    GroupStats {
                        count: values.len(),
                        accuracy: accuracy(&values),
                    },
                )
            })
            .collect();

        EvalReport {
            started_at,
            total: results.len(),
            errored,
            accuracy: accuracy(&values),
            stderr: stderr(&values),
            by_difficulty,
        }
    }
}

/// Mean of the scores, or 0 if there are none.
pub fn accuracy(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Standard error of the mean, using the sample standard deviation.
/// Zero when there are fewer than two scores.
pub fn stderr(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = accuracy(values);
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (variance / n as f64).sqrt()
}
