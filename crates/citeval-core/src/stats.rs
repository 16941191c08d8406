//! Order statistics for score distributions
//!
//! Quantiles are plain order statistics: the value at index `n * k / d` of the
//! ascending sample. Even-length samples therefore report the upper of the two
//! middle values as the median rather than their average.

use serde::{Deserialize, Serialize};

/// Descriptive statistics over a non-empty sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub p25: f64,
    pub p75: f64,
}

impl OrderStats {
    /// Compute statistics from finite values; `None` if nothing remains
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted: Vec<f64> = values.into_iter().filter(|x| x.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;

        Some(Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            median: order_statistic(&sorted, 1, 2),
            p25: order_statistic(&sorted, 1, 4),
            p75: order_statistic(&sorted, 3, 4),
        })
    }
}

/// Value at index `len * numerator / denominator` of an ascending, non-empty slice
pub fn order_statistic(sorted: &[f64], numerator: usize, denominator: usize) -> f64 {
    let idx = sorted.len() * numerator / denominator;
    sorted[idx.min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        let stats = OrderStats::from_values([92.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, 92.0);
        assert_eq!(stats.max, 92.0);
        assert_eq!(stats.mean, 92.0);
        assert_eq!(stats.median, 92.0);
        assert_eq!(stats.p25, 92.0);
        assert_eq!(stats.p75, 92.0);
    }

    #[test]
    fn test_even_count_takes_upper_middle() {
        let stats = OrderStats::from_values([4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.p25, 2.0);
        assert_eq!(stats.p75, 4.0);
        assert!((stats.mean - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_and_non_finite() {
        assert!(OrderStats::from_values(Vec::new()).is_none());
        assert!(OrderStats::from_values([f64::NAN]).is_none());

        let stats = OrderStats::from_values([1.0, f64::NAN, 5.0]).unwrap();
        assert_eq!(stats.count, 2);
    }
}
