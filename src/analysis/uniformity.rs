//! Pearson chi-square goodness-of-fit against a uniform distribution.

/// Standard normal quantile for a 0.999 one-sided test.
const Z_999: f64 = 3.090;

/// Chi-square test result.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquare {
    /// Pearson statistic: sum of `(observed - expected)^2 / expected`.
    pub statistic: f64,
    /// Number of bins minus one.
    pub degrees_of_freedom: usize,
    /// Total observations.
    pub samples: u64,
}

impl ChiSquare {
    /// Computes the statistic for `counts` against equal expected counts.
    pub fn from_counts(counts: &[u64]) -> Self {
        let samples: u64 = counts.iter().sum();
        let degrees_of_freedom = counts.len().saturating_sub(1);

        if samples == 0 || counts.len() < 2 {
            return Self {
                statistic: 0.0,
                degrees_of_freedom,
                samples,
            };
        }

        let expected = samples as f64 / counts.len() as f64;
        let statistic = counts
            .iter()
            .map(|&observed| (observed as f64 - expected).powi(2) / expected)
            .sum();

        Self {
            statistic,
            degrees_of_freedom,
            samples,
        }
    }

    /// Approximate upper quantile of the chi-square distribution.
    ///
    /// Wilson-Hilferty transform; `z` is the standard normal quantile.
    pub fn critical_value(degrees_of_freedom: usize, z: f64) -> f64 {
        if degrees_of_freedom == 0 {
            return 0.0;
        }
        let k = degrees_of_freedom as f64;
        let h = 2.0 / (9.0 * k);
        k * (1.0 - h + z * h.sqrt()).powi(3)
    }

    /// Returns true unless the counts are too uneven at the 0.1% level.
    pub fn is_consistent_with_uniform(&self) -> bool {
        self.statistic <= Self::critical_value(self.degrees_of_freedom, Z_999)
    }
}

/// Counts occurrences of each index in `0..bins`.
///
/// Indices outside the range are ignored.
pub fn tally(indices: impl IntoIterator<Item = usize>, bins: usize) -> Vec<u64> {
    let mut counts = vec![0u64; bins];
    for index in indices {
        if let Some(count) = counts.get_mut(index) {
            *count += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_counts_zero_statistic() {
        let result = ChiSquare::from_counts(&[50, 50, 50, 50]);

        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.degrees_of_freedom, 3);
        assert!(result.is_consistent_with_uniform());
    }

    #[test]
    fn test_known_statistic() {
        // expected 20 per bin: (100 + 0 + 100) / 20
        let result = ChiSquare::from_counts(&[10, 20, 30]);
        assert!((result.statistic - 10.0).abs() < 1e-9);
        assert_eq!(result.samples, 60);
    }

    #[test]
    fn test_skewed_counts_rejected() {
        let result = ChiSquare::from_counts(&[1000, 10, 10, 10]);
        assert!(!result.is_consistent_with_uniform());
    }

    #[test]
    fn test_critical_value_close_to_table() {
        // Table value for df = 10 at 0.999 is 29.588
        let approx = ChiSquare::critical_value(10, Z_999);
        assert!((approx - 29.588).abs() < 0.5);
    }

    #[test]
    fn test_tally_ignores_out_of_range() {
        let counts = tally([0, 1, 1, 2, 7], 3);
        assert_eq!(counts, [1, 2, 1]);
    }
}
