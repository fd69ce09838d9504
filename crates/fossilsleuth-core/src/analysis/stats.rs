/// Small descriptive-statistics toolkit used by the analysis blocks.
///
/// All functions ignore non-finite input and return `None` when there is
/// not enough data rather than producing NaN.

/// Sample mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sample standard deviation (n − 1 denominator).
pub fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Sort a copy of the finite values ascending.
pub fn sorted_finite(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut v: Vec<f64> = values.into_iter().filter(|x| x.is_finite()).collect();
    v.sort_by(f64::total_cmp);
    v
}

/// Quantile `q ∈ [0, 1]` of already-sorted data, linearly interpolated
/// between the two nearest order statistics.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Five-number summary plus outliers, the numbers a box plot draws.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest observation within `q1 - 1.5 * IQR`.
    pub whisker_low: f64,
    /// Largest observation within `q3 + 1.5 * IQR`.
    pub whisker_high: f64,
    /// Observations outside the whiskers, ascending.
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Whisker reach as a multiple of the interquartile range.
    pub const WHISKER_IQR: f64 = 1.5;

    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let sorted = sorted_finite(values);
        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;

        let iqr = q3 - q1;
        let low_fence = q1 - Self::WHISKER_IQR * iqr;
        let high_fence = q3 + Self::WHISKER_IQR * iqr;

        // Whiskers end at real observations, never at the fence itself.
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < whisker_low || v > whisker_high)
            .collect();

        Some(Self {
            count: sorted.len(),
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Gaussian kernel density estimate evaluated on an even grid.
#[derive(Debug, Clone)]
pub struct DensityCurve {
    /// Kernel bandwidth (standard deviation of each Gaussian bump).
    pub bandwidth: f64,
    /// `(x, density)` pairs, ascending in `x`.
    pub points: Vec<(f64, f64)>,
}

impl DensityCurve {
    /// The grid extends this many bandwidths past the data range.
    pub const CUT: f64 = 3.0;
    pub const DEFAULT_GRID: usize = 200;

    /// Estimate with Scott's rule bandwidth: `σ · n^(-1/5)`.
    ///
    /// Returns `None` with fewer than two values or zero spread, where a
    /// density is undefined.
    pub fn estimate(values: &[f64], grid_size: usize) -> Option<Self> {
        let data = sorted_finite(values.iter().copied());
        let sigma = std_dev(&data)?;
        if sigma <= 0.0 || grid_size < 2 {
            return None;
        }
        let bandwidth = sigma * (data.len() as f64).powf(-0.2);

        let lo = data[0] - Self::CUT * bandwidth;
        let hi = data[data.len() - 1] + Self::CUT * bandwidth;
        let step = (hi - lo) / (grid_size - 1) as f64;

        let norm = 1.0 / (data.len() as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
        let points = (0..grid_size)
            .map(|i| {
                let x = lo + step * i as f64;
                let density: f64 = data
                    .iter()
                    .map(|&v| {
                        let z = (x - v) / bandwidth;
                        (-0.5 * z * z).exp()
                    })
                    .sum::<f64>()
                    * norm;
                (x, density)
            })
            .collect();

        Some(Self { bandwidth, points })
    }

    /// Highest density on the grid.
    pub fn peak(&self) -> f64 {
        self.points.iter().map(|p| p.1).fold(0.0, f64::max)
    }

    /// Trapezoidal area under the curve.
    pub fn area(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
            .sum()
    }
}

/// Least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Number of points the line was fitted on.
    pub n: usize,
}

impl LinearFit {
    /// Ordinary least squares over `(x, y)` pairs.
    ///
    /// `None` when fewer than two points remain or every `x` is identical.
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        let pts: Vec<(f64, f64)> = points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        if pts.len() < 2 {
            return None;
        }
        let n = pts.len() as f64;
        let mean_x = pts.iter().map(|p| p.0).sum::<f64>() / n;
        let mean_y = pts.iter().map(|p| p.1).sum::<f64>() / n;

        let sxx: f64 = pts.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
        if sxx == 0.0 {
            return None;
        }
        let sxy: f64 = pts.iter().map(|p| (p.0 - mean_x) * (p.1 - mean_y)).sum();

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
            n: pts.len(),
        })
    }

    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!(close(quantile_sorted(&sorted, 0.25).unwrap(), 1.75));
        assert!(close(quantile_sorted(&sorted, 0.5).unwrap(), 2.5));
        assert!(close(quantile_sorted(&sorted, 0.75).unwrap(), 3.25));
        assert!(close(quantile_sorted(&sorted, 0.0).unwrap(), 1.0));
        assert!(close(quantile_sorted(&sorted, 1.0).unwrap(), 4.0));
        assert_eq!(quantile_sorted(&[], 0.5), None);
    }

    #[test]
    fn std_dev_uses_sample_denominator() {
        // Var = ((−1)² + 0 + 1²) / 2 = 1.
        assert!(close(std_dev(&[1.0, 2.0, 3.0]).unwrap(), 1.0));
        assert_eq!(std_dev(&[5.0]), None);
    }

    #[test]
    fn box_stats_separate_outliers() {
        let stats = BoxStats::from_values([1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert_eq!(stats.count, 6);
        assert!(close(stats.q1, 2.25));
        assert!(close(stats.median, 3.5));
        assert!(close(stats.q3, 4.75));
        assert_eq!(stats.outliers, vec![100.0]);
        assert!(close(stats.whisker_high, 5.0));
        assert!(close(stats.whisker_low, 1.0));
    }

    /// Whiskers land on observations inside the fences, not on the fences.
    #[test]
    fn whiskers_stop_at_observations() {
        let stats = BoxStats::from_values([10.0, 11.0, 12.0, 13.0, 14.0]).unwrap();
        assert!(close(stats.whisker_low, 10.0));
        assert!(close(stats.whisker_high, 14.0));
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn box_stats_of_nothing_is_none() {
        assert!(BoxStats::from_values(std::iter::empty()).is_none());
        assert!(BoxStats::from_values([f64::NAN]).is_none());
    }

    #[test]
    fn box_stats_single_value_collapses() {
        let stats = BoxStats::from_values([7.0]).unwrap();
        assert!(close(stats.q1, 7.0) && close(stats.q3, 7.0));
        assert!(close(stats.whisker_low, 7.0) && close(stats.whisker_high, 7.0));
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn density_integrates_to_one() {
        let values = [2.0, 3.5, 4.0, 6.0, 9.0, 12.0, 12.5, 20.0, 26.0, 35.0];
        let curve = DensityCurve::estimate(&values, DensityCurve::DEFAULT_GRID).unwrap();
        assert_eq!(curve.points.len(), DensityCurve::DEFAULT_GRID);
        assert!((curve.area() - 1.0).abs() < 0.01, "area {}", curve.area());
        assert!(curve.peak() > 0.0);
    }

    #[test]
    fn density_grid_extends_past_data() {
        let values = [1.0, 2.0, 3.0];
        let curve = DensityCurve::estimate(&values, 50).unwrap();
        let first = curve.points.first().unwrap().0;
        let last = curve.points.last().unwrap().0;
        assert!(close(first, 1.0 - DensityCurve::CUT * curve.bandwidth));
        assert!(close(last, 3.0 + DensityCurve::CUT * curve.bandwidth));
    }

    #[test]
    fn density_undefined_without_spread() {
        assert!(DensityCurve::estimate(&[4.0, 4.0, 4.0], 10).is_none());
        assert!(DensityCurve::estimate(&[4.0], 10).is_none());
    }

    #[test]
    fn linear_fit_recovers_exact_line() {
        let pts: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 3.0 - 0.5 * i as f64)).collect();
        let fit = LinearFit::fit(&pts).unwrap();
        assert!(close(fit.slope, -0.5));
        assert!(close(fit.intercept, 3.0));
        assert_eq!(fit.n, 10);
        assert!(close(fit.predict(4.0), 1.0));
    }

    #[test]
    fn linear_fit_needs_x_variance() {
        assert!(LinearFit::fit(&[(1.0, 2.0), (1.0, 5.0)]).is_none());
        assert!(LinearFit::fit(&[(1.0, 2.0)]).is_none());
    }
}
