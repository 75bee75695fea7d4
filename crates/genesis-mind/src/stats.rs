//! Descriptive statistics over sample slices.
//!
//! Every function is total: empty or degenerate input yields `None` or a
//! zero correlation instead of `NaN`.

/// Arithmetic mean, `None` when empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance, `None` when empty.
pub fn variance(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let squares: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    Some(squares / values.len() as f64)
}

/// Pearson correlation of two equally long series.
///
/// Returns `0.0` when the series are empty, differ in length, or either has
/// no spread.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() {
        return 0.0;
    }
    let (Some(mx), Some(my)) = (mean(xs), mean(ys)) else {
        return 0.0;
    };

    let mut covariance = 0.0;
    let mut spread_x = 0.0;
    let mut spread_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        covariance += dx * dy;
        spread_x += dx * dx;
        spread_y += dy * dy;
    }

    if spread_x > 0.0 && spread_y > 0.0 {
        covariance / (spread_x * spread_y).sqrt()
    } else {
        0.0
    }
}
