//! Fixed-window moving statistics over a mid-price history
//!
//! All functions are pure and return `None` instead of dividing by zero:
//! an empty or too-short window is a cold start, not an error.

/// Arithmetic mean of the whole retained window
#[inline]
pub fn simple_mean(history: &[f64]) -> Option<f64> {
    if history.is_empty() {
        return None;
    }
    Some(history.iter().sum::<f64>() / history.len() as f64)
}

/// Mean of the last `n` entries; `None` if `n == 0` or fewer than `n` exist
#[inline]
pub fn windowed_mean(history: &[f64], n: usize) -> Option<f64> {
    simple_mean(last_n(history, n)?)
}

/// Mean of the `n` entries immediately before the last `skip` entries
///
/// With `skip = 5, n = 5` this is the `[-10..-5]` slice: the window that
/// precedes a 5-tick short window without overlapping it.
pub fn prior_window_mean(history: &[f64], skip: usize, n: usize) -> Option<f64> {
    if n == 0 || history.len() < skip + n {
        return None;
    }
    let end = history.len() - skip;
    simple_mean(&history[end - n..end])
}

/// Population standard deviation of the last `n` entries around that
/// window's own mean
pub fn stddev(history: &[f64], n: usize) -> Option<f64> {
    let window = last_n(history, n)?;
    let mean = simple_mean(window)?;
    let variance = window.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / window.len() as f64;
    Some(variance.sqrt())
}

/// Population standard deviation of the whole retained window
#[inline]
pub fn full_stddev(history: &[f64]) -> Option<f64> {
    stddev(history, history.len())
}

#[inline]
fn last_n(history: &[f64], n: usize) -> Option<&[f64]> {
    if n == 0 || history.len() < n {
        return None;
    }
    Some(&history[history.len() - n..])
}
