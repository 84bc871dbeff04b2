/// Extract a short type name from the full module path.
///
/// Given `"my_crate::some_module::MyType"`, returns `"MyType"`.
pub fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}

/// Clamp a sub-score into the rubric range.
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Arithmetic mean, with the empty case pinned to 0.0 rather than NaN.
pub fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
