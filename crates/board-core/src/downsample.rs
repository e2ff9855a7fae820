// File: crates/board-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets selection for long time series.

/// Indices of at most `threshold` points that preserve the overall shape of `points`.
/// First and last points are always selected; indices come back ascending.
pub fn lttb_indices(points: &[(f64, f64)], threshold: usize) -> Vec<usize> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return (0..n).collect(); }
    if threshold == 1 { return vec![0]; }
    if threshold == 2 { return vec![0, n - 1]; }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let bucket_bounds = |i: usize| -> (usize, usize) {
        let start = (1.0 + i as f64 * bucket_size).floor() as usize;
        let end = ((1.0 + (i + 1) as f64 * bucket_size).floor() as usize).min(n - 1);
        (start, end.max(start + 1))
    };

    let mut picked = Vec::with_capacity(threshold);
    picked.push(0);
    let mut anchor = 0usize;

    for i in 0..(threshold - 2) {
        let (start, end) = bucket_bounds(i);

        // Average of the following bucket (or the last point for the final bucket).
        let (avg_x, avg_y) = if i + 1 < threshold - 2 {
            let (ns, ne) = bucket_bounds(i + 1);
            let count = (ne - ns) as f64;
            let (sx, sy) = points[ns..ne].iter().fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
            (sx / count, sy / count)
        } else {
            points[n - 1]
        };

        let (ax, ay) = points[anchor];
        let mut best = start;
        let mut best_area = -1.0f64;
        for (k, &(x, y)) in points.iter().enumerate().take(end).skip(start) {
            let area = ((ax - avg_x) * (y - ay) - (ax - x) * (avg_y - ay)).abs();
            if area > best_area {
                best_area = area;
                best = k;
            }
        }
        picked.push(best);
        anchor = best;
    }

    picked.push(n - 1);
    picked
}
