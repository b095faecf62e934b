const POWER_ITERATIONS: usize = 1000;
const POWER_TOLERANCE: f64 = 1e-12;

#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Sample covariance matrix (d x d) of a set of rows.
pub fn covariance(rows: &[&[f64]]) -> Vec<Vec<f64>> {
    let d = rows.first().map_or(0, |r| r.len());
    let n = rows.len();
    if n == 0 {
        return Vec::new();
    }
    let mut mean = vec![0.0; d];
    for row in rows {
        for (m, &v) in mean.iter_mut().zip(row.iter()) {
            *m += v;
        }
    }
    mean.iter_mut().for_each(|m| *m /= n as f64);

    let denom = (n as f64 - 1.0).max(1.0);
    let mut cov = vec![vec![0.0; d]; d];
    for i in 0..d {
        for j in i..d {
            let s: f64 = rows
                .iter()
                .map(|r| (r[i] - mean[i]) * (r[j] - mean[j]))
                .sum();
            cov[i][j] = s / denom;
            cov[j][i] = s / denom;
        }
    }
    cov
}

/// Unit eigenvector of the largest eigenvalue of a symmetric PSD matrix.
///
/// Power iteration started from the column with the largest norm. The sign
/// is fixed so the component with the largest magnitude is positive. A zero
/// matrix yields the first axis.
pub fn dominant_eigenvector(matrix: &[Vec<f64>]) -> Vec<f64> {
    let d = matrix.len();
    if d == 0 {
        return Vec::new();
    }
    let mut first_axis = vec![0.0; d];
    first_axis[0] = 1.0;

    let column = |j: usize| -> Vec<f64> { matrix.iter().map(|row| row[j]).collect() };
    let start = (0..d)
        .map(|j| {
            let c = column(j);
            (j, dot(&c, &c))
        })
        .max_by(|a, b| a.1.total_cmp(&b.1).then(b.0.cmp(&a.0)))
        .map(|(j, _)| j)
        .unwrap_or(0);

    let mut v = column(start);
    let norm = dot(&v, &v).sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return first_axis;
    }
    v.iter_mut().for_each(|x| *x /= norm);

    for _ in 0..POWER_ITERATIONS {
        let w: Vec<f64> = matrix.iter().map(|row| dot(row, &v)).collect();
        let w_norm = dot(&w, &w).sqrt();
        if w_norm == 0.0 || !w_norm.is_finite() {
            break;
        }
        let next: Vec<f64> = w.iter().map(|x| x / w_norm).collect();
        let delta = next
            .iter()
            .zip(v.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt();
        v = next;
        if delta < POWER_TOLERANCE {
            break;
        }
    }

    let pivot = v
        .iter()
        .copied()
        .max_by(|a, b| a.abs().total_cmp(&b.abs()))
        .unwrap_or(0.0);
    if pivot < 0.0 {
        v.iter_mut().for_each(|x| *x = -*x);
    }
    v
}
