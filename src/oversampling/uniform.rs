use rand::Rng;
use rand::rngs::StdRng;

/// `x + gap * (z - x)` with an independent gap in [0, 1) per feature.
///
/// Features flagged in `nominal` hold unordered codes: they copy `x`'s code
/// when the gap is below one half and `z`'s otherwise.
pub fn interpolate(x: &[f64], z: &[f64], nominal: &[bool], rng: &mut StdRng) -> Vec<f64> {
    x.iter()
        .zip(z.iter())
        .enumerate()
        .map(|(j, (&p, &n))| {
            let gap: f64 = rng.random();
            if nominal.get(j).copied().unwrap_or(false) {
                if gap < 0.5 { p } else { n }
            } else {
                p + gap * (n - p)
            }
        })
        .collect()
}
