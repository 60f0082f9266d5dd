//! Score normalisation functions.

/// Spread below which a population is treated as having no variance.
const DEGENERATE_SPREAD: f64 = 1e-12;

/// Population minimum and maximum of the present values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Range over the `Some` entries, or `None` when nothing is present.
    pub fn of(values: &[Option<f64>]) -> Option<Self> {
        values.iter().flatten().fold(None, |acc, &v| match acc {
            None => Some(Range { min: v, max: v }),
            Some(r) => Some(Range { min: r.min.min(v), max: r.max.max(v) }),
        })
    }

    pub fn normalise(&self, value: f64) -> f64 {
        minmax_normalise(value, self.min, self.max)
    }
}

/// Min-max normalisation within a given range [min_val, max_val].
/// A zero-width range maps every value to 0.0.
pub fn minmax_normalise(value: f64, min_val: f64, max_val: f64) -> f64 {
    if (max_val - min_val).abs() < DEGENERATE_SPREAD {
        return 0.0;
    }
    ((value - min_val) / (max_val - min_val)).clamp(0.0, 1.0)
}

/// Min-max normalise a whole population.
///
/// Missing entries take the population minimum, so they score 0.0.
/// Returns scores in the same order as input.
pub fn minmax_population(values: &[Option<f64>]) -> Vec<f64> {
    match Range::of(values) {
        None => vec![0.0; values.len()],
        Some(range) => values
            .iter()
            .map(|v| v.map_or(0.0, |v| range.normalise(v)))
            .collect(),
    }
}
