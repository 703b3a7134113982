// File: crates/svgchart-core/src/functional.rs
// Summary: Small functional helpers for aligning series of uneven length.

/// Produce `length` empty slots.
pub fn times<T>(length: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(length).collect()
}

/// Fold step that treats a missing value as zero. Pairs with [`serial_map`] for stacked totals.
#[inline]
pub fn sum(previous: f64, current: Option<f64>) -> f64 {
    previous + current.unwrap_or(0.0)
}

/// Map over several sequences in lockstep.
///
/// The output has the length of the longest input. For each index the callback
/// receives one entry per input sequence: `Some(&value)` where that sequence has
/// a value at the index, `None` where it is already exhausted.
///
/// ```
/// use svgchart_core::serial_map;
///
/// let data = vec![vec![1, 2], vec![3], vec![]];
/// let totals = serial_map(&data, |row: &[Option<&i32>]| row.iter().flatten().copied().sum::<i32>());
/// assert_eq!(totals, vec![4, 2]);
/// ```
pub fn serial_map<T, S, R, F>(sequences: &[S], mut cb: F) -> Vec<R>
where
    S: AsRef<[T]>,
    F: FnMut(&[Option<&T>]) -> R,
{
    let len = sequences.iter().map(|s| s.as_ref().len()).max().unwrap_or(0);
    let mut row: Vec<Option<&T>> = Vec::with_capacity(sequences.len());
    let mut out = Vec::with_capacity(len);
    for index in 0..len {
        row.clear();
        row.extend(sequences.iter().map(|s| s.as_ref().get(index)));
        out.push(cb(&row));
    }
    out
}
