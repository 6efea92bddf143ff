use alloc::vec::Vec;

/// Returns the trailing-window minima and maxima of `values` by direct scan
///
/// Entry `i` of each output covers `values[i + 1 - min(i + 1, width)..=i]`.
/// Costs O(len * width); only used to check the streaming filters.
pub fn brute_force_extrema(values: &[f32], width: usize) -> (Vec<f32>, Vec<f32>) {
    assert!(width > 0, "width can not be zero");

    (0..values.len())
        .map(|i| {
            let window = &values[(i + 1).saturating_sub(width)..=i];
            let min = window.iter().copied().fold(f32::INFINITY, f32::min);
            let max = window.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            (min, max)
        })
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::brute_force_extrema;

    #[test]
    fn test_partial_and_full_windows() {
        let (mins, maxs) = brute_force_extrema(&[2.0, 5.0, 1.0, 3.0], 2);
        assert_eq!(mins, vec![2.0, 2.0, 1.0, 1.0]);
        assert_eq!(maxs, vec![2.0, 5.0, 5.0, 3.0]);
    }

    #[test]
    fn test_empty_input() {
        let (mins, maxs) = brute_force_extrema(&[], 4);
        assert!(mins.is_empty());
        assert!(maxs.is_empty());
    }
}
