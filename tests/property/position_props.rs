//! Position mapping properties.

use super::strategies::{any_text, noisy_text};
use cribsheet::{fold_case, map_to_original, normalize, PositionMap};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_mapped_indices_inside_original(
        original in any_text(),
        start in 0usize..24,
        len in 0usize..24,
    ) {
        let normalized = normalize(&original);
        let bound = original.chars().count();
        let span = map_to_original(&original, &normalized, start, len);
        prop_assert!(span.iter().all(|&i| i < bound));
    }

    #[test]
    fn prop_mapped_chars_equal_normalized_chars(
        original in noisy_text(),
        start in 0usize..20,
        len in 0usize..20,
    ) {
        let normalized = normalize(&original);
        let original_chars: Vec<char> = original.chars().collect();
        let expected: String = normalized.chars().skip(start).take(len).collect();
        let span = map_to_original(&original, &normalized, start, len);
        let mapped: String = span.iter().map(|&i| original_chars[i]).collect();
        prop_assert_eq!(mapped, expected);
    }

    #[test]
    fn prop_folding_does_not_move_positions(original in noisy_text()) {
        let normalized = normalize(&original);
        let folded = fold_case(&normalized);
        let n = normalized.chars().count();
        prop_assert_eq!(
            map_to_original(&original, &normalized, 0, n),
            map_to_original(&original, &folded, 0, n)
        );
    }

    #[test]
    fn prop_full_range_maps_every_entry(original in noisy_text()) {
        let map = PositionMap::new(&original);
        prop_assert_eq!(map.map_range(0, map.len()).len(), map.len());
    }

    #[test]
    fn prop_mapping_is_strictly_increasing(original in noisy_text()) {
        let map = PositionMap::new(&original);
        let span = map.map_range(0, map.len());
        prop_assert!(span.indices().windows(2).all(|w| w[0] < w[1]));
    }
}
