//! Group / screen / size arithmetic over the flat item list.
//!
//! Everything here is a pure function of the list length and the 1-based
//! selection. Out-of-range selections (including 0) resolve to empty ranges
//! rather than panicking, so stale selector values after a shrinking feed are
//! harmless.

use crate::consts::wallboard_consts::{DEFAULT_GRID_SIZE, GROUP_SIZE, SCREEN_SIZE};
use std::ops::Range;

/// Number of groups needed to hold `total_items`.
pub fn group_count(total_items: usize) -> usize {
    total_items.div_ceil(GROUP_SIZE)
}

/// Selectable group labels, `1..=group_count`.
pub fn group_labels(total_items: usize) -> Vec<usize> {
    (1..=group_count(total_items)).collect()
}

/// Absolute item positions covered by `group`.
pub fn group_range(total_items: usize, group: usize) -> Range<usize> {
    if group == 0 {
        return 0..0;
    }
    let start = (group - 1).saturating_mul(GROUP_SIZE);
    let end = group.saturating_mul(GROUP_SIZE).min(total_items);
    if end <= start { start..start } else { start..end }
}

/// Number of items in `group`, zero when out of range.
pub fn group_item_count(total_items: usize, group: usize) -> usize {
    group_range(total_items, group).len()
}

/// Number of screens in `group`.
pub fn screen_count(total_items: usize, group: usize) -> usize {
    group_item_count(total_items, group).div_ceil(SCREEN_SIZE)
}

/// Selectable screen labels for `group`.
pub fn screen_labels(total_items: usize, group: usize) -> Vec<usize> {
    (1..=screen_count(total_items, group)).collect()
}

/// Absolute item positions covered by `screen` of `group`.
pub fn screen_range(total_items: usize, group: usize, screen: usize) -> Range<usize> {
    let group_items = group_range(total_items, group);
    if screen == 0 || group_items.is_empty() {
        return 0..0;
    }
    let start = (screen - 1).saturating_mul(SCREEN_SIZE);
    let end = screen.saturating_mul(SCREEN_SIZE).min(group_items.len());
    if end <= start {
        return 0..0;
    }
    group_items.start + start..group_items.start + end
}

/// Number of items in `screen` of `group`, zero when out of range.
pub fn screen_item_count(total_items: usize, group: usize, screen: usize) -> usize {
    screen_range(total_items, group, screen).len()
}

/// Sizes the operator may pick for a screen: the even numbers up to the
/// screen's item count. An odd item count never offers itself as a size.
pub fn selectable_sizes(total_items: usize, group: usize, screen: usize) -> Vec<usize> {
    let count = screen_item_count(total_items, group, screen);
    (2..=count).step_by(2).collect()
}

/// The size picked when a screen is selected: the full grid when offered,
/// otherwise the largest available.
pub fn default_size(sizes: &[usize]) -> Option<usize> {
    if sizes.contains(&DEFAULT_GRID_SIZE) {
        Some(DEFAULT_GRID_SIZE)
    } else {
        sizes.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_prefers_full_grid() {
        assert_eq!(default_size(&selectable_sizes(230, 1, 1)), Some(50));
        assert_eq!(default_size(&selectable_sizes(230, 2, 2)), Some(30));
        assert_eq!(default_size(&[2, 4, 6]), Some(6));
        assert_eq!(default_size(&[]), None);
    }

    #[test]
    fn group_count_rounds_up() {
        assert_eq!(group_count(0), 0);
        assert_eq!(group_count(1), 1);
        assert_eq!(group_count(150), 1);
        assert_eq!(group_count(151), 2);
        assert_eq!(group_count(230), 2);
        for total in 0..1000 {
            assert_eq!(group_count(total), (total as f64 / 150.0).ceil() as usize);
        }
    }

    #[test]
    fn empty_feed_has_no_options() {
        assert!(group_labels(0).is_empty());
        assert_eq!(screen_count(0, 1), 0);
        assert!(screen_labels(0, 1).is_empty());
        assert!(selectable_sizes(0, 1, 1).is_empty());
    }

    #[test]
    fn two_hundred_thirty_items_split_into_groups_and_screens() {
        let total = 230;
        assert_eq!(group_labels(total), vec![1, 2]);

        assert_eq!(group_item_count(total, 1), 150);
        assert_eq!(screen_count(total, 1), 3);
        let group_one: Vec<usize> = (1..=3).map(|s| screen_item_count(total, 1, s)).collect();
        assert_eq!(group_one, vec![50, 50, 50]);

        assert_eq!(group_item_count(total, 2), 80);
        assert_eq!(screen_count(total, 2), 2);
        let group_two: Vec<usize> = (1..=2).map(|s| screen_item_count(total, 2, s)).collect();
        assert_eq!(group_two, vec![50, 30]);
        assert_eq!(screen_range(total, 2, 2), 200..230);
    }

    #[test]
    fn screens_partition_their_group() {
        for total in [0, 1, 49, 50, 51, 149, 150, 151, 299, 300, 301, 777] {
            for group in 1..=group_count(total) {
                let sum: usize = (1..=screen_count(total, group))
                    .map(|screen| screen_item_count(total, group, screen))
                    .sum();
                assert_eq!(sum, group_item_count(total, group), "total={total} group={group}");
            }
        }
    }

    #[test]
    fn sizes_are_even_and_reach_largest_even_count() {
        for total in 0..=160 {
            let count = screen_item_count(total, 1, 1);
            let sizes = selectable_sizes(total, 1, 1);
            assert!(sizes.iter().all(|s| s % 2 == 0));
            let expected_max = count - count % 2;
            assert_eq!(sizes.last().copied().unwrap_or(0), expected_max);
        }
        assert_eq!(selectable_sizes(7, 1, 1), vec![2, 4, 6]);
        assert_eq!(selectable_sizes(1, 1, 1), Vec::<usize>::new());
    }

    #[test]
    fn out_of_range_selection_is_empty() {
        assert_eq!(group_item_count(230, 3), 0);
        assert_eq!(group_item_count(230, 0), 0);
        assert_eq!(screen_count(230, 9), 0);
        assert_eq!(screen_item_count(230, 2, 3), 0);
        assert_eq!(screen_item_count(230, 1, 0), 0);
        assert!(selectable_sizes(230, 5, 1).is_empty());
        assert_eq!(screen_range(230, usize::MAX, usize::MAX), 0..0);
    }
}
