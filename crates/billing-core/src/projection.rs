//! Projection Engine
//!
//! Computes the displayed sequence from catalog, selection, search text and
//! sort mode. Pure: same inputs, same output, nothing cached.

use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::domain::{SortMode, TestItem};
use crate::selection::Selection;

/// Filter and order the catalog for display.
///
/// Tests whose name contains the query (case-insensitive) survive the
/// filter; an empty query keeps everything. Selected tests sort before
/// unselected ones, and within each partition the sort mode decides, with
/// insertion order as the default. The sort is stable, so equal keys keep
/// their catalog order.
pub fn project(
    catalog: &Catalog,
    selection: &Selection,
    query: &str,
    sort: SortMode,
) -> Vec<TestItem> {
    let needle = query.to_lowercase();
    let mut displayed: Vec<TestItem> = catalog
        .items()
        .iter()
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    displayed.sort_by(|a, b| {
        let a_selected = selection.contains(a.id);
        let b_selected = selection.contains(b.id);
        if a_selected != b_selected {
            return if a_selected {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        match sort {
            SortMode::Name => a.name.cmp(&b.name),
            SortMode::Price => a.price.total_cmp(&b.price),
            SortMode::Default => a.order.cmp(&b.order),
        }
    });

    displayed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                TestItem::new(1, "Lipid Profile".to_string(), 550.0, 0),
                TestItem::new(2, "CBC".to_string(), 300.0, 1),
                TestItem::new(3, "ECG".to_string(), 250.0, 2),
                TestItem::new(4, "Liver Function".to_string(), 700.0, 3),
            ],
            5,
        )
    }

    fn ids(items: &[TestItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_default_mode_keeps_insertion_order() {
        let displayed = project(&catalog(), &Selection::default(), "", SortMode::Default);
        assert_eq!(ids(&displayed), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let displayed = project(&catalog(), &Selection::default(), "li", SortMode::Default);
        assert_eq!(ids(&displayed), vec![1, 4]);

        let displayed = project(&catalog(), &Selection::default(), "LIVER", SortMode::Default);
        assert_eq!(ids(&displayed), vec![4]);
    }

    #[test]
    fn test_selected_partition_comes_first() {
        let mut selection = Selection::default();
        selection.toggle(3);
        selection.toggle(2);

        let displayed = project(&catalog(), &selection, "", SortMode::Default);
        // Selected tests first (in catalog order within the partition),
        // then the rest in catalog order.
        assert_eq!(ids(&displayed), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_price_sort_is_non_decreasing_within_partitions() {
        let mut selection = Selection::default();
        selection.toggle(1);
        selection.toggle(3);

        let displayed = project(&catalog(), &selection, "", SortMode::Price);
        let split = displayed
            .iter()
            .position(|item| !selection.contains(item.id))
            .unwrap();
        for partition in [&displayed[..split], &displayed[split..]] {
            for pair in partition.windows(2) {
                assert!(pair[0].price <= pair[1].price);
            }
        }
        assert_eq!(ids(&displayed), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_name_sort_is_lexicographic() {
        let displayed = project(&catalog(), &Selection::default(), "", SortMode::Name);
        assert_eq!(ids(&displayed), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_projection_tolerates_dangling_selection_id() {
        let selection = Selection::new(vec![99, 2]);
        let displayed = project(&catalog(), &selection, "", SortMode::Default);
        assert_eq!(ids(&displayed), vec![2, 1, 3, 4]);
    }
}
