//! ページをまたいで保持される選択状態
//!
//! 選択はIDの集合として持つため、表示中のページとは独立している。
//! ページを移動して戻っても選択は残る。

use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::types::{ArtworkId, ArtworkRecord};

/// 選択済み作品IDの集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: BTreeSet<ArtworkId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 表示中ページのチェック状態を置き換える
    ///
    /// `page_ids` に含まれるIDをすべて外してから `new_value` のIDを追加する。
    /// `page_ids` は表示中ページのID集合と一致していなければならない。
    pub fn toggle_all_on_page<P, N>(&mut self, page_ids: P, new_value: N)
    where
        P: IntoIterator<Item = ArtworkId>,
        N: IntoIterator<Item = ArtworkId>,
    {
        for id in page_ids {
            self.ids.remove(&id);
        }
        self.ids.extend(new_value);
    }

    /// 先頭 `count` 行を選択に追加する（既存の選択は保持）
    ///
    /// `count` が未指定・0以下なら何もしない。ページ行数を超える場合は全行。
    /// 新たに追加されたID数を返す。
    pub fn apply_bulk_select(&mut self, page_rows: &[ArtworkRecord], count: Option<i64>) -> usize {
        let count = match count {
            Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
            _ => return 0,
        };

        page_rows
            .iter()
            .take(count)
            .filter(|row| self.ids.insert(row.id))
            .count()
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// 昇順のID
    pub fn iter(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(ids: impl IntoIterator<Item = ArtworkId>) -> Vec<ArtworkRecord> {
        ids.into_iter()
            .map(|id| ArtworkRecord { id, ..Default::default() })
            .collect()
    }

    #[test]
    fn test_toggle_select_all_then_none() {
        let mut selection = SelectionSet::new();
        let page = vec![1, 2, 3];

        selection.toggle_all_on_page(page.clone(), page.clone());
        assert_eq!(selection.len(), 3);

        selection.toggle_all_on_page(page.clone(), []);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_deselect_page_leaves_other_pages() {
        let mut selection = SelectionSet::new();
        selection.toggle_all_on_page([1, 2, 3], [1, 2, 3]);
        selection.toggle_all_on_page([4, 5, 6], [5]);

        selection.toggle_all_on_page([1, 2, 3], []);

        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn test_toggle_explicit_subset_replaces_page_membership() {
        let mut selection = SelectionSet::new();
        selection.toggle_all_on_page([1, 2, 3], [1, 2]);
        selection.toggle_all_on_page([1, 2, 3], [3]);

        assert!(!selection.is_selected(1));
        assert!(!selection.is_selected(2));
        assert!(selection.is_selected(3));
    }

    #[test]
    fn test_bulk_select_first_n() {
        let mut selection = SelectionSet::new();
        let page = rows(10..22);

        let added = selection.apply_bulk_select(&page, Some(3));

        assert_eq!(added, 3);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![10, 11, 12]);
    }

    #[test]
    fn test_bulk_select_clamps_to_page() {
        let mut selection = SelectionSet::new();
        let page = rows(10..22);

        selection.apply_bulk_select(&page, Some(50));

        assert_eq!(selection.len(), 12);
        assert!(page.iter().all(|r| selection.is_selected(r.id)));
        assert!(!selection.is_selected(22));
    }

    #[test]
    fn test_bulk_select_is_union() {
        let mut selection = SelectionSet::new();
        selection.toggle_all_on_page([99], [99]);
        let page = rows([1, 2, 3]);
        selection.toggle_all_on_page([1, 2, 3], [2]);

        let added = selection.apply_bulk_select(&page, Some(2));

        assert_eq!(added, 1);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1, 2, 99]);
    }

    #[test]
    fn test_bulk_select_non_positive_is_noop() {
        let mut selection = SelectionSet::new();
        selection.toggle_all_on_page([7], [7]);
        let before = selection.clone();
        let page = rows(1..13);

        assert_eq!(selection.apply_bulk_select(&page, Some(0)), 0);
        assert_eq!(selection.apply_bulk_select(&page, Some(-5)), 0);
        assert_eq!(selection.apply_bulk_select(&page, None), 0);
        assert_eq!(selection, before);
    }

    #[test]
    fn test_bulk_select_on_empty_page() {
        let mut selection = SelectionSet::new();
        assert_eq!(selection.apply_bulk_select(&[], Some(4)), 0);
        assert!(selection.is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use std::collections::BTreeSet;

        proptest! {
            #[test]
            fn toggle_leaves_ids_off_page_untouched(
                existing in prop::collection::btree_set(0u64..200, 0..60),
                page in prop::collection::btree_set(0u64..200, 1..13),
                mask in prop::collection::vec(any::<bool>(), 12),
            ) {
                let mut selection = SelectionSet::new();
                selection.toggle_all_on_page([], existing.iter().copied());
                let checked: Vec<ArtworkId> = page
                    .iter()
                    .zip(mask.iter())
                    .filter(|(_, keep)| **keep)
                    .map(|(id, _)| *id)
                    .collect();

                selection.toggle_all_on_page(page.iter().copied(), checked.iter().copied());

                for id in existing.iter().filter(|id| !page.contains(id)) {
                    prop_assert!(selection.is_selected(*id));
                }
                let off_page: BTreeSet<ArtworkId> =
                    selection.iter().filter(|id| !page.contains(id)).collect();
                let expected: BTreeSet<ArtworkId> =
                    existing.iter().copied().filter(|id| !page.contains(id)).collect();
                prop_assert_eq!(off_page, expected);
                for id in &page {
                    prop_assert_eq!(selection.is_selected(*id), checked.contains(id));
                }
            }

            #[test]
            fn bulk_select_whole_page_adds_exactly_page_ids(
                existing in prop::collection::btree_set(0u64..200, 0..60),
                page in prop::collection::btree_set(0u64..200, 0..13),
                extra in 0i64..50,
            ) {
                let mut selection = SelectionSet::new();
                selection.toggle_all_on_page([], existing.iter().copied());
                let page_rows = rows(page.iter().copied());
                let count = page_rows.len() as i64 + extra;

                let added = selection.apply_bulk_select(&page_rows, Some(count));

                let expected: BTreeSet<ArtworkId> = existing.union(&page).copied().collect();
                prop_assert_eq!(selection.iter().collect::<BTreeSet<_>>(), expected);
                prop_assert_eq!(added, page.difference(&existing).count());
            }
        }
    }
}
