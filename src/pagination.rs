//! Page derivation for fetched verses.
//!
//! Verses arrive from the content API annotated with the mushaf page they
//! appear on. The reader shows one mushaf page at a time, so we group the
//! flat verse list by page number. The grouping is pure; navigation state
//! (the current page index) lives in the app state and is clamped there.

use crate::api::models::Verse;
use std::collections::BTreeMap;
use tracing::warn;

/// One mushaf page: the page number and the verses on it, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGroup {
    pub page: u32,
    pub verses: Vec<Verse>,
}

/// Group verses by their mushaf page number, ascending.
///
/// Within a page, verses keep the order they arrived in. A verse the API
/// returned without a page annotation is dropped with a warning; one bad
/// record must not sink the whole juz.
pub fn group_by_page(verses: &[Verse]) -> Vec<PageGroup> {
    let mut grouped: BTreeMap<u32, Vec<Verse>> = BTreeMap::new();
    for verse in verses {
        let Some(page) = verse.page else {
            warn!(verse = verse.number, "Verse has no page number; skipping");
            continue;
        };
        grouped.entry(page).or_default().push(verse.clone());
    }
    grouped
        .into_iter()
        .map(|(page, verses)| PageGroup { page, verses })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(number: u32, page: Option<u32>) -> Verse {
        Verse {
            number,
            text: format!("verse {number}"),
            number_in_surah: number,
            page,
            audio: None,
            surah: None,
        }
    }

    #[test]
    fn empty_input_yields_no_pages() {
        assert!(group_by_page(&[]).is_empty());
    }

    #[test]
    fn pages_sorted_ascending_regardless_of_arrival_order() {
        let verses = vec![verse(10, Some(582)), verse(11, Some(581)), verse(12, Some(583))];
        let pages = group_by_page(&verses);
        let numbers: Vec<u32> = pages.iter().map(|g| g.page).collect();
        assert_eq!(numbers, vec![581, 582, 583]);
    }

    #[test]
    fn verses_keep_source_order_within_a_page() {
        let verses = vec![
            verse(101, Some(582)),
            verse(102, Some(582)),
            verse(103, Some(582)),
        ];
        let pages = group_by_page(&verses);
        assert_eq!(pages.len(), 1);
        let order: Vec<u32> = pages[0].verses.iter().map(|v| v.number).collect();
        assert_eq!(order, vec![101, 102, 103]);
    }

    #[test]
    fn interleaved_pages_regroup_cleanly() {
        let verses = vec![
            verse(1, Some(2)),
            verse(2, Some(1)),
            verse(3, Some(2)),
            verse(4, Some(1)),
        ];
        let pages = group_by_page(&verses);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page, 1);
        let first: Vec<u32> = pages[0].verses.iter().map(|v| v.number).collect();
        assert_eq!(first, vec![2, 4]);
        let second: Vec<u32> = pages[1].verses.iter().map(|v| v.number).collect();
        assert_eq!(second, vec![1, 3]);
    }

    #[test]
    fn verse_without_page_is_skipped_not_fatal() {
        let verses = vec![verse(1, Some(1)), verse(2, None), verse(3, Some(1))];
        let pages = group_by_page(&verses);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].verses.len(), 2);
    }
}
