use crate::api::models::{Chapter, SearchData, Verse};
use std::collections::BTreeMap;

/// Chapter list plus the filter applied to it.
#[derive(Default)]
pub struct BrowseState {
    pub(in crate::app) chapters: Vec<Chapter>,
    pub(in crate::app) filter: String,
    pub(in crate::app) matches: Vec<usize>,
    pub(in crate::app) filter_error: Option<String>,
    pub(in crate::app) loading: bool,
    pub(in crate::app) error: Option<String>,
    pub(in crate::app) request_id: u64,
}

/// One surah in three editions, kept verse-parallel by the API.
#[derive(Default)]
pub struct SurahState {
    pub(in crate::app) number: Option<u32>,
    pub(in crate::app) name: String,
    pub(in crate::app) english_name: String,
    pub(in crate::app) arabic: Vec<Verse>,
    pub(in crate::app) translation: Vec<Verse>,
    pub(in crate::app) audio: Vec<Verse>,
    pub(in crate::app) loading: bool,
    pub(in crate::app) error: Option<String>,
    pub(in crate::app) request_id: u64,
}

impl SurahState {
    /// Translation text for a verse, matched by number-in-surah.
    pub(in crate::app) fn translation_for(&self, number_in_surah: u32) -> Option<&str> {
        self.translation
            .iter()
            .find(|v| v.number_in_surah == number_in_surah)
            .map(|v| v.text.as_str())
    }
}

#[derive(Default)]
pub struct SearchState {
    pub(in crate::app) query: String,
    pub(in crate::app) results: Option<SearchData>,
    pub(in crate::app) loading: bool,
    pub(in crate::app) error: Option<String>,
    pub(in crate::app) request_id: u64,
}

/// A bookmarked verse, snapshotted for display so the bookmarks screen needs
/// no fetch of its own.
#[derive(Debug, Clone, PartialEq)]
pub(in crate::app) struct BookmarkEntry {
    pub(in crate::app) verse: u32,
    pub(in crate::app) surah_number: u32,
    pub(in crate::app) surah_name: String,
    pub(in crate::app) number_in_surah: u32,
    pub(in crate::app) text: String,
}

/// Session-scoped bookmarks keyed by global verse number.
#[derive(Default)]
pub struct BookmarkState {
    pub(in crate::app) entries: BTreeMap<u32, BookmarkEntry>,
}

impl BookmarkState {
    pub(in crate::app) fn contains(&self, verse: u32) -> bool {
        self.entries.contains_key(&verse)
    }
}
