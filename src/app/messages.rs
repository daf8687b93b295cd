use super::state::EditionChoice;
use crate::api::models::{Chapter, SearchData};
use crate::api::{JuzBundle, SurahBundle};
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// The screens the top navigation switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Browse,
    Surah,
    Reader,
    Search,
    Bookmarks,
}

/// Messages emitted by the UI and by completed async work.
///
/// Fetch results carry the `request_id` that was current when the fetch was
/// started so stale responses can be discarded.
#[derive(Debug, Clone)]
pub enum Message {
    ScreenSelected(Screen),
    ToggleTheme,
    VolumeChanged(f32),

    // Browse
    ChaptersLoaded {
        request_id: u64,
        result: Result<Vec<Chapter>, String>,
    },
    ChapterFilterChanged(String),
    OpenSurah(u32),

    // Surah
    SurahLoaded {
        number: u32,
        request_id: u64,
        result: Result<SurahBundle, String>,
    },
    TranslationChanged(EditionChoice),
    ToggleBookmark(u32),

    // Juz reader
    JuzSelected(u32),
    JuzLoaded {
        juz: u32,
        request_id: u64,
        result: Result<JuzBundle, String>,
    },
    NextPage,
    PreviousPage,

    // Playback
    PlayVerse(u32),
    PlayPage,
    StopPlayback,
    AudioLoaded {
        verse: u32,
        request_id: u64,
        result: Result<Vec<u8>, String>,
    },

    // Search
    SearchQueryChanged(String),
    SearchSubmit,
    SearchLoaded {
        request_id: u64,
        result: Result<SearchData, String>,
    },

    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick(Instant),
}
