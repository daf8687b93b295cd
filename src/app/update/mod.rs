mod core;
mod library;
mod navigation;
mod player;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    SaveConfig,
    FetchChapters {
        request_id: u64,
    },
    FetchSurah {
        number: u32,
        request_id: u64,
    },
    FetchJuz {
        juz: u32,
        request_id: u64,
    },
    FetchSearch {
        query: String,
        request_id: u64,
    },
    FetchAudio {
        verse: u32,
        url: String,
        request_id: u64,
    },
    ScrollToTop,
}
