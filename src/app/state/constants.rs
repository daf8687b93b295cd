use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Limits for user-tunable settings.
pub(crate) const MIN_FONT_SIZE: u32 = 12;
pub(crate) const MAX_FONT_SIZE: u32 = 72;
pub(crate) const MIN_VOLUME: f32 = 0.0;
pub(crate) const MAX_VOLUME: f32 = 2.0;
pub(crate) const MAX_PLAYBACK_GAP_SECS: f32 = 5.0;

pub(crate) const JUZ_COUNT: u32 = 30;

/// How often the Tick subscription polls the sink while audio is active.
pub(crate) const PLAYER_POLL_INTERVAL_MS: u64 = 200;

pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));

/// A translation edition offered in the surah screen picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EditionChoice {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
}

impl std::fmt::Display for EditionChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

pub(crate) const TRANSLATION_EDITIONS: [EditionChoice; 6] = [
    EditionChoice {
        id: "en.asad",
        label: "Muhammad Asad (English)",
    },
    EditionChoice {
        id: "en.pickthall",
        label: "Pickthall (English)",
    },
    EditionChoice {
        id: "en.sahih",
        label: "Saheeh International (English)",
    },
    EditionChoice {
        id: "en.yusufali",
        label: "Yusuf Ali (English)",
    },
    EditionChoice {
        id: "fr.hamidullah",
        label: "Hamidullah (French)",
    },
    EditionChoice {
        id: "ur.jalandhry",
        label: "Jalandhry (Urdu)",
    },
];
