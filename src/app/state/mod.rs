mod constants;
mod library;
mod player;
mod reader;

use crate::api::QuranClient;
use crate::config::AppConfig;
use iced::Task;
use regex::RegexBuilder;

use super::messages::{Message, Screen};

pub(crate) use constants::*;
pub(in crate::app) use library::{BookmarkEntry, BookmarkState, BrowseState, SearchState, SurahState};
pub(crate) use player::PlayerLifecycle;
pub(in crate::app) use player::{PendingAdvance, PlayerState};
pub(in crate::app) use reader::ReaderState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) screen: Screen,
    pub(super) api: QuranClient,
    pub(super) config: AppConfig,
    pub(super) browse: BrowseState,
    pub(super) surah: SurahState,
    pub(super) reader: ReaderState,
    pub(super) player: PlayerState,
    pub(super) search: SearchState,
    pub(super) bookmarks: BookmarkState,
}

impl App {
    /// End any playback session: sink released, pending advance cancelled,
    /// sequential flag off.
    pub(super) fn stop_playback(&mut self) {
        self.player.reset_session();
    }

    /// Resolve a verse's recitation URL by its global number. Lookup is
    /// against the audio edition backing the visible screen; verses the
    /// audio edition does not cover simply resolve to `None`.
    pub(super) fn audio_url_for(&self, verse: u32) -> Option<String> {
        let verses = match self.screen {
            Screen::Reader => &self.reader.audio_verses,
            Screen::Surah => &self.surah.audio,
            _ => return None,
        };
        verses
            .iter()
            .find(|v| v.number == verse)
            .and_then(|v| v.audio.clone())
    }

    /// Recompute which chapters match the browse filter. The filter is a
    /// case-insensitive regex over chapter names; an invalid pattern keeps
    /// the previous matches and surfaces the error.
    pub(super) fn update_chapter_matches(&mut self) {
        let query = self.browse.filter.trim();
        if query.is_empty() {
            self.browse.filter_error = None;
            self.browse.matches = (0..self.browse.chapters.len()).collect();
            return;
        }

        let regex = match RegexBuilder::new(query).case_insensitive(true).build() {
            Ok(regex) => regex,
            Err(err) => {
                self.browse.filter_error = Some(err.to_string());
                return;
            }
        };

        self.browse.filter_error = None;
        self.browse.matches = self
            .browse
            .chapters
            .iter()
            .enumerate()
            .filter_map(|(idx, chapter)| {
                let hit = regex.is_match(&chapter.english_name)
                    || regex.is_match(&chapter.english_name_translation)
                    || regex.is_match(&chapter.name)
                    || chapter.number.to_string() == query;
                hit.then_some(idx)
            })
            .collect();
    }

    /// The picker entry for the configured translation edition, if it is one
    /// of the built-in choices.
    pub(super) fn selected_translation(&self) -> Option<EditionChoice> {
        TRANSLATION_EDITIONS
            .iter()
            .find(|choice| choice.id == self.config.translation_edition)
            .copied()
    }

    pub(super) fn bootstrap(mut config: AppConfig, initial_juz: Option<u32>) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let api = QuranClient::new(config.api_base_url.clone());
        let app = App {
            screen: Screen::Browse,
            api,
            config,
            browse: BrowseState::default(),
            surah: SurahState::default(),
            reader: ReaderState::default(),
            player: PlayerState::default(),
            search: SearchState::default(),
            bookmarks: BookmarkState::default(),
        };

        tracing::info!(
            text_edition = %app.config.text_edition,
            audio_edition = %app.config.audio_edition,
            "Initialized app state"
        );

        // Selecting the browse screen kicks off the chapter fetch; a juz from
        // the command line then takes over the visible screen.
        let mut init = vec![Task::done(Message::ScreenSelected(Screen::Browse))];
        if let Some(juz) = initial_juz {
            init.push(Task::done(Message::JuzSelected(juz)));
        }
        (app, Task::batch(init))
    }
}

fn clamp_config(config: &mut AppConfig) {
    config.arabic_font_size = config.arabic_font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    config.translation_font_size = config
        .translation_font_size
        .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    config.playback_gap_secs = config.playback_gap_secs.clamp(0.0, MAX_PLAYBACK_GAP_SECS);
    config.volume = config.volume.clamp(MIN_VOLUME, MAX_VOLUME);
}

#[cfg(test)]
pub(in crate::app) mod tests {
    use super::*;
    use crate::api::models::Chapter;

    pub(crate) fn test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default(), None);
        app
    }

    fn chapter(number: u32, english_name: &str) -> Chapter {
        Chapter {
            number,
            name: String::new(),
            english_name: english_name.to_string(),
            english_name_translation: String::new(),
            number_of_ayahs: 7,
            revelation_type: "Meccan".to_string(),
        }
    }

    #[test]
    fn clamp_config_bounds_out_of_range_values() {
        let mut config = AppConfig::default();
        config.arabic_font_size = 500;
        config.volume = -3.0;
        config.playback_gap_secs = 60.0;
        clamp_config(&mut config);
        assert_eq!(config.arabic_font_size, MAX_FONT_SIZE);
        assert_eq!(config.volume, MIN_VOLUME);
        assert_eq!(config.playback_gap_secs, MAX_PLAYBACK_GAP_SECS);
    }

    #[test]
    fn chapter_filter_is_case_insensitive() {
        let mut app = test_app();
        app.browse.chapters = vec![chapter(1, "Al-Faatiha"), chapter(2, "Al-Baqara")];
        app.browse.filter = "baqara".to_string();
        app.update_chapter_matches();
        assert_eq!(app.browse.matches, vec![1]);
    }

    #[test]
    fn empty_filter_matches_everything() {
        let mut app = test_app();
        app.browse.chapters = vec![chapter(1, "Al-Faatiha"), chapter(2, "Al-Baqara")];
        app.browse.filter = "  ".to_string();
        app.update_chapter_matches();
        assert_eq!(app.browse.matches.len(), 2);
    }

    #[test]
    fn invalid_filter_reports_error_and_keeps_matches() {
        let mut app = test_app();
        app.browse.chapters = vec![chapter(1, "Al-Faatiha")];
        app.update_chapter_matches();
        app.browse.filter = "[".to_string();
        app.update_chapter_matches();
        assert!(app.browse.filter_error.is_some());
        assert_eq!(app.browse.matches, vec![0]);
    }
}
