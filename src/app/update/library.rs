use super::super::messages::Screen;
use super::super::state::{App, BookmarkEntry, EditionChoice};
use super::Effect;
use crate::api::SurahBundle;
use crate::api::models::{Chapter, SearchData};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_chapters_loaded(
        &mut self,
        request_id: u64,
        result: Result<Vec<Chapter>, String>,
    ) {
        if request_id != self.browse.request_id {
            debug!(request_id, "Ignoring stale chapter list");
            return;
        }
        self.browse.loading = false;
        match result {
            Ok(chapters) => {
                info!(count = chapters.len(), "Loaded chapter list");
                self.browse.chapters = chapters;
                self.browse.error = None;
                self.update_chapter_matches();
            }
            Err(err) => self.browse.error = Some(err),
        }
    }

    pub(super) fn handle_chapter_filter_changed(&mut self, filter: String) {
        self.browse.filter = filter;
        self.update_chapter_matches();
    }

    pub(super) fn handle_open_surah(&mut self, number: u32, effects: &mut Vec<Effect>) {
        self.stop_playback();
        self.screen = Screen::Surah;
        self.surah.number = Some(number);
        if let Some(chapter) = self.browse.chapters.iter().find(|c| c.number == number) {
            self.surah.name = chapter.name.clone();
            self.surah.english_name = chapter.english_name.clone();
        }
        self.surah.arabic.clear();
        self.surah.translation.clear();
        self.surah.audio.clear();
        self.fetch_current_surah(effects);
    }

    fn fetch_current_surah(&mut self, effects: &mut Vec<Effect>) {
        let Some(number) = self.surah.number else {
            return;
        };
        self.surah.loading = true;
        self.surah.error = None;
        self.surah.request_id = self.surah.request_id.wrapping_add(1);
        info!(surah = number, "Fetching surah editions");
        effects.push(Effect::FetchSurah {
            number,
            request_id: self.surah.request_id,
        });
    }

    pub(super) fn handle_surah_loaded(
        &mut self,
        number: u32,
        request_id: u64,
        result: Result<SurahBundle, String>,
    ) {
        if request_id != self.surah.request_id || self.surah.number != Some(number) {
            debug!(surah = number, request_id, "Ignoring stale surah result");
            return;
        }
        self.surah.loading = false;
        match result {
            Ok(bundle) => {
                self.surah.name = bundle.arabic.name.clone();
                self.surah.english_name = bundle.arabic.english_name.clone();
                self.surah.arabic = bundle.arabic.ayahs;
                self.surah.translation = bundle.translation.ayahs;
                self.surah.audio = bundle.audio.ayahs;
                self.surah.error = None;
                info!(surah = number, verses = self.surah.arabic.len(), "Loaded surah");
            }
            Err(err) => self.surah.error = Some(err),
        }
    }

    pub(super) fn handle_translation_changed(
        &mut self,
        choice: EditionChoice,
        effects: &mut Vec<Effect>,
    ) {
        if self.config.translation_edition == choice.id {
            return;
        }
        self.config.translation_edition = choice.id.to_string();
        info!(edition = choice.id, "Translation edition changed");
        effects.push(Effect::SaveConfig);
        self.fetch_current_surah(effects);
    }

    pub(super) fn handle_toggle_bookmark(&mut self, verse: u32) {
        if self.bookmarks.entries.remove(&verse).is_some() {
            debug!(verse, "Removed bookmark");
            return;
        }
        let Some(found) = self.surah.arabic.iter().find(|v| v.number == verse) else {
            return;
        };
        self.bookmarks.entries.insert(
            verse,
            BookmarkEntry {
                verse,
                surah_number: self.surah.number.unwrap_or(0),
                surah_name: self.surah.english_name.clone(),
                number_in_surah: found.number_in_surah,
                text: found.text.clone(),
            },
        );
        debug!(verse, "Added bookmark");
    }

    pub(super) fn handle_search_submit(&mut self, effects: &mut Vec<Effect>) {
        let query = self.search.query.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.search.loading = true;
        self.search.error = None;
        self.search.request_id = self.search.request_id.wrapping_add(1);
        info!(%query, "Searching");
        effects.push(Effect::FetchSearch {
            query,
            request_id: self.search.request_id,
        });
    }

    pub(super) fn handle_search_loaded(
        &mut self,
        request_id: u64,
        result: Result<SearchData, String>,
    ) {
        if request_id != self.search.request_id {
            debug!(request_id, "Ignoring stale search result");
            return;
        }
        self.search.loading = false;
        match result {
            Ok(data) => {
                info!(count = data.count, "Search finished");
                self.search.results = Some(data);
                self.search.error = None;
            }
            Err(err) => {
                self.search.results = None;
                self.search.error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::{Message, Screen};
    use super::super::super::state::TRANSLATION_EDITIONS;
    use super::super::super::state::tests::test_app;
    use super::super::Effect;
    use super::App;
    use crate::api::SurahBundle;
    use crate::api::models::{SearchData, SurahData, Verse};

    fn verse(number: u32, number_in_surah: u32, text: &str, audio: Option<&str>) -> Verse {
        Verse {
            number,
            text: text.to_string(),
            number_in_surah,
            page: None,
            audio: audio.map(str::to_string),
            surah: None,
        }
    }

    fn surah_data(name: &str, ayahs: Vec<Verse>) -> SurahData {
        SurahData {
            number: 1,
            name: name.to_string(),
            english_name: "Al-Faatiha".to_string(),
            english_name_translation: "The Opening".to_string(),
            ayahs,
        }
    }

    fn app_with_surah() -> App {
        let mut app = test_app();
        app.reduce(Message::OpenSurah(1));
        let request_id = app.surah.request_id;
        app.reduce(Message::SurahLoaded {
            number: 1,
            request_id,
            result: Ok(SurahBundle {
                arabic: surah_data(
                    "الفاتحة",
                    vec![verse(1, 1, "بِسْمِ ٱللَّهِ", None), verse(2, 2, "ٱلْحَمْدُ لِلَّهِ", None)],
                ),
                translation: surah_data(
                    "الفاتحة",
                    vec![
                        verse(1, 1, "In the name of God", None),
                        verse(2, 2, "All praise is due to God", None),
                    ],
                ),
                audio: surah_data(
                    "الفاتحة",
                    vec![verse(1, 1, "", Some("https://cdn.example/1.mp3"))],
                ),
            }),
        });
        app
    }

    #[test]
    fn opening_a_surah_switches_screen_and_loads_editions() {
        let app = app_with_surah();
        assert_eq!(app.screen, Screen::Surah);
        assert_eq!(app.surah.arabic.len(), 2);
        assert_eq!(app.surah.translation.len(), 2);
        assert_eq!(
            app.surah.translation_for(2),
            Some("All praise is due to God")
        );
    }

    #[test]
    fn verse_audio_resolves_by_number_on_the_surah_screen() {
        let app = app_with_surah();
        assert!(app.audio_url_for(1).is_some());
        assert!(app.audio_url_for(2).is_none());
    }

    #[test]
    fn bookmark_toggle_adds_then_removes() {
        let mut app = app_with_surah();
        app.reduce(Message::ToggleBookmark(2));
        assert!(app.bookmarks.contains(2));
        let entry = &app.bookmarks.entries[&2];
        assert_eq!(entry.number_in_surah, 2);
        assert_eq!(entry.surah_name, "Al-Faatiha");

        app.reduce(Message::ToggleBookmark(2));
        assert!(!app.bookmarks.contains(2));
    }

    #[test]
    fn changing_translation_refetches_the_open_surah() {
        let mut app = app_with_surah();
        let choice = TRANSLATION_EDITIONS[1];
        let effects = app.reduce(Message::TranslationChanged(choice));
        assert_eq!(app.config.translation_edition, choice.id);
        assert!(app.surah.loading);
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::FetchSurah { number: 1, .. })));
        assert!(effects.iter().any(|e| matches!(e, Effect::SaveConfig)));
    }

    #[test]
    fn reselecting_the_same_translation_does_nothing() {
        let mut app = app_with_surah();
        let current = TRANSLATION_EDITIONS
            .iter()
            .find(|c| c.id == app.config.translation_edition)
            .copied()
            .unwrap();
        let effects = app.reduce(Message::TranslationChanged(current));
        assert!(effects.is_empty());
    }

    #[test]
    fn blank_search_query_is_not_submitted() {
        let mut app = test_app();
        app.reduce(Message::SearchQueryChanged("   ".to_string()));
        let effects = app.reduce(Message::SearchSubmit);
        assert!(effects.is_empty());
        assert!(!app.search.loading);
    }

    #[test]
    fn stale_search_result_is_discarded() {
        let mut app = test_app();
        app.reduce(Message::SearchQueryChanged("mercy".to_string()));
        app.reduce(Message::SearchSubmit);
        let first_id = app.search.request_id;
        app.reduce(Message::SearchSubmit);

        app.reduce(Message::SearchLoaded {
            request_id: first_id,
            result: Ok(SearchData {
                count: 0,
                matches: Vec::new(),
            }),
        });
        assert!(app.search.loading);
        assert!(app.search.results.is_none());
    }

    #[test]
    fn search_error_replaces_results() {
        let mut app = test_app();
        app.reduce(Message::SearchQueryChanged("mercy".to_string()));
        app.reduce(Message::SearchSubmit);
        let request_id = app.search.request_id;
        app.reduce(Message::SearchLoaded {
            request_id,
            result: Err("service unavailable".to_string()),
        });
        assert_eq!(app.search.error.as_deref(), Some("service unavailable"));
        assert!(app.search.results.is_none());
    }
}
