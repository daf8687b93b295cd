use super::super::messages::Screen;
use super::super::state::App;
use super::Effect;
use crate::api::JuzBundle;
use crate::pagination::group_by_page;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_screen_selected(&mut self, screen: Screen, effects: &mut Vec<Effect>) {
        if screen != self.screen {
            // Leaving a screen always silences it.
            self.stop_playback();
            self.screen = screen;
        }
        if screen == Screen::Browse && self.browse.chapters.is_empty() && !self.browse.loading {
            self.browse.loading = true;
            self.browse.error = None;
            self.browse.request_id = self.browse.request_id.wrapping_add(1);
            effects.push(Effect::FetchChapters {
                request_id: self.browse.request_id,
            });
        }
    }

    pub(super) fn handle_juz_selected(&mut self, juz: u32, effects: &mut Vec<Effect>) {
        self.stop_playback();
        self.screen = Screen::Reader;
        self.reader.juz = Some(juz);
        self.reader.loading = true;
        self.reader.error = None;
        self.reader.pages.clear();
        self.reader.audio_verses.clear();
        self.reader.current_page = 0;
        self.reader.request_id = self.reader.request_id.wrapping_add(1);
        info!(juz, request_id = self.reader.request_id, "Fetching juz");
        effects.push(Effect::FetchJuz {
            juz,
            request_id: self.reader.request_id,
        });
    }

    pub(super) fn handle_juz_loaded(
        &mut self,
        juz: u32,
        request_id: u64,
        result: Result<JuzBundle, String>,
    ) {
        if request_id != self.reader.request_id {
            debug!(juz, request_id, "Ignoring stale juz result");
            return;
        }
        self.reader.loading = false;
        match result {
            Ok(bundle) => {
                self.reader.pages = group_by_page(&bundle.verses);
                self.reader.audio_verses = bundle.audio_verses;
                self.reader.set_page_clamped(0);
                self.reader.error = None;
                info!(
                    juz,
                    pages = self.reader.pages.len(),
                    verses = bundle.verses.len(),
                    "Loaded juz"
                );
            }
            Err(err) => {
                self.reader.pages.clear();
                self.reader.audio_verses.clear();
                self.reader.error = Some(err);
            }
        }
    }

    pub(super) fn handle_next_page(&mut self, effects: &mut Vec<Effect>) {
        self.go_to_page(self.reader.current_page.saturating_add(1), effects);
    }

    pub(super) fn handle_previous_page(&mut self, effects: &mut Vec<Effect>) {
        if self.reader.current_page > 0 {
            self.go_to_page(self.reader.current_page - 1, effects);
        }
    }

    fn go_to_page(&mut self, new_page: usize, effects: &mut Vec<Effect>) {
        if new_page >= self.reader.pages.len() || new_page == self.reader.current_page {
            return;
        }
        // Playback must end before the page flips.
        self.stop_playback();
        self.reader.current_page = new_page;
        if let Some(group) = self.reader.current_group() {
            info!(page = group.page, "Navigated to page");
        }
        effects.push(Effect::ScrollToTop);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::{Message, Screen};
    use super::super::super::state::tests::test_app;
    use super::App;
    use crate::api::JuzBundle;
    use crate::api::models::Verse;

    fn verse(number: u32, page: u32, audio: Option<&str>) -> Verse {
        Verse {
            number,
            text: format!("verse {number}"),
            number_in_surah: number,
            page: Some(page),
            audio: audio.map(str::to_string),
            surah: None,
        }
    }

    fn loaded_juz_app() -> App {
        let mut app = test_app();
        app.reduce(Message::JuzSelected(30));
        let request_id = app.reader.request_id;
        app.reduce(Message::JuzLoaded {
            juz: 30,
            request_id,
            result: Ok(JuzBundle {
                number: 30,
                verses: vec![
                    verse(101, 582, None),
                    verse(102, 582, None),
                    verse(103, 583, None),
                ],
                audio_verses: vec![
                    verse(101, 582, Some("https://cdn.example/101.mp3")),
                    verse(102, 582, Some("https://cdn.example/102.mp3")),
                    verse(103, 583, Some("https://cdn.example/103.mp3")),
                ],
            }),
        });
        app
    }

    #[test]
    fn juz_load_groups_pages_and_resets_index() {
        let app = loaded_juz_app();
        assert_eq!(app.screen, Screen::Reader);
        assert_eq!(app.reader.pages.len(), 2);
        assert_eq!(app.reader.current_page, 0);
        assert!(!app.reader.loading);
    }

    #[test]
    fn stale_juz_result_is_discarded() {
        let mut app = loaded_juz_app();
        app.reduce(Message::JuzSelected(29));
        let stale_id = app.reader.request_id.wrapping_sub(1);
        app.reduce(Message::JuzLoaded {
            juz: 30,
            request_id: stale_id,
            result: Err("late failure".to_string()),
        });
        assert!(app.reader.loading);
        assert!(app.reader.error.is_none());
    }

    #[test]
    fn juz_fetch_error_replaces_content() {
        let mut app = test_app();
        app.reduce(Message::JuzSelected(1));
        let request_id = app.reader.request_id;
        app.reduce(Message::JuzLoaded {
            juz: 1,
            request_id,
            result: Err("network down".to_string()),
        });
        assert_eq!(app.reader.error.as_deref(), Some("network down"));
        assert!(app.reader.pages.is_empty());
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut app = loaded_juz_app();
        app.reduce(Message::PreviousPage);
        assert_eq!(app.reader.current_page, 0);
        app.reduce(Message::NextPage);
        assert_eq!(app.reader.current_page, 1);
        app.reduce(Message::NextPage);
        assert_eq!(app.reader.current_page, 1);
    }

    #[test]
    fn navigation_stops_an_active_session() {
        let mut app = loaded_juz_app();
        app.reduce(Message::PlayPage);
        assert!(app.player.sequential);
        app.reduce(Message::NextPage);
        assert!(!app.player.sequential);
        assert!(!app.player.is_active());
    }

    #[test]
    fn switching_screens_stops_playback() {
        let mut app = loaded_juz_app();
        app.reduce(Message::PlayPage);
        app.reduce(Message::ScreenSelected(Screen::Search));
        assert!(!app.player.is_active());
        assert_eq!(app.screen, Screen::Search);
    }
}
