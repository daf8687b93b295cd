use super::super::super::messages::{Message, Screen};
use super::super::super::state::App;
use super::super::Effect;
use crate::config::ThemeMode;
use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

impl App {
    /// Apply a message to the state and collect side work for the runtime.
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::ScreenSelected(screen) => self.handle_screen_selected(screen, &mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::VolumeChanged(volume) => self.handle_volume_changed(volume, &mut effects),
            Message::ChaptersLoaded { request_id, result } => {
                self.handle_chapters_loaded(request_id, result)
            }
            Message::ChapterFilterChanged(filter) => self.handle_chapter_filter_changed(filter),
            Message::OpenSurah(number) => self.handle_open_surah(number, &mut effects),
            Message::SurahLoaded {
                number,
                request_id,
                result,
            } => self.handle_surah_loaded(number, request_id, result),
            Message::TranslationChanged(choice) => {
                self.handle_translation_changed(choice, &mut effects)
            }
            Message::ToggleBookmark(verse) => self.handle_toggle_bookmark(verse),
            Message::JuzSelected(juz) => self.handle_juz_selected(juz, &mut effects),
            Message::JuzLoaded {
                juz,
                request_id,
                result,
            } => self.handle_juz_loaded(juz, request_id, result),
            Message::NextPage => self.handle_next_page(&mut effects),
            Message::PreviousPage => self.handle_previous_page(&mut effects),
            Message::PlayVerse(verse) => self.handle_play_verse(verse, &mut effects),
            Message::PlayPage => self.handle_play_page(&mut effects),
            Message::StopPlayback => self.stop_playback(),
            Message::AudioLoaded {
                verse,
                request_id,
                result,
            } => self.handle_audio_loaded(verse, request_id, result),
            Message::SearchQueryChanged(query) => self.search.query = query,
            Message::SearchSubmit => self.handle_search_submit(&mut effects),
            Message::SearchLoaded { request_id, result } => {
                self.handle_search_loaded(request_id, result)
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_for(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::Tick(now) => self.handle_tick(now, &mut effects),
        }

        effects
    }

    fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        effects.push(Effect::SaveConfig);
    }

    /// Keyboard shortcuts only apply on the reader screen and never with
    /// modifiers held, so typing into inputs elsewhere stays unaffected.
    fn shortcut_for(&self, key: Key, modifiers: Modifiers) -> Option<Message> {
        if !modifiers.is_empty() || self.screen != Screen::Reader {
            return None;
        }
        match key.as_ref() {
            Key::Named(Named::ArrowRight) => Some(Message::NextPage),
            Key::Named(Named::ArrowLeft) => Some(Message::PreviousPage),
            Key::Named(Named::Space) => Some(if self.player.sequential {
                Message::StopPlayback
            } else {
                Message::PlayPage
            }),
            _ => None,
        }
    }
}
