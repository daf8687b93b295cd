use super::super::super::messages::Message;
use super::super::super::state::{App, PAGE_SCROLL_ID};
use super::super::Effect;
use crate::config::save_config;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::RelativeOffset;
use iced::window;
use std::path::Path;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveConfig => {
                save_config(Path::new("conf/config.toml"), &self.config);
                Task::none()
            }
            Effect::FetchChapters { request_id } => {
                let api = self.api.clone();
                Task::perform(
                    async move {
                        let result = api.chapters().await.map_err(|err| format!("{err:#}"));
                        Message::ChaptersLoaded { request_id, result }
                    },
                    |message| message,
                )
            }
            Effect::FetchSurah { number, request_id } => {
                let api = self.api.clone();
                let text = self.config.text_edition.clone();
                let translation = self.config.translation_edition.clone();
                let audio = self.config.audio_edition.clone();
                Task::perform(
                    async move {
                        let result = api
                            .surah_editions(number, &text, &translation, &audio)
                            .await
                            .map_err(|err| format!("{err:#}"));
                        Message::SurahLoaded {
                            number,
                            request_id,
                            result,
                        }
                    },
                    |message| message,
                )
            }
            Effect::FetchJuz { juz, request_id } => {
                let api = self.api.clone();
                let text = self.config.text_edition.clone();
                let audio = self.config.audio_edition.clone();
                Task::perform(
                    async move {
                        let result = api
                            .juz_with_audio(juz, &text, &audio)
                            .await
                            .map_err(|err| format!("{err:#}"));
                        Message::JuzLoaded {
                            juz,
                            request_id,
                            result,
                        }
                    },
                    |message| message,
                )
            }
            Effect::FetchSearch { query, request_id } => {
                let api = self.api.clone();
                let edition = self.config.search_edition.clone();
                Task::perform(
                    async move {
                        let result = api
                            .search(&query, &edition)
                            .await
                            .map_err(|err| format!("{err:#}"));
                        Message::SearchLoaded { request_id, result }
                    },
                    |message| message,
                )
            }
            Effect::FetchAudio {
                verse,
                url,
                request_id,
            } => {
                let api = self.api.clone();
                Task::perform(
                    async move {
                        let result = api.audio_bytes(&url).await.map_err(|err| format!("{err:#}"));
                        Message::AudioLoaded {
                            verse,
                            request_id,
                            result,
                        }
                    },
                    |message| message,
                )
            }
            Effect::ScrollToTop => {
                iced::widget::scrollable::snap_to(PAGE_SCROLL_ID.clone(), RelativeOffset::START)
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
