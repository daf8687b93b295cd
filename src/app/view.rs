use super::messages::{Message, Screen};
use super::state::{
    App, JUZ_COUNT, MAX_VOLUME, MIN_VOLUME, PAGE_SCROLL_ID, PlayerLifecycle, TRANSLATION_EDITIONS,
};
use crate::api::models::Verse;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::{Shaping, Wrapping};
use iced::widget::{
    Column, button, column, container, horizontal_space, pick_list, row, scrollable, slider, text,
    text_input,
};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.screen {
            Screen::Browse => self.browse_view(),
            Screen::Surah => self.surah_view(),
            Screen::Reader => self.reader_view(),
            Screen::Search => self.search_view(),
            Screen::Bookmarks => self.bookmarks_view(),
        };

        column![self.nav_bar(), body]
            .padding(16)
            .spacing(12)
            .height(Length::Fill)
            .into()
    }

    fn nav_bar(&self) -> Element<'_, Message> {
        let screen_button = |label: &'static str, screen: Screen| {
            if screen == self.screen {
                button(label)
            } else {
                button(label).on_press(Message::ScreenSelected(screen))
            }
        };

        // The surah screen only makes sense once a surah has been opened.
        let surah_button = if self.surah.number.is_some() && self.screen != Screen::Surah {
            button("Surah").on_press(Message::ScreenSelected(Screen::Surah))
        } else {
            button("Surah")
        };

        let theme_label = if matches!(self.config.theme, crate::config::ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };

        let volume = column![
            text(format!("Volume: {:.0}%", self.config.volume * 100.0)).size(12),
            slider(
                MIN_VOLUME..=MAX_VOLUME,
                self.config.volume,
                Message::VolumeChanged
            )
            .step(0.01)
        ]
        .spacing(2)
        .width(Length::Fixed(160.0));

        row![
            screen_button("Browse", Screen::Browse),
            surah_button,
            screen_button("Reader", Screen::Reader),
            screen_button("Search", Screen::Search),
            screen_button("Bookmarks", Screen::Bookmarks),
            horizontal_space(),
            volume,
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
    }

    fn browse_view(&self) -> Element<'_, Message> {
        let filter = text_input("Filter surahs by name or number", &self.browse.filter)
            .on_input(Message::ChapterFilterChanged)
            .padding(8);

        if self.browse.loading {
            return column![filter, text("Loading chapters...")]
                .spacing(12)
                .into();
        }
        if let Some(err) = &self.browse.error {
            return column![filter, error_banner(err)].spacing(12).into();
        }

        let mut list = Column::new().spacing(6);
        if let Some(err) = &self.browse.filter_error {
            list = list.push(text(format!("Invalid filter: {err}")).size(14));
        }
        for idx in &self.browse.matches {
            let Some(chapter) = self.browse.chapters.get(*idx) else {
                continue;
            };
            let label = format!(
                "{}. {} ({}) - {} ayahs, {}",
                chapter.number,
                chapter.english_name,
                chapter.english_name_translation,
                chapter.number_of_ayahs,
                chapter.revelation_type
            );
            list = list.push(
                row![
                    button("Open").on_press(Message::OpenSurah(chapter.number)),
                    text(label),
                    horizontal_space(),
                    text(chapter.name.as_str()).shaping(Shaping::Advanced),
                ]
                .spacing(10)
                .align_y(Vertical::Center),
            );
        }

        column![filter, scrollable(list).height(Length::Fill)]
            .spacing(12)
            .into()
    }

    fn surah_view(&self) -> Element<'_, Message> {
        let header = row![
            text(self.surah.english_name.as_str()).size(24),
            text(self.surah.name.as_str())
                .size(24)
                .shaping(Shaping::Advanced),
            horizontal_space(),
            pick_list(
                TRANSLATION_EDITIONS,
                self.selected_translation(),
                Message::TranslationChanged
            ),
        ]
        .spacing(12)
        .align_y(Vertical::Center);

        if self.surah.loading {
            return column![header, text("Loading surah...")].spacing(12).into();
        }
        if let Some(err) = &self.surah.error {
            return column![header, error_banner(err)].spacing(12).into();
        }
        if self.surah.number.is_none() {
            return column![header, text("Open a surah from the browse screen.")]
                .spacing(12)
                .into();
        }

        let surah_number = self.surah.number.unwrap_or(0);
        let mut verses = Column::new().spacing(14);
        for verse in &self.surah.arabic {
            let translation = self
                .surah
                .translation_for(verse.number_in_surah)
                .unwrap_or("");
            let bookmark_label = if self.bookmarks.contains(verse.number) {
                "Unbookmark"
            } else {
                "Bookmark"
            };
            verses = verses.push(
                row![
                    column![
                        self.verse_play_button(verse.number),
                        button(bookmark_label).on_press(Message::ToggleBookmark(verse.number)),
                    ]
                    .spacing(4),
                    column![
                        text(verse.text.as_str())
                            .size(self.config.arabic_font_size as f32)
                            .shaping(Shaping::Advanced)
                            .wrapping(Wrapping::WordOrGlyph)
                            .align_x(Horizontal::Right)
                            .width(Length::Fill),
                        text(translation)
                            .size(self.config.translation_font_size as f32)
                            .wrapping(Wrapping::WordOrGlyph)
                            .width(Length::Fill),
                    ]
                    .spacing(6)
                    .width(Length::Fill),
                    text(format!("{}:{}", surah_number, verse.number_in_surah)).size(13),
                ]
                .spacing(12)
                .align_y(Vertical::Top),
            );
        }

        column![header, scrollable(verses).height(Length::Fill)]
            .spacing(12)
            .into()
    }

    fn reader_view(&self) -> Element<'_, Message> {
        let juz_numbers: Vec<u32> = (1..=JUZ_COUNT).collect();
        let picker = row![
            text("Juz"),
            pick_list(juz_numbers, self.reader.juz, Message::JuzSelected),
            text(self.player_status()).size(14),
        ]
        .spacing(10)
        .align_y(Vertical::Center);

        if self.reader.loading {
            return column![picker, text("Loading juz...")].spacing(12).into();
        }
        if let Some(err) = &self.reader.error {
            return column![picker, error_banner(err)].spacing(12).into();
        }
        let Some(group) = self.reader.current_group() else {
            return column![picker, text("Pick a juz to start reading.")]
                .spacing(12)
                .into();
        };

        let total_pages = self.reader.pages.len();
        let prev_button = if self.reader.current_page > 0 {
            button("Previous").on_press(Message::PreviousPage)
        } else {
            button("Previous")
        };
        let next_button = if self.reader.current_page + 1 < total_pages {
            button("Next").on_press(Message::NextPage)
        } else {
            button("Next")
        };
        let page_has_audio = group
            .verses
            .iter()
            .any(|v| self.audio_url_for(v.number).is_some());
        let session_button = if self.player.sequential {
            button("Stop").on_press(Message::StopPlayback)
        } else if page_has_audio {
            button("Play Page").on_press(Message::PlayPage)
        } else {
            button("Play Page")
        };

        let controls = row![
            prev_button,
            next_button,
            text(format!(
                "Page {} of {} (mushaf page {})",
                self.reader.current_page + 1,
                total_pages,
                group.page
            )),
            horizontal_space(),
            session_button,
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let mut verses = Column::new().spacing(14);
        for verse in &group.verses {
            // The start of a surah gets its name as a section header.
            if verse.number_in_surah == 1 {
                if let Some(surah) = &verse.surah {
                    verses = verses.push(
                        text(surah.name.as_str())
                            .size(22)
                            .shaping(Shaping::Advanced)
                            .align_x(Horizontal::Center)
                            .width(Length::Fill),
                    );
                }
            }
            verses = verses.push(self.reader_verse_row(verse));
        }

        let page_view = scrollable(container(verses).width(Length::Fill).padding(8))
            .id(PAGE_SCROLL_ID.clone())
            .height(Length::Fill);

        column![picker, controls, page_view].spacing(12).into()
    }

    fn reader_verse_row<'a>(&'a self, verse: &'a Verse) -> Element<'a, Message> {
        row![
            self.verse_play_button(verse.number),
            text(verse.text.as_str())
                .size(self.config.arabic_font_size as f32)
                .shaping(Shaping::Advanced)
                .wrapping(Wrapping::WordOrGlyph)
                .align_x(Horizontal::Right)
                .width(Length::Fill),
            text(format!("({})", verse.number_in_surah)).size(13),
        ]
        .spacing(12)
        .align_y(Vertical::Top)
        .into()
    }

    fn verse_play_button(&self, verse: u32) -> Element<'_, Message> {
        let label = if self.player.is_current(verse) {
            "Stop"
        } else {
            "Play"
        };
        let play = if self.audio_url_for(verse).is_some() {
            button(label).on_press(Message::PlayVerse(verse))
        } else {
            button(label)
        };
        play.into()
    }

    fn player_status(&self) -> String {
        match self.player.lifecycle {
            PlayerLifecycle::Idle => String::new(),
            PlayerLifecycle::Loading { verse, .. } => format!("Loading verse {verse}..."),
            PlayerLifecycle::Playing { verse } => format!("Playing verse {verse}"),
        }
    }

    fn search_view(&self) -> Element<'_, Message> {
        let input = row![
            text_input("Search the Quran", &self.search.query)
                .on_input(Message::SearchQueryChanged)
                .on_submit(Message::SearchSubmit)
                .padding(8),
            button("Search").on_press(Message::SearchSubmit),
        ]
        .spacing(10)
        .align_y(Vertical::Center);

        if self.search.loading {
            return column![input, text("Searching...")].spacing(12).into();
        }
        if let Some(err) = &self.search.error {
            return column![input, error_banner(err)].spacing(12).into();
        }
        let Some(results) = &self.search.results else {
            return column![input].spacing(12).into();
        };

        let mut list = Column::new().spacing(10);
        list = list.push(text(format!("{} matches", results.count)).size(14));
        for hit in &results.matches {
            let reference = hit
                .surah
                .as_ref()
                .map(|s| format!("{} ({}:{})", s.english_name, s.number, hit.number_in_surah))
                .unwrap_or_else(|| format!("Verse {}", hit.number));
            list = list.push(
                column![
                    text(reference).size(14),
                    text(hit.text.as_str())
                        .size(self.config.translation_font_size as f32)
                        .wrapping(Wrapping::WordOrGlyph)
                        .width(Length::Fill),
                ]
                .spacing(4),
            );
        }

        column![input, scrollable(list).height(Length::Fill)]
            .spacing(12)
            .into()
    }

    fn bookmarks_view(&self) -> Element<'_, Message> {
        if self.bookmarks.entries.is_empty() {
            return column![text("No bookmarks yet. Add them from the surah screen.")]
                .spacing(12)
                .into();
        }

        let mut list = Column::new().spacing(10);
        for entry in self.bookmarks.entries.values() {
            list = list.push(
                row![
                    button("Remove").on_press(Message::ToggleBookmark(entry.verse)),
                    column![
                        text(format!(
                            "{} {}:{}",
                            entry.surah_name, entry.surah_number, entry.number_in_surah
                        ))
                        .size(14),
                        text(entry.text.as_str())
                            .size(self.config.arabic_font_size as f32)
                            .shaping(Shaping::Advanced)
                            .wrapping(Wrapping::WordOrGlyph)
                            .align_x(Horizontal::Right)
                            .width(Length::Fill),
                    ]
                    .spacing(4)
                    .width(Length::Fill),
                ]
                .spacing(12)
                .align_y(Vertical::Top),
            );
        }

        column![scrollable(list).height(Length::Fill)].spacing(12).into()
    }
}

fn error_banner<'a>(err: &'a str) -> Element<'a, Message> {
    container(text(format!("Error: {err}")).size(16))
        .padding(12)
        .width(Length::Fill)
        .into()
}
