use super::super::state::{App, MAX_VOLUME, MIN_VOLUME, PendingAdvance, PlayerLifecycle};
use super::Effect;
use crate::audio::VersePlayback;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

impl App {
    /// Toggle semantics: playing verse `n` again stops it (without ending a
    /// sequential session); anything else tears down the old sink and starts
    /// loading the new verse. A verse with no recitation URL is a no-op.
    pub(super) fn handle_play_verse(&mut self, verse: u32, effects: &mut Vec<Effect>) {
        if self.player.is_current(verse) {
            self.player.clear_playback();
            info!(verse, "Stopped verse playback");
            return;
        }
        let Some(url) = self.audio_url_for(verse) else {
            warn!(verse, "No recitation audio for verse");
            return;
        };
        self.player.clear_playback();
        self.player.request_id = self.player.request_id.wrapping_add(1);
        let request_id = self.player.request_id;
        self.player.lifecycle = PlayerLifecycle::Loading { verse, request_id };
        debug!(verse, request_id, "Fetching recitation audio");
        effects.push(Effect::FetchAudio {
            verse,
            url,
            request_id,
        });
    }

    /// Start a sequential session over the current page. Requires at least
    /// one verse on the page with a recitation URL.
    pub(super) fn handle_play_page(&mut self, effects: &mut Vec<Effect>) {
        let Some(first) = self.first_playable_page_verse() else {
            warn!("No recitation audio available on this page");
            return;
        };
        self.player.sequential = true;
        if let Some(group) = self.reader.current_group() {
            info!(page = group.page, "Starting sequential page playback");
        }
        self.handle_play_verse(first, effects);
    }

    fn first_playable_page_verse(&self) -> Option<u32> {
        let group = self.reader.current_group()?;
        let first = group.verses.first()?.number;
        group
            .verses
            .iter()
            .any(|v| self.audio_url_for(v.number).is_some())
            .then_some(first)
    }

    pub(super) fn handle_audio_loaded(
        &mut self,
        verse: u32,
        request_id: u64,
        result: Result<Vec<u8>, String>,
    ) {
        match self.player.lifecycle {
            PlayerLifecycle::Loading {
                verse: pending,
                request_id: current,
            } if pending == verse && current == request_id => {}
            _ => {
                debug!(verse, request_id, "Ignoring stale audio result");
                return;
            }
        }
        match result {
            Ok(bytes) => match VersePlayback::start(bytes, self.config.volume) {
                Ok(playback) => {
                    self.player.playback = Some(playback);
                    self.player.lifecycle = PlayerLifecycle::Playing { verse };
                    info!(verse, "Recitation playing");
                }
                Err(err) => {
                    warn!(verse, "Failed to start recitation: {err:#}");
                    self.player.reset_session();
                }
            },
            Err(err) => {
                warn!(verse, "Failed to fetch recitation audio: {err}");
                self.player.reset_session();
            }
        }
    }

    /// Poll the sink for natural completion and fire any due auto-advance.
    pub(super) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let finished = self
            .player
            .playback
            .as_ref()
            .map(VersePlayback::is_finished)
            .unwrap_or(false);
        if finished {
            self.on_playback_finished();
        }
        if let Some(pending) = self.player.pending_advance {
            if now >= pending.due {
                self.player.pending_advance = None;
                if self.player.sequential {
                    self.handle_play_verse(pending.verse, effects);
                }
            }
        }
    }

    /// A verse finished on its own. In a sequential session the next verse
    /// of the same page is scheduled after the configured gap; reaching the
    /// end of the page, or a next verse without audio, ends the session.
    pub(super) fn on_playback_finished(&mut self) {
        let Some(finished) = self.player.current_verse() else {
            return;
        };
        if let Some(playback) = self.player.playback.take() {
            playback.stop();
        }
        self.player.lifecycle = PlayerLifecycle::Idle;
        debug!(verse = finished, "Recitation finished");
        if !self.player.sequential {
            return;
        }

        let next = self.reader.current_group().and_then(|group| {
            group
                .verses
                .iter()
                .position(|v| v.number == finished)
                .and_then(|idx| group.verses.get(idx + 1))
                .map(|v| v.number)
        });
        match next {
            Some(next) if self.audio_url_for(next).is_some() => {
                let gap = Duration::from_secs_f32(self.config.playback_gap_secs);
                self.player.pending_advance = Some(PendingAdvance {
                    verse: next,
                    due: Instant::now() + gap,
                });
                debug!(verse = next, "Scheduled next verse after gap");
            }
            _ => {
                self.player.sequential = false;
                info!("Sequential playback ended");
            }
        }
    }

    pub(super) fn handle_volume_changed(&mut self, volume: f32, effects: &mut Vec<Effect>) {
        self.config.volume = volume.clamp(MIN_VOLUME, MAX_VOLUME);
        if let Some(playback) = &self.player.playback {
            playback.set_volume(self.config.volume);
        }
        effects.push(Effect::SaveConfig);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::tests::test_app;
    use super::super::Effect;
    use super::*;
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

    /// One page holding verses 101..=103 where only 101 and 102 carry audio.
    fn app_with_page() -> App {
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
                    verse(103, 582, None),
                ],
                audio_verses: vec![
                    verse(101, 582, Some("https://cdn.example/101.mp3")),
                    verse(102, 582, Some("https://cdn.example/102.mp3")),
                    verse(103, 582, None),
                ],
            }),
        });
        app
    }

    fn pending_request(app: &App) -> (u32, u64) {
        match app.player.lifecycle {
            PlayerLifecycle::Loading { verse, request_id } => (verse, request_id),
            other => panic!("expected a loading player, got {other:?}"),
        }
    }

    #[test]
    fn play_verse_starts_a_fetch() {
        let mut app = app_with_page();
        let effects = app.reduce(Message::PlayVerse(101));
        let (verse, _) = pending_request(&app);
        assert_eq!(verse, 101);
        assert!(matches!(
            effects.as_slice(),
            [Effect::FetchAudio { verse: 101, .. }]
        ));
    }

    #[test]
    fn play_verse_without_audio_is_a_no_op() {
        let mut app = app_with_page();
        let effects = app.reduce(Message::PlayVerse(103));
        assert!(effects.is_empty());
        assert_eq!(app.player.lifecycle, PlayerLifecycle::Idle);
    }

    #[test]
    fn toggling_the_loading_verse_cancels_it_but_keeps_the_session() {
        let mut app = app_with_page();
        app.reduce(Message::PlayPage);
        let (verse, request_id) = pending_request(&app);
        assert_eq!(verse, 101);

        app.reduce(Message::PlayVerse(101));
        assert_eq!(app.player.lifecycle, PlayerLifecycle::Idle);
        assert!(app.player.sequential);

        // The cancelled fetch eventually lands and must be ignored.
        app.reduce(Message::AudioLoaded {
            verse: 101,
            request_id,
            result: Err("too late".to_string()),
        });
        assert!(app.player.sequential);
        assert_eq!(app.player.lifecycle, PlayerLifecycle::Idle);
    }

    #[test]
    fn switching_verses_invalidates_the_old_request() {
        let mut app = app_with_page();
        app.reduce(Message::PlayVerse(101));
        let (_, old_request) = pending_request(&app);
        app.reduce(Message::PlayVerse(102));
        let (verse, new_request) = pending_request(&app);
        assert_eq!(verse, 102);
        assert_ne!(old_request, new_request);

        app.reduce(Message::AudioLoaded {
            verse: 101,
            request_id: old_request,
            result: Err("slow".to_string()),
        });
        assert_eq!(pending_request(&app), (102, new_request));
    }

    #[test]
    fn failed_audio_fetch_ends_the_session() {
        let mut app = app_with_page();
        app.reduce(Message::PlayPage);
        let (verse, request_id) = pending_request(&app);
        app.reduce(Message::AudioLoaded {
            verse,
            request_id,
            result: Err("404".to_string()),
        });
        assert_eq!(app.player.lifecycle, PlayerLifecycle::Idle);
        assert!(!app.player.sequential);
    }

    #[test]
    fn sequential_advance_schedules_the_next_verse() {
        let mut app = app_with_page();
        app.player.sequential = true;
        app.player.lifecycle = PlayerLifecycle::Playing { verse: 101 };
        app.on_playback_finished();
        let pending = app.player.pending_advance.unwrap();
        assert_eq!(pending.verse, 102);
        assert!(app.player.sequential);
    }

    #[test]
    fn sequential_stops_at_a_verse_without_audio() {
        let mut app = app_with_page();
        app.player.sequential = true;
        app.player.lifecycle = PlayerLifecycle::Playing { verse: 102 };
        app.on_playback_finished();
        assert!(app.player.pending_advance.is_none());
        assert!(!app.player.sequential);
    }

    #[test]
    fn completion_without_sequential_does_not_advance() {
        let mut app = app_with_page();
        app.player.lifecycle = PlayerLifecycle::Playing { verse: 101 };
        app.on_playback_finished();
        assert!(app.player.pending_advance.is_none());
        assert_eq!(app.player.lifecycle, PlayerLifecycle::Idle);
    }

    #[test]
    fn due_advance_fires_on_tick() {
        let mut app = app_with_page();
        app.player.sequential = true;
        app.player.pending_advance = Some(PendingAdvance {
            verse: 102,
            due: Instant::now(),
        });
        let effects = app.reduce(Message::Tick(Instant::now() + Duration::from_millis(1)));
        assert!(matches!(
            effects.as_slice(),
            [Effect::FetchAudio { verse: 102, .. }]
        ));
    }

    #[test]
    fn early_tick_leaves_the_advance_pending() {
        let mut app = app_with_page();
        app.player.sequential = true;
        let due = Instant::now() + Duration::from_secs(60);
        app.player.pending_advance = Some(PendingAdvance { verse: 102, due });
        let effects = app.reduce(Message::Tick(Instant::now()));
        assert!(effects.is_empty());
        assert!(app.player.pending_advance.is_some());
    }

    #[test]
    fn stop_playback_cancels_a_pending_advance() {
        let mut app = app_with_page();
        app.player.sequential = true;
        app.player.pending_advance = Some(PendingAdvance {
            verse: 102,
            due: Instant::now(),
        });
        app.reduce(Message::StopPlayback);
        assert!(!app.player.is_active());
        assert!(!app.player.sequential);
    }

    #[test]
    fn volume_change_is_clamped_and_saved() {
        let mut app = app_with_page();
        let effects = app.reduce(Message::VolumeChanged(9.0));
        assert_eq!(app.config.volume, MAX_VOLUME);
        assert!(matches!(effects.as_slice(), [Effect::SaveConfig]));
    }
}
