use crate::audio::VersePlayback;
use std::time::Instant;

/// Where the recitation player is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PlayerLifecycle {
    #[default]
    Idle,
    /// Audio bytes are in flight for this verse.
    Loading { verse: u32, request_id: u64 },
    Playing { verse: u32 },
}

/// An auto-advance to the next verse, scheduled after the inter-verse gap.
#[derive(Debug, Clone, Copy)]
pub(in crate::app) struct PendingAdvance {
    pub(in crate::app) verse: u32,
    pub(in crate::app) due: Instant,
}

/// Playback model. `sequential` marks a page-playback session; it survives a
/// manual pause of the current verse but ends at the page boundary, on error,
/// and on any navigation.
#[derive(Default)]
pub struct PlayerState {
    pub(in crate::app) playback: Option<VersePlayback>,
    pub(in crate::app) lifecycle: PlayerLifecycle,
    pub(in crate::app) sequential: bool,
    pub(in crate::app) pending_advance: Option<PendingAdvance>,
    pub(in crate::app) request_id: u64,
}

impl PlayerState {
    pub(in crate::app) fn current_verse(&self) -> Option<u32> {
        match self.lifecycle {
            PlayerLifecycle::Idle => None,
            PlayerLifecycle::Loading { verse, .. } | PlayerLifecycle::Playing { verse } => {
                Some(verse)
            }
        }
    }

    pub(in crate::app) fn is_current(&self, verse: u32) -> bool {
        self.current_verse() == Some(verse)
    }

    /// True while the Tick subscription needs to run.
    pub(in crate::app) fn is_active(&self) -> bool {
        self.lifecycle != PlayerLifecycle::Idle || self.pending_advance.is_some()
    }

    /// Release the sink and cancel any scheduled advance. Leaves `sequential`
    /// alone; callers decide whether the session ends.
    pub(in crate::app) fn clear_playback(&mut self) {
        if let Some(playback) = self.playback.take() {
            playback.stop();
        }
        self.lifecycle = PlayerLifecycle::Idle;
        self.pending_advance = None;
    }

    /// Tear everything down, sequential session included.
    pub(in crate::app) fn reset_session(&mut self) {
        self.sequential = false;
        self.clear_playback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_player_is_inactive() {
        let player = PlayerState::default();
        assert!(!player.is_active());
        assert_eq!(player.current_verse(), None);
    }

    #[test]
    fn pending_advance_keeps_player_active() {
        let mut player = PlayerState::default();
        player.pending_advance = Some(PendingAdvance {
            verse: 102,
            due: Instant::now(),
        });
        assert!(player.is_active());
    }

    #[test]
    fn clear_playback_preserves_sequential_flag() {
        let mut player = PlayerState::default();
        player.sequential = true;
        player.lifecycle = PlayerLifecycle::Playing { verse: 101 };
        player.clear_playback();
        assert_eq!(player.lifecycle, PlayerLifecycle::Idle);
        assert!(player.sequential);
    }

    #[test]
    fn reset_session_drops_sequential_flag() {
        let mut player = PlayerState::default();
        player.sequential = true;
        player.lifecycle = PlayerLifecycle::Loading {
            verse: 5,
            request_id: 3,
        };
        player.reset_session();
        assert!(!player.sequential);
        assert!(!player.is_active());
    }
}
