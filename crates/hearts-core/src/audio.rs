//! Background music start-up policy.
//!
//! Playback is tried once immediately. If the browser refuses autoplay, one
//! user gesture is allowed to retry; after that the gate stays closed whatever
//! happens.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Autoplaying,
    AwaitingGesture,
    Retrying,
    Playing,
    Blocked,
}

#[derive(Clone, Debug)]
pub struct AutoplayGate {
    state: PlaybackState,
    attempts: u32,
}

impl Default for AutoplayGate {
    fn default() -> Self {
        Self {
            state: PlaybackState::Idle,
            attempts: 0,
        }
    }
}

impl AutoplayGate {
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Number of times playback has been requested from the platform.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Start the initial autoplay attempt. True if the caller should call play.
    pub fn begin(&mut self) -> bool {
        if self.state != PlaybackState::Idle {
            return false;
        }
        self.state = PlaybackState::Autoplaying;
        self.attempts += 1;
        true
    }

    pub fn on_started(&mut self) {
        if matches!(
            self.state,
            PlaybackState::Autoplaying | PlaybackState::Retrying
        ) {
            self.state = PlaybackState::Playing;
        }
    }

    /// Playback was refused. True if a one-time gesture listener should be
    /// installed; only the initial autoplay refusal earns one.
    pub fn on_rejected(&mut self) -> bool {
        match self.state {
            PlaybackState::Autoplaying => {
                self.state = PlaybackState::AwaitingGesture;
                true
            }
            PlaybackState::Retrying => {
                self.state = PlaybackState::Blocked;
                false
            }
            _ => false,
        }
    }

    /// A document click arrived. True exactly once, when a retry is owed.
    pub fn on_gesture(&mut self) -> bool {
        if self.state != PlaybackState::AwaitingGesture {
            return false;
        }
        self.state = PlaybackState::Retrying;
        self.attempts += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_autoplay_never_needs_a_listener() {
        let mut gate = AutoplayGate::default();
        assert!(gate.begin());
        gate.on_started();
        assert_eq!(gate.state(), PlaybackState::Playing);
        assert!(!gate.on_gesture());
        assert_eq!(gate.attempts(), 1);
    }

    #[test]
    fn begin_only_fires_once() {
        let mut gate = AutoplayGate::default();
        assert!(gate.begin());
        assert!(!gate.begin());
    }

    #[test]
    fn rejected_retry_blocks_for_good() {
        let mut gate = AutoplayGate::default();
        gate.begin();
        assert!(gate.on_rejected());
        assert!(gate.on_gesture());
        assert!(!gate.on_rejected());
        assert_eq!(gate.state(), PlaybackState::Blocked);
        assert!(!gate.on_gesture());
    }
}
