use crate::MotorCommand;

/// Whether a face is currently considered tracked, after hysteresis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    Absent,
    Present,
}

/// Edge of the presence state machine crossed during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Acquired,
    Lost,
}

/// Mutable state of one tracking session.
///
/// Owned by [`TrackingController`](crate::TrackingController); read-only
/// snapshots are handed out through [`TrackingController::session`](crate::TrackingController::session).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackingSession {
    presence: Presence,
    missed_ticks: u32,
    last_command: MotorCommand,
}

impl TrackingSession {
    /// Fresh session: absent, no misses, stopped.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Consecutive empty ticks since the face was last seen.
    pub fn missed_ticks(&self) -> u32 {
        self.missed_ticks
    }

    pub fn last_command(&self) -> MotorCommand {
        self.last_command
    }

    /// Record a detection. Returns [`Transition::Acquired`] when this is the
    /// first sighting after absence.
    pub(crate) fn observe(&mut self) -> Option<Transition> {
        self.missed_ticks = 0;
        match self.presence {
            Presence::Absent => {
                self.presence = Presence::Present;
                Some(Transition::Acquired)
            }
            Presence::Present => None,
        }
    }

    /// Record an empty tick. Returns [`Transition::Lost`] once `timeout`
    /// consecutive misses accumulate while present.
    pub(crate) fn miss(&mut self, timeout: u32) -> Option<Transition> {
        if self.presence == Presence::Absent {
            return None;
        }
        self.missed_ticks += 1;
        if self.missed_ticks >= timeout {
            self.presence = Presence::Absent;
            self.missed_ticks = 0;
            Some(Transition::Lost)
        } else {
            None
        }
    }

    /// Store `command` as the latest decision, returning whether it differs
    /// from the previous one.
    pub(crate) fn decide(&mut self, command: MotorCommand) -> bool {
        let changed = self.last_command != command;
        self.last_command = command;
        changed
    }
}
