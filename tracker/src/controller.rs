use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    FaceObservation, MotorActuator, MotorCommand, Presence, Result, StopHandle, TrackerConfig,
    TrackerError, TrackingListener, TrackingSession, Transition, steer,
};

/// Result of one [`TrackingController::process_tick`] call.
///
/// Hosts that prefer queued dispatch over [`TrackingListener`] callbacks can
/// act on `transition` and `issued` directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// Presence after the tick.
    pub presence: Presence,
    /// Command in effect after the tick, `None` while idle and absent.
    pub decision: Option<MotorCommand>,
    /// Command actually sent to the actuator this tick.
    pub issued: Option<MotorCommand>,
    /// Presence edge crossed this tick, if any.
    pub transition: Option<Transition>,
    /// A listener requested a stop during this tick and the session has
    /// ended. `issued` is then the final STOP and `presence` is absent.
    pub stopped: bool,
}

/// Turns a stream of face observations into motor commands.
///
/// The controller is driven by exactly one caller. Ticks must be delivered
/// serially and in arrival order; a concurrent source has to funnel them
/// through a single queue first.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use tracker::{FaceObservation, NoopActuator, Presence, TrackerConfig, TrackingController};
///
/// let mut controller = TrackingController::new(TrackerConfig::default(), Arc::new(NoopActuator));
/// controller.start_session().unwrap();
/// let outcome = controller
///     .process_tick(Some(FaceObservation::new(0.0, 0.1)))
///     .unwrap();
/// assert_eq!(outcome.presence, Presence::Present);
/// controller.stop_session();
/// ```
pub struct TrackingController {
    config: TrackerConfig,
    actuator: Arc<dyn MotorActuator>,
    listeners: Vec<Arc<dyn TrackingListener>>,
    session: Option<TrackingSession>,
    stop: StopHandle,
}

impl TrackingController {
    /// Create an idle controller writing to `actuator`.
    ///
    /// `config` is validated by [`start_session`](Self::start_session).
    pub fn new(config: TrackerConfig, actuator: Arc<dyn MotorActuator>) -> Self {
        Self {
            config,
            actuator,
            listeners: Vec::new(),
            session: None,
            stop: StopHandle::default(),
        }
    }

    /// Register a listener for acquisition and loss notifications.
    pub fn add_listener(&mut self, listener: Arc<dyn TrackingListener>) {
        self.listeners.push(listener);
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Snapshot of the running session, if any.
    pub fn session(&self) -> Option<&TrackingSession> {
        self.session.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Handle that lets listeners or other owners request a stop.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Validate the configuration and begin tracking in the absent state.
    ///
    /// Issues STOP so the actuator starts from a known state. Calling this on
    /// a running session changes nothing.
    pub fn start_session(&mut self) -> Result<()> {
        if self.session.is_some() {
            return Ok(());
        }
        self.config.validate()?;
        self.stop.take();
        self.session = Some(TrackingSession::new());
        info!(config = ?self.config, "tracking session started");
        self.issue(MotorCommand::Stop);
        Ok(())
    }

    /// Stop the motors and discard the session. Safe in any state.
    pub fn stop_session(&mut self) {
        self.stop.take();
        self.issue(MotorCommand::Stop);
        if self.session.take().is_some() {
            info!("tracking session stopped");
        }
    }

    /// Process one detector cycle.
    ///
    /// `observation` is `None` when the frame contained no face or the frame
    /// never arrived. Fails only with [`TrackerError::NotStarted`].
    pub fn process_tick(&mut self, observation: Option<FaceObservation>) -> Result<TickOutcome> {
        if self.stop.take() {
            self.stop_session();
        }
        let session = self.session.as_mut().ok_or(TrackerError::NotStarted)?;

        let (transition, decision) = match observation {
            Some(obs) => (session.observe(), Some(steer(&obs, &self.config))),
            None => match session.miss(self.config.loss_timeout_ticks) {
                Some(lost) => (Some(lost), Some(MotorCommand::Stop)),
                None if session.presence() == Presence::Present => {
                    debug!(
                        missed = session.missed_ticks(),
                        "face missing, holding last command"
                    );
                    (None, Some(session.last_command()))
                }
                None => (None, None),
            },
        };

        let issued = match (transition, decision) {
            // Loss always ends with an explicit STOP.
            (Some(Transition::Lost), _) => {
                session.decide(MotorCommand::Stop);
                Some(MotorCommand::Stop)
            }
            (_, Some(command)) => session.decide(command).then_some(command),
            (_, None) => None,
        };
        let presence = session.presence();

        if let Some(command) = issued {
            self.issue(command);
        }
        if let Some(transition) = transition {
            self.notify(transition);
        }
        if self.stop.take() {
            self.stop_session();
            return Ok(TickOutcome {
                presence: Presence::Absent,
                decision: Some(MotorCommand::Stop),
                issued: Some(MotorCommand::Stop),
                transition,
                stopped: true,
            });
        }

        Ok(TickOutcome {
            presence,
            decision,
            issued,
            transition,
            stopped: false,
        })
    }

    fn issue(&self, command: MotorCommand) {
        debug!(%command, "issuing motor command");
        self.actuator.set_motor_state(command);
    }

    fn notify(&self, transition: Transition) {
        match transition {
            Transition::Acquired => {
                info!("target acquired");
                for listener in &self.listeners {
                    listener.on_target_acquired();
                }
            }
            Transition::Lost => {
                info!(
                    timeout = self.config.loss_timeout_ticks,
                    "target lost"
                );
                for listener in &self.listeners {
                    listener.on_target_lost();
                }
            }
        }
    }
}
