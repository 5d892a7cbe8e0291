/// Presenter - periodic refresh of a display surface
pub mod format;
pub mod messages;
pub mod surface;

pub use format::{build_snapshot, HoursInfo, Snapshot};
pub use messages::ControlMessage;
pub use surface::{DisplaySurface, JsonSurface, Layout, TerminalSurface};

use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::error::{ClockError, Result};
use crate::time::{Clock, CivilTimeResolver, MarketCalendar, TzResolver};
use crate::types::Config;

const CONTROL_CHANNEL_CAPACITY: usize = 32;

/// Owns the clock, the display surface and all rendering state
pub struct Presenter<C, S, R = TzResolver> {
    config: Config,
    calendar: MarketCalendar<R>,
    clock: C,
    surface: S,
    layout: Layout,
}

impl<C: Clock, S: DisplaySurface> Presenter<C, S, TzResolver> {
    pub fn new(config: Config, clock: C, surface: S) -> Self {
        Presenter::with_calendar(config, MarketCalendar::new(), clock, surface)
    }
}

impl<C, S, R> Presenter<C, S, R>
where
    C: Clock,
    S: DisplaySurface,
    R: CivilTimeResolver,
{
    pub fn with_calendar(config: Config, calendar: MarketCalendar<R>, clock: C, surface: S) -> Self {
        let layout = Layout {
            compact: config.compact,
        };
        Presenter {
            config,
            calendar,
            clock,
            surface,
            layout,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn apply(&mut self, message: ControlMessage) {
        debug!("Control message: {:?}", message);
        message.apply(&mut self.layout);
    }

    /// Compute one snapshot from the clock and write it to the surface
    pub fn render_once(&mut self) -> Result<Snapshot> {
        let now = self.clock.now();
        let snapshot = build_snapshot(&self.calendar, &self.config, now);
        self.surface.render(&snapshot, &self.layout)?;
        Ok(snapshot)
    }

    /// Refresh until `shutdown` flips to true or its sender is dropped
    pub async fn run(
        mut self,
        mut shutdown: watch::Receiver<bool>,
        mut controls: mpsc::Receiver<ControlMessage>,
    ) -> Result<()> {
        let period = Duration::from_millis(self.config.refresh_interval_ms);
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("Presenter started (refresh every {:?})", period);

        loop {
            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    continue;
                }
                Some(message) = controls.recv() => {
                    self.apply(message);
                }
                _ = ticker.tick() => {}
            }

            if let Err(e) = self.render_once() {
                error!("Render failed: {} ({})", e, e.error_code());
                if e.is_fatal() {
                    return Err(e);
                }
            }
        }

        info!("Presenter stopped");
        Ok(())
    }
}

impl<C, S, R> Presenter<C, S, R>
where
    C: Clock + 'static,
    S: DisplaySurface + 'static,
    R: CivilTimeResolver + 'static,
{
    /// Run on a tokio task; the handle is the only way to stop it
    pub fn spawn(self) -> PresenterHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (controls_tx, controls_rx) = mpsc::channel(CONTROL_CHANNEL_CAPACITY);
        let task = tokio::spawn(self.run(shutdown_rx, controls_rx));

        PresenterHandle {
            shutdown: shutdown_tx,
            controls: controls_tx,
            task,
        }
    }
}

/// Cancellation and control side of a spawned presenter
pub struct PresenterHandle {
    shutdown: watch::Sender<bool>,
    controls: mpsc::Sender<ControlMessage>,
    task: JoinHandle<Result<()>>,
}

impl PresenterHandle {
    pub fn controls(&self) -> mpsc::Sender<ControlMessage> {
        self.controls.clone()
    }

    pub async fn send(&self, message: ControlMessage) -> Result<()> {
        self.controls
            .send(message)
            .await
            .map_err(|_| ClockError::TaskFailed("presenter is no longer running".to_string()))
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Resolves once the presenter task has exited on its own
    pub async fn stopped(&self) {
        self.controls.closed().await
    }

    /// Stop the periodic refresh and wait for the task to exit.
    /// Nothing is rendered after this returns.
    pub async fn cancel(self) -> Result<()> {
        let _ = self.shutdown.send(true);
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(ClockError::TaskFailed(e.to_string())),
        }
    }
}
