//! Coordinator that owns one tracking session: availability events start and
//! stop it, the periodic task drives notifications and re-renders.

use crate::core::calculator::{aggregate::aggregate, remaining::remaining};
use crate::core::logic::Core;
use crate::core::notify::scheduler::{Notification, NotificationScheduler};
use crate::core::ticker::PeriodicTask;
use crate::host::clock::Clock;
use crate::host::notifier::Notifier;
use crate::host::renderer::Renderer;
use crate::host::source::SessionSource;
use crate::host::watcher::{AvailabilityEvent, AvailabilityWatcher};
use crate::models::aggregate::AggregateResult;
use crate::models::display::DisplayBundle;
use std::time::Instant;
use tracing::{debug, info};

/// Values cached between ticks for the session currently tracked.
#[derive(Debug, Default)]
pub struct TrackingContext {
    first_start_time: Option<String>,
    total_break_minutes: i64,
    task: PeriodicTask,
}

impl TrackingContext {
    pub fn is_active(&self) -> bool {
        self.task.is_running()
    }

    pub fn first_start_time(&self) -> Option<&str> {
        self.first_start_time.as_deref()
    }

    pub fn total_break_minutes(&self) -> i64 {
        self.total_break_minutes
    }

    pub fn task(&self) -> &PeriodicTask {
        &self.task
    }

    fn cache(&mut self, agg: &AggregateResult) {
        self.first_start_time = agg.first_start_time.clone();
        self.total_break_minutes = agg.total_break_minutes;
    }

    fn clear(&mut self) {
        self.task.cancel();
        self.first_start_time = None;
        self.total_break_minutes = 0;
    }
}

pub struct Tracker {
    source: Box<dyn SessionSource>,
    clock: Box<dyn Clock>,
    notifier: Box<dyn Notifier>,
    renderer: Box<dyn Renderer>,
    title: String,
    watcher: AvailabilityWatcher,
    context: TrackingContext,
    scheduler: NotificationScheduler,
}

impl Tracker {
    pub fn new(
        source: Box<dyn SessionSource>,
        clock: Box<dyn Clock>,
        notifier: Box<dyn Notifier>,
        renderer: Box<dyn Renderer>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            source,
            clock,
            notifier,
            renderer,
            title: title.into(),
            watcher: AvailabilityWatcher::default(),
            context: TrackingContext::default(),
            scheduler: NotificationScheduler::new(),
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.context.is_active()
    }

    pub fn context(&self) -> &TrackingContext {
        &self.context
    }

    pub fn scheduler(&self) -> &NotificationScheduler {
        &self.scheduler
    }

    /// One pass of the run loop: observe the sheet, then run the tick if due.
    /// A sheet change and a due tick in the same pass share one render.
    pub fn poll(&mut self, now: Instant) -> Option<Notification> {
        let mut dirty = match self.watcher.observe(self.source.as_ref()) {
            Some(event) => self.apply_availability(event, now),
            None => false,
        };
        let mut fired = None;
        if self.context.task.poll(now) {
            fired = self.check_checkpoints();
            dirty = true;
        }
        if dirty {
            self.render();
        }
        fired
    }

    pub fn on_availability(&mut self, event: AvailabilityEvent, now: Instant) {
        if self.apply_availability(event, now) {
            self.render();
        }
    }

    /// Returns whether the sheet needs a re-render.
    fn apply_availability(&mut self, event: AvailabilityEvent, now: Instant) -> bool {
        debug!(?event, tracking = self.is_tracking(), "sheet availability changed");
        match event {
            AvailabilityEvent::Appeared | AvailabilityEvent::Changed if !self.is_tracking() => {
                self.start_tracking(now);
                true
            }
            AvailabilityEvent::Changed => {
                if let Some(agg) = self.aggregate_now() {
                    self.context.cache(&agg);
                }
                true
            }
            AvailabilityEvent::Vanished => {
                if self.is_tracking() {
                    self.stop_tracking();
                }
                false
            }
            AvailabilityEvent::Appeared => false,
        }
    }

    /// Cancel whatever is running, cache the day's first clock-in and break
    /// total, and arm a fresh periodic task.
    pub fn start_tracking(&mut self, now: Instant) {
        self.context.clear();
        self.scheduler.reset_session();

        let Some(agg) = self.aggregate_now() else {
            debug!("no sessions yet, tracking not started");
            return;
        };
        if agg.first_start_time.is_none() {
            debug!("no first clock-in yet, tracking not started");
            return;
        }

        self.context.cache(&agg);
        self.context.task.start(now);
        info!(
            first_start = self.context.first_start_time(),
            break_minutes = self.context.total_break_minutes,
            "tracking started"
        );
    }

    pub fn stop_tracking(&mut self) {
        self.context.clear();
        self.renderer.clear();
        info!("tracking stopped");
    }

    /// Evaluate checkpoints against the cached values, notify, re-render.
    pub fn tick(&mut self) -> Option<Notification> {
        let fired = self.check_checkpoints();
        self.render();
        fired
    }

    fn check_checkpoints(&mut self) -> Option<Notification> {
        let now = self.clock.now();
        let fired = remaining(
            self.context.first_start_time(),
            self.context.total_break_minutes,
            now,
        )
        .and_then(|state| {
            debug!(%now, ?state, "tick");
            self.scheduler.evaluate(&state)
        });

        if let Some(n) = &fired {
            self.notifier.notify(&self.title, &n.body);
        }
        fired
    }

    /// Draw the current sheet. An available but empty sheet replaces
    /// whatever was on screen with the empty state.
    pub fn render(&mut self) -> Option<DisplayBundle> {
        let sessions = self.source.sessions();
        let Some(bundle) = Core::build_display(sessions.as_deref(), self.clock.now()) else {
            if sessions.is_some() {
                self.renderer.render_empty();
            }
            return None;
        };
        for brk in &bundle.breaks {
            self.renderer.annotate_break(brk);
        }
        self.renderer.render(&bundle);
        Some(bundle)
    }

    fn aggregate_now(&self) -> Option<AggregateResult> {
        let sessions = self.source.sessions();
        aggregate(sessions.as_deref(), self.clock.now())
    }
}
