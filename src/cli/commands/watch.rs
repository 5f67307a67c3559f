use crate::cli::commands::resolve_source;
use crate::cli::parser::Commands;
use crate::config::{Config, OutputFormat};
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::host::clock::SystemClock;
use crate::host::notifier::{ConsoleNotifier, DesktopNotifier, FanoutNotifier, Notifier, NullNotifier};
use crate::host::renderer::{JsonRenderer, Renderer, TerminalRenderer};
use crate::signal::SignalHandler;
use crate::ui::messages::info;
use std::thread;
use std::time::{Duration, Instant};

const MIN_POLL_MS: u64 = 50;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        punches,
        json,
        no_desktop,
    } = cmd
    {
        let json = *json || cfg.output == OutputFormat::Json;
        let source = resolve_source(punches, cfg)?;

        // JSON output stays machine-readable: no console echo of notifications.
        let echo: Box<dyn Notifier> = if json {
            Box::new(NullNotifier)
        } else {
            Box::new(ConsoleNotifier)
        };
        let notifier: Box<dyn Notifier> = if cfg.desktop_notifications && !*no_desktop {
            let desktop: Box<dyn Notifier> = Box::new(DesktopNotifier::new("rworkday"));
            Box::new(FanoutNotifier(vec![desktop, echo]))
        } else {
            echo
        };
        let renderer: Box<dyn Renderer> = if json {
            Box::new(JsonRenderer)
        } else {
            Box::new(TerminalRenderer::new())
        };

        let mut tracker = Tracker::new(
            source,
            Box::new(SystemClock),
            notifier,
            renderer,
            cfg.notification_title.clone(),
        );

        let signal = SignalHandler::new()?;
        let poll = Duration::from_millis(cfg.watch_poll_ms.max(MIN_POLL_MS));

        if !json {
            info("Watching punches (Ctrl+C to stop)…");
        }

        while !signal.is_shutdown_requested() {
            tracker.poll(Instant::now());
            thread::sleep(poll);
        }

        if tracker.is_tracking() {
            tracker.stop_tracking();
        }
    }
    Ok(())
}
