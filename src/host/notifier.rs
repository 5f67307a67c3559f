use crate::ui::messages;
use notify_rust::Notification;
use tracing::debug;

/// Fire-and-forget delivery; failures are never reported to the caller.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

/// Desktop notification through the OS notification service.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    appname: String,
}

impl DesktopNotifier {
    pub fn new(appname: impl Into<String>) -> Self {
        Self {
            appname: appname.into(),
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) {
        if let Err(e) = Notification::new()
            .summary(title)
            .body(body)
            .appname(&self.appname)
            .icon("alarm-clock")
            .show()
        {
            debug!(error = %e, "desktop notification not delivered");
        }
    }
}

/// Prints notifications to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str) {
        messages::notice(format!("{title}: {body}"));
    }
}

/// Drops everything (notifications disabled or not permitted).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _body: &str) {}
}

/// Sends to every wrapped notifier in order.
pub struct FanoutNotifier(pub Vec<Box<dyn Notifier>>);

impl Notifier for FanoutNotifier {
    fn notify(&self, title: &str, body: &str) {
        for n in &self.0 {
            n.notify(title, body);
        }
    }
}
