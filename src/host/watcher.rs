use crate::host::source::SessionSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityEvent {
    Appeared,
    Changed,
    Vanished,
}

/// Turns successive fingerprints of a sheet into availability events.
#[derive(Debug, Default)]
pub struct AvailabilityWatcher {
    last: Option<u64>,
}

impl AvailabilityWatcher {
    pub fn observe(&mut self, source: &dyn SessionSource) -> Option<AvailabilityEvent> {
        let current = source.fingerprint();
        let event = match (self.last, current) {
            (None, Some(_)) => Some(AvailabilityEvent::Appeared),
            (Some(_), None) => Some(AvailabilityEvent::Vanished),
            (Some(before), Some(after)) if before != after => Some(AvailabilityEvent::Changed),
            _ => None,
        };
        self.last = current;
        event
    }
}
