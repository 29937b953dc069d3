use super::TrackerSignal;

/// Receives tracker signals after each state transition.
///
/// Dispatch is synchronous and fire-and-forget: handlers run on the calling
/// thread and must not block it. Presentation layers implement this to
/// refresh whatever they display.
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: &TrackerSignal);

    fn handle_signals(&mut self, signals: &[TrackerSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}
