//! Run-gated frame scheduler
//!
//! The host supplies "call me before the next frame" and "never mind". The
//! scheduler keeps at most one request outstanding and remembers its handle,
//! so a callback for a cancelled or stale request can be recognized and
//! dropped.

/// Opaque id of a requested frame (a `requestAnimationFrame` id on the web)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host display-refresh primitive
pub trait FrameHost {
    /// Schedule one callback before the next visual frame
    fn request_frame(&mut self) -> FrameHandle;
    /// Cancel a previously requested callback
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Running flag plus the outstanding frame request
#[derive(Debug, Default)]
pub struct FrameScheduler {
    running: bool,
    pending: Option<FrameHandle>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handle of the outstanding request, if any
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Start running. Returns false if already running.
    pub fn start(&mut self, host: &mut impl FrameHost) -> bool {
        if self.running {
            log::debug!("Scheduler already running");
            return false;
        }
        self.running = true;
        if self.pending.is_none() {
            self.pending = Some(host.request_frame());
        }
        true
    }

    /// Stop running and cancel any outstanding request. Safe to repeat.
    pub fn stop(&mut self, host: &mut impl FrameHost) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            host.cancel_frame(handle);
        }
    }

    /// Flip the running flag. Returns the new state.
    pub fn toggle(&mut self, host: &mut impl FrameHost) -> bool {
        if self.running {
            self.stop(host);
        } else {
            self.start(host);
        }
        self.running
    }

    /// Accept a frame callback.
    ///
    /// Returns true if the frame should run: the scheduler is running and
    /// `handle` is the outstanding request. Either way a matching request is
    /// consumed.
    pub fn begin_frame(&mut self, handle: FrameHandle) -> bool {
        if self.pending != Some(handle) {
            log::debug!("Ignoring stale frame {:?}", handle);
            return false;
        }
        self.pending = None;
        self.running
    }

    /// Request the next frame if still running and none is outstanding
    pub fn schedule_next(&mut self, host: &mut impl FrameHost) {
        if self.running && self.pending.is_none() {
            self.pending = Some(host.request_frame());
        }
    }
}

/// Frame host driven by hand: frames fire only when the owner pumps them.
///
/// Used by the native binary and by tests.
#[derive(Debug, Default)]
pub struct ManualFrameHost {
    next_id: i32,
    requested: Vec<FrameHandle>,
    cancelled: usize,
}

impl ManualFrameHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every outstanding request, oldest first
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.requested)
    }

    /// Requests not yet taken or cancelled
    pub fn outstanding(&self) -> usize {
        self.requested.len()
    }

    /// Total successful cancellations
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameHost for ManualFrameHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.requested.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.requested.len();
        self.requested.retain(|h| *h != handle);
        if self.requested.len() < before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_requests_one_frame() {
        let mut host = ManualFrameHost::new();
        let mut scheduler = FrameScheduler::new();

        assert!(scheduler.start(&mut host));
        assert!(scheduler.is_running());
        assert_eq!(host.outstanding(), 1);
        assert!(scheduler.pending().is_some());

        // Idempotent
        assert!(!scheduler.start(&mut host));
        assert_eq!(host.outstanding(), 1);
    }

    #[test]
    fn test_toggle_on_then_off_cancels() {
        let mut host = ManualFrameHost::new();
        let mut scheduler = FrameScheduler::new();

        assert!(scheduler.toggle(&mut host));
        assert_eq!(host.outstanding(), 1);

        assert!(!scheduler.toggle(&mut host));
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.pending(), None);
        assert_eq!(host.outstanding(), 0);
        assert_eq!(host.cancelled(), 1);
    }

    #[test]
    fn test_stop_when_stopped_is_noop() {
        let mut host = ManualFrameHost::new();
        let mut scheduler = FrameScheduler::new();

        scheduler.stop(&mut host);
        scheduler.stop(&mut host);
        assert!(!scheduler.is_running());
        assert_eq!(host.cancelled(), 0);
    }

    #[test]
    fn test_frame_lifecycle() {
        let mut host = ManualFrameHost::new();
        let mut scheduler = FrameScheduler::new();
        scheduler.start(&mut host);

        let due = host.take_due();
        assert_eq!(due.len(), 1);
        assert!(scheduler.begin_frame(due[0]));
        assert_eq!(scheduler.pending(), None);

        scheduler.schedule_next(&mut host);
        assert_eq!(host.outstanding(), 1);
        // Only one request outstanding at a time
        scheduler.schedule_next(&mut host);
        assert_eq!(host.outstanding(), 1);
    }

    #[test]
    fn test_stale_frame_is_ignored() {
        let mut host = ManualFrameHost::new();
        let mut scheduler = FrameScheduler::new();

        scheduler.start(&mut host);
        let first = scheduler.pending().expect("requested");
        scheduler.stop(&mut host);
        scheduler.start(&mut host);

        // Callback for the cancelled request arrives late
        assert!(!scheduler.begin_frame(first));
        assert!(scheduler.pending().is_some());
    }

    #[test]
    fn test_frame_after_stop_does_not_run() {
        let mut host = ManualFrameHost::new();
        let mut scheduler = FrameScheduler::new();

        scheduler.start(&mut host);
        let handle = scheduler.pending().expect("requested");
        scheduler.stop(&mut host);

        assert!(!scheduler.begin_frame(handle));
        scheduler.schedule_next(&mut host);
        assert_eq!(host.outstanding(), 0);
    }
}
