//! Per-frame event coalescing

/// Collapses a burst of values into the latest one per animation frame.
///
/// The first submission after a flush or reset asks the host to schedule
/// a frame; later submissions only overwrite the stored value.
#[derive(Clone, Debug)]
pub struct FrameThrottle<T> {
    latest: Option<T>,
    scheduled: bool,
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameThrottle<T> {
    /// Create an idle throttle
    pub fn new() -> Self {
        Self {
            latest: None,
            scheduled: false,
        }
    }

    /// Store `value`. Returns true if the caller must request a frame.
    pub fn submit(&mut self, value: T) -> bool {
        self.latest = Some(value);
        if self.scheduled {
            false
        } else {
            self.scheduled = true;
            true
        }
    }

    /// Frame callback: take the latest value
    pub fn flush(&mut self) -> Option<T> {
        self.scheduled = false;
        self.latest.take()
    }

    /// Drop the stored value and forget any requested frame.
    ///
    /// Used when a gesture ends: the host may cancel its pending frame, so
    /// the next submission must request a new one. A frame that still fires
    /// afterwards flushes nothing.
    pub fn reset(&mut self) -> Option<T> {
        self.scheduled = false;
        self.latest.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_coalesces_to_latest() {
        let mut throttle = FrameThrottle::new();
        assert!(throttle.submit(1));
        assert!(!throttle.submit(2));
        assert!(!throttle.submit(3));

        assert_eq!(throttle.flush(), Some(3));
        assert_eq!(throttle.flush(), None);
    }

    #[test]
    fn test_schedules_again_after_flush() {
        let mut throttle = FrameThrottle::new();
        assert!(throttle.submit("a"));
        throttle.flush();
        assert!(throttle.submit("b"));
    }

    #[test]
    fn test_reset_requests_new_frame() {
        let mut throttle = FrameThrottle::new();
        throttle.submit(10);
        assert_eq!(throttle.reset(), Some(10));

        // The cancelled frame is not waited on
        assert!(throttle.submit(11));
        assert!(!throttle.submit(12));
        assert_eq!(throttle.flush(), Some(12));
    }

    #[test]
    fn test_late_frame_after_reset_is_empty() {
        let mut throttle: FrameThrottle<i32> = FrameThrottle::new();
        throttle.submit(1);
        throttle.reset();
        assert_eq!(throttle.flush(), None);
    }
}
