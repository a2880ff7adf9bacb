//! Resubmission throttle

/// Rejects attempts that arrive within `window_ms` of the last accepted one
#[derive(Debug, Clone)]
pub struct SubmitThrottle {
    window_ms: u64,
    last_ms: Option<u64>,
}

impl SubmitThrottle {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_ms: None,
        }
    }

    /// A throttle whose window starts at `now_ms`
    pub fn acquired(window_ms: u64, now_ms: u64) -> Self {
        Self {
            window_ms,
            last_ms: Some(now_ms),
        }
    }

    /// Remaining wait in milliseconds, or zero when an attempt is allowed
    pub fn remaining(&self, now_ms: u64) -> u64 {
        match self.last_ms {
            Some(last) => self.window_ms.saturating_sub(now_ms.saturating_sub(last)),
            None => 0,
        }
    }

    /// Accept the attempt and start a new window, or return the remaining wait
    pub fn try_acquire(&mut self, now_ms: u64) -> Result<(), u64> {
        let remaining = self.remaining(now_ms);
        if remaining > 0 {
            return Err(remaining);
        }
        self.last_ms = Some(now_ms);
        Ok(())
    }
}

impl Default for SubmitThrottle {
    fn default() -> Self {
        Self::new(super::RESUBMIT_WINDOW_MS)
    }
}
