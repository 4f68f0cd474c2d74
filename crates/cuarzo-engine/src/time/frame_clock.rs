/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Milliseconds elapsed since the previous recorded frame.
    pub delta: f64,

    /// Host timestamp of this frame, in milliseconds.
    pub now: f64,

    /// Monotonic update-frame counter, starting at 0.
    pub frame_index: u64,
}

/// Frame clock turning host timestamps into `FrameTime` snapshots.
///
/// Delta is the raw difference between consecutive timestamps. An optional
/// upper clamp can be installed for hosts that stall (backgrounded tabs,
/// debugger pauses); it is off by default.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
    frame_index: u64,
    max_delta: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock that never reports more than `max_delta` milliseconds.
    pub fn with_max_delta(max_delta: f64) -> Self {
        debug_assert!(max_delta >= 0.0);
        Self {
            max_delta: Some(max_delta),
            ..Self::default()
        }
    }

    /// Timestamp of the last recorded frame, if any.
    #[inline]
    pub fn last(&self) -> Option<f64> {
        self.last
    }

    /// Records `now` as the baseline without producing a frame.
    pub fn begin(&mut self, now: f64) {
        self.last = Some(now);
    }

    /// Advances the clock to `now` and returns the frame snapshot.
    ///
    /// Without a baseline the delta is 0.
    pub fn tick(&mut self, now: f64) -> FrameTime {
        let mut delta = match self.last {
            Some(last) => now - last,
            None => 0.0,
        };

        if let Some(max) = self.max_delta {
            delta = delta.min(max);
        }

        self.last = Some(now);

        let ft = FrameTime {
            delta,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}
