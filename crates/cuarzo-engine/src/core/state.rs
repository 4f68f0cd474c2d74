/// Frame-loop state.
///
/// ```text
/// Idle ──mount/start──▶ Starting ──frame──▶ Running ◀──frame── Resuming
///                          │                   │                  ▲
///                          └──────pause────────┴──▶ Paused ──start─┘
/// any ──stop──▶ Stopped
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    /// Nothing scheduled yet.
    Idle,
    /// Start frame scheduled; ready hooks run on it.
    Starting,
    /// Update frames recurring.
    Running,
    /// First frame after a pause is scheduled; it only re-baselines the clock.
    Resuming,
    /// No frame scheduled; `start` resumes.
    Paused,
    /// Terminal.
    Stopped,
}

impl LoopState {
    /// Whether a frame callback is expected while in this state.
    #[inline]
    pub fn is_scheduled(self) -> bool {
        matches!(self, LoopState::Starting | LoopState::Running | LoopState::Resuming)
    }
}
