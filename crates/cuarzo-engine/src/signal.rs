//! Resource-ready signal.
//!
//! A single-slot listener fired when the brand sequence finishes. The signal
//! is re-armable: every `execute_listener` call invokes the stored listener
//! again; there is no "already fired" latch on the listener side.

use crate::error::{EngineError, Result};

pub type Listener = Box<dyn FnMut()>;

#[derive(Default)]
pub struct ReadySignal {
    listener: Option<Listener>,
    loaded: bool,
}

impl ReadySignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `listener` for the current load cycle.
    ///
    /// Fails with `InvalidArgument` if a listener is already registered for
    /// this cycle. If loading already completed, the listener runs at once.
    pub fn on_loaded<F>(&mut self, listener: F) -> Result<()>
    where
        F: FnMut() + 'static,
    {
        if self.listener.is_some() {
            return Err(EngineError::invalid(
                "a ready listener is already registered for this load cycle",
            ));
        }

        let listener = self.listener.insert(Box::new(listener));
        if self.loaded {
            log::debug!("ready listener registered after load; invoking now");
            listener();
        }
        Ok(())
    }

    /// Marks loading complete and invokes the listener, if any.
    pub fn execute_listener(&mut self) {
        self.loaded = true;
        match self.listener.as_mut() {
            Some(listener) => listener(),
            None => log::debug!("ready signal fired with no listener"),
        }
    }

    /// Starts a new load cycle and keeps the registered listener.
    ///
    /// Used when the canvas is rebound: the listener fires again once the new
    /// brand sequence finishes.
    pub fn rearm(&mut self) {
        self.loaded = false;
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[inline]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }
}

impl std::fmt::Debug for ReadySignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadySignal")
            .field("listener", &self.listener.is_some())
            .field("loaded", &self.loaded)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, move || c.set(c.get() + 1))
    }

    #[test]
    fn execute_before_registration_is_noop() {
        let mut sig = ReadySignal::new();
        sig.execute_listener();
        assert!(sig.is_loaded());
        assert!(!sig.has_listener());
    }

    #[test]
    fn listener_runs_on_each_execute() {
        let (count, listener) = counter();
        let mut sig = ReadySignal::new();
        sig.on_loaded(listener).unwrap();
        assert_eq!(count.get(), 0);

        sig.execute_listener();
        sig.execute_listener();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn second_listener_in_same_cycle_is_rejected() {
        let (_, a) = counter();
        let (_, b) = counter();
        let mut sig = ReadySignal::new();
        sig.on_loaded(a).unwrap();
        assert!(matches!(sig.on_loaded(b), Err(EngineError::InvalidArgument(_))));
    }

    #[test]
    fn late_registration_fires_immediately() {
        let (count, listener) = counter();
        let mut sig = ReadySignal::new();
        sig.execute_listener();
        sig.on_loaded(listener).unwrap();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn rearm_keeps_listener_until_next_execute() {
        let (count, listener) = counter();
        let mut sig = ReadySignal::new();
        sig.on_loaded(listener).unwrap();
        sig.execute_listener();

        sig.rearm();
        assert!(!sig.is_loaded());
        assert!(sig.has_listener());

        sig.execute_listener();
        assert_eq!(count.get(), 2);
    }
}
