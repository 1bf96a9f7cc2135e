use std::sync::atomic::{AtomicBool, Ordering};

/// The single live UI session, owned by the host integration layer. The
/// lookup core knows nothing about it; the frontend checks `is_open` before
/// rendering a completion that arrives after dismissal.
#[derive(Default)]
pub struct Session {
    open: AtomicBool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) {
        self.open.store(true, Ordering::SeqCst);
    }

    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    pub fn focus(&self) {
        // A terminal session is always in the foreground.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_close_round_trip() {
        let session = Session::new();
        assert!(!session.is_open());

        session.open();
        session.focus();
        assert!(session.is_open());

        session.close();
        assert!(!session.is_open());
    }
}
