use std::cell::Cell;
use std::rc::Rc;

/// Shared running flag for a frame loop.
///
/// Clones observe the same flag. The loop checks [`is_cancelled`] before each
/// redraw; the owner calls [`cancel`] on teardown. Cancellation is one-way.
///
/// The runtime is single-threaded, so the flag is `Rc<Cell<_>>` and the token
/// is deliberately `!Send`.
///
/// [`is_cancelled`]: CancelToken::is_cancelled
/// [`cancel`]: CancelToken::cancel
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());
        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn cancel_is_idempotent() {
        let token = CancelToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }
}
