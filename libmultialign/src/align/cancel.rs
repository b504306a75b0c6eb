use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A flag that asks a running solve to stop.
///
/// Clones share the same flag, so one clone can be handed to the thread
/// doing the solve while another is kept to cancel it.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
