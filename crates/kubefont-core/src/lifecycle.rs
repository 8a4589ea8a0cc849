//! Teardown bookkeeping for a mounted scene.

/// Cleanup actions run in reverse registration order, exactly once.
///
/// Actions registered after disposal run immediately, so resources that
/// arrive late (an in-flight font fetch, say) are still released.
#[derive(Default)]
pub struct Disposer {
    actions: Vec<(&'static str, Box<dyn FnOnce()>)>,
    disposed: bool,
}

impl Disposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&mut self, label: &'static str, action: impl FnOnce() + 'static) {
        if self.disposed {
            log::debug!("[dispose] {} (late)", label);
            action();
            return;
        }
        self.actions.push((label, Box::new(action)));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        while let Some((label, action)) = self.actions.pop() {
            log::debug!("[dispose] {}", label);
            action();
        }
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Disposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposer")
            .field("pending", &self.actions.iter().map(|(l, _)| *l).collect::<Vec<_>>())
            .field("disposed", &self.disposed)
            .finish()
    }
}
