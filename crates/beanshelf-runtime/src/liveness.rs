//! Mount generations.
//!
//! Every time a screen is mounted it receives a fresh `Mount`. Fetches are
//! tagged with the mount that issued them, and results arriving for any
//! other mount are discarded instead of touching the screen now on display.
//! In-flight requests are not aborted.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mount(u64);

impl Mount {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct Liveness {
    generation: u64,
    mounted: bool,
}

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede whatever is mounted and return the new mount.
    pub fn remount(&mut self) -> Mount {
        self.generation += 1;
        self.mounted = true;
        Mount(self.generation)
    }

    /// Tear down the current mount; nothing is live afterwards.
    pub fn unmount(&mut self) {
        self.generation += 1;
        self.mounted = false;
    }

    pub fn is_live(&self, mount: Mount) -> bool {
        self.mounted && mount.0 == self.generation
    }
}

/// A value tied to the mount that produced or requested it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged<T> {
    pub mount: Mount,
    pub value: T,
}

impl<T> Tagged<T> {
    pub fn new(mount: Mount, value: T) -> Self {
        Self { mount, value }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Tagged<U> {
        Tagged {
            mount: self.mount,
            value: f(self.value),
        }
    }
}
