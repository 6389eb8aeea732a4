use std::time::Duration;

/// Events emitted while a model is being built.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish { elapsed: Duration },

    /// Membrane growth finished with this many particles appended.
    MembraneGrown { particles: usize },

    /// A free-form diagnostic for the listener, such as a configuration value
    /// the build will accept but cannot do anything useful with.
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// An optional observer for build progress and timing.
///
/// A reporter without a callback is inert, so instrumentation costs nothing
/// when nobody listens.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
