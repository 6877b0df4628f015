/// Events emitted by long-running workflows.
///
/// A phase brackets one or more tasks; a task counts discrete steps.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

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

    /// Runs `body` between a `PhaseStart` and a `PhaseFinish` event.
    ///
    /// The finish event is only sent when `body` returns.
    pub fn phase<T>(&self, name: &'static str, body: impl FnOnce() -> T) -> T {
        self.report(Progress::PhaseStart { name });
        let out = body();
        self.report(Progress::PhaseFinish);
        out
    }

    /// Maps `items` through `f`, reporting one task step per item.
    pub fn track<I, T, U>(&self, items: I, mut f: impl FnMut(T) -> U) -> Vec<U>
    where
        I: ExactSizeIterator<Item = T>,
    {
        self.report(Progress::TaskStart {
            total_steps: items.len() as u64,
        });
        let out = items
            .map(|item| {
                let mapped = f(item);
                self.report(Progress::TaskIncrement);
                mapped
            })
            .collect();
        self.report(Progress::TaskFinish);
        out
    }
}
