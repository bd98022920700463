use crate::core::composition::FeedMixComposition;

/// Events emitted while the mix search runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    SearchStart {
        total_pairs: u64,
    },
    /// One grass/maize pair was handled, whether evaluated or skipped.
    PairVisited,
    NewBest {
        composition: FeedMixComposition,
        utilization_ratio: f64,
    },
    SearchFinish {
        feasible: usize,
    },
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PairVisited);
    }

    #[test]
    fn reporter_forwards_events_to_callback_in_order() {
        let events = Mutex::new(Vec::new());
        {
            let reporter = ProgressReporter::with_callback(Box::new(|event| {
                events.lock().unwrap().push(event);
            }));
            reporter.report(Progress::SearchStart { total_pairs: 2 });
            reporter.report(Progress::PairVisited);
            reporter.report(Progress::SearchFinish { feasible: 0 });
        }
        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                Progress::SearchStart { total_pairs: 2 },
                Progress::PairVisited,
                Progress::SearchFinish { feasible: 0 },
            ]
        );
    }
}
