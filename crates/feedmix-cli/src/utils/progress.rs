use feedmix::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::bar_style())
            .with_message("Searching mixes");
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::SearchStart { total_pairs } => {
                    pb_guard.reset();
                    pb_guard.set_length(total_pairs);
                    pb_guard.set_position(0);
                    pb_guard.set_message("Searching mixes");
                }
                Progress::PairVisited => {
                    pb_guard.inc(1);
                }
                Progress::NewBest {
                    composition,
                    utilization_ratio,
                } => {
                    pb_guard.set_message(format!(
                        "Best so far {}/{}/{} ({:.1}%)",
                        composition.grass_silage,
                        composition.maize_silage,
                        composition.hay,
                        utilization_ratio * 100.0
                    ));
                }
                Progress::SearchFinish { .. } => {
                    if let Some(len) = pb_guard.length() {
                        pb_guard.set_position(len);
                    }
                    pb_guard.finish_and_clear();
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<32} [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("Failed to create bar style template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
