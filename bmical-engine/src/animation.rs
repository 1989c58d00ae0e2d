use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant};

use crate::view::ResultSurface;

pub const DURATION: Duration = Duration::from_millis(1000);

const FRAME: Duration = Duration::from_millis(16);

/// Advances the displayed value from zero toward a target with an
/// ease-out-cubic curve. Starting a new run or cancelling supersedes any
/// run still in flight; a superseded run stops at its next frame without
/// writing further values.
pub struct Animator {
    generation: Arc<AtomicU64>,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn start(&self, surface: Arc<dyn ResultSurface>, target: f64) -> JoinHandle<()> {
        self.start_with_duration(surface, target, DURATION)
    }

    pub fn start_with_duration(
        &self,
        surface: Arc<dyn ResultSurface>,
        target: f64,
        duration: Duration,
    ) -> JoinHandle<()> {
        let generation = self.generation.clone();
        let run = generation.fetch_add(1, Ordering::Relaxed) + 1;

        tokio::spawn(async move {
            let started = Instant::now();
            let mut frames = interval(FRAME);
            loop {
                frames.tick().await;
                if generation.load(Ordering::Relaxed) != run {
                    debug!("Animation run {} superseded, stopping", run);
                    return;
                }

                let progress =
                    (started.elapsed().as_secs_f64() / duration.as_secs_f64()).min(1.0);
                surface.update_value(target * ease_out_cubic(progress));

                if progress >= 1.0 {
                    debug!("Animation run {} reached target {:.1}", run, target);
                    return;
                }
            }
        })
    }

    /// Stops the current run, if any, without starting a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }
}

fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}
