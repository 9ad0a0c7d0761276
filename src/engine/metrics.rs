use crate::METRICS_CAPACITY;
use crate::METRICS_WINDOW;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct Sample {
    name: &'static str,
    millis: f64,
}

/// Summary of the most recent timings.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct Stats {
    /// Samples retained, not just those summarized.
    pub count: usize,
    pub avg_ms: f64,
    pub p50_ms: f64,
    pub p95_ms: f64,
}

/// Rolling request timings.
#[derive(Debug, Default)]
pub struct Metrics(Mutex<VecDeque<Sample>>);

impl Metrics {
    /// Runs `f`, records how long it took under `name`, and passes its
    /// output through untouched. Failures are timed too.
    pub fn timed<T>(&self, name: &'static str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let output = f();
        self.record(name, start.elapsed());
        output
    }

    pub fn record(&self, name: &'static str, elapsed: Duration) {
        let millis = elapsed.as_secs_f64() * 1000.0;
        log::info!("{}: {:.1}ms", name, millis);
        let mut samples = self.lock();
        samples.push_back(Sample { name, millis });
        while samples.len() > METRICS_CAPACITY {
            samples.pop_front();
        }
    }

    /// Average, median and 95th percentile over the latest window. The
    /// 95th percentile falls back to the maximum on small windows.
    pub fn stats(&self) -> Stats {
        let samples = self.lock();
        let count = samples.len();
        let mut window = samples
            .iter()
            .rev()
            .take(METRICS_WINDOW)
            .map(|s| s.millis)
            .collect::<Vec<f64>>();
        drop(samples);
        if window.is_empty() {
            return Stats::default();
        }
        window.sort_by(f64::total_cmp);
        let n = window.len();
        Stats {
            count,
            avg_ms: window.iter().sum::<f64>() / n as f64,
            p50_ms: window[n / 2],
            p95_ms: match n > 20 {
                true => window[(n as f64 * 0.95) as usize],
                false => window[n - 1],
            },
        }
    }

    /// Samples recorded under one name, oldest first.
    pub fn history(&self, name: &str) -> Vec<f64> {
        self.lock()
            .iter()
            .filter(|s| s.name == name)
            .map(|s| s.millis)
            .collect()
    }

    pub fn reset(&self) {
        self.lock().clear()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Sample>> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
