//! Repeated-record sampling for production mode.
//!
//! Under sustained load the production preset emits the first `initial`
//! occurrences of an identical message within a window, then only every
//! `thereafter`-th occurrence until the window rolls over. Records with
//! distinct messages are counted independently.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::field::{Field as EventField, Visit};
use tracing::{Event, Metadata};
use tracing_subscriber::layer::{Context, Filter};

/// Per-layer filter implementing the sampling policy.
#[derive(Debug)]
pub(crate) struct Sampler {
    initial: u64,
    thereafter: u64,
    window: Duration,
    state: Mutex<SamplerState>,
}

#[derive(Debug)]
struct SamplerState {
    window_start: Instant,
    counts: HashMap<String, u64>,
}

impl Sampler {
    pub(crate) fn new(initial: u64, thereafter: u64, window: Duration) -> Self {
        Self {
            initial,
            thereafter,
            window,
            state: Mutex::new(SamplerState {
                window_start: Instant::now(),
                counts: HashMap::new(),
            }),
        }
    }

    /// Counts one occurrence of `message` and reports whether it passes.
    fn admit(&self, message: &str) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let now = Instant::now();
        if now.duration_since(state.window_start) >= self.window {
            state.window_start = now;
            state.counts.clear();
        }

        let count = state.counts.entry(message.to_string()).or_insert(0);
        *count += 1;
        let n = *count;

        n <= self.initial || (n - self.initial) % self.thereafter == 0
    }
}

impl<S> Filter<S> for Sampler {
    fn enabled(&self, _meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        // Sampling is per-record; callsite-level filtering is left to the
        // level filter this sampler is composed with.
        true
    }

    fn event_enabled(&self, event: &Event<'_>, _cx: &Context<'_, S>) -> bool {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        match visitor.message {
            Some(message) => self.admit(&message),
            None => true,
        }
    }
}

/// Extracts the `message` field from an event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &EventField, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &EventField, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admissions(sampler: &Sampler, message: &str, n: usize) -> Vec<bool> {
        (0..n).map(|_| sampler.admit(message)).collect()
    }

    #[test]
    fn test_initial_burst_passes() {
        let sampler = Sampler::new(3, 10, Duration::from_secs(60));
        assert_eq!(admissions(&sampler, "x", 3), vec![true, true, true]);
    }

    #[test]
    fn test_every_nth_passes_after_burst() {
        let sampler = Sampler::new(2, 3, Duration::from_secs(60));
        // Occurrences 1-2 pass, then only every 3rd after the burst: 5, 8.
        let results = admissions(&sampler, "x", 8);
        assert_eq!(
            results,
            vec![true, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn test_distinct_messages_sample_independently() {
        let sampler = Sampler::new(1, 100, Duration::from_secs(60));
        assert!(sampler.admit("a"));
        assert!(sampler.admit("b"));
        assert!(!sampler.admit("a"));
        assert!(!sampler.admit("b"));
    }

    #[test]
    fn test_counters_reset_when_window_rolls_over() {
        let sampler = Sampler::new(1, 100, Duration::from_millis(20));
        assert!(sampler.admit("x"));
        assert!(!sampler.admit("x"));

        std::thread::sleep(Duration::from_millis(40));

        assert!(sampler.admit("x"));
    }

    #[test]
    fn test_default_policy_admits_101_of_250() {
        let sampler = Sampler::new(100, 100, Duration::from_secs(60));
        let admitted = admissions(&sampler, "x", 250)
            .into_iter()
            .filter(|&passed| passed)
            .count();
        assert_eq!(admitted, 101);
    }
}
