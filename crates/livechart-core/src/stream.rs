// File: crates/livechart-core/src/stream.rs
// Summary: Streaming driver: a producer thread that emits synthetic samples while enabled.
// Notes:
// - The producer never touches the dataset or the chart. It hands samples to a sink;
//   the owning thread appends and redraws.
// - The enabled flag is sampled once per tick; there are no start/stop messages.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::dataset::STREAM_CAPACITY;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreamConfig {
    /// Samples kept while streaming; older ones are evicted.
    pub capacity: usize,
    /// Interval between flag polls.
    pub tick: Duration,
    /// Inclusive range of the synthetic integer samples.
    pub low: i64,
    pub high: i64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self { capacity: STREAM_CAPACITY, tick: Duration::from_secs(1), low: 1, high: 100 }
    }
}

/// Shared "streaming enabled" switch. The UI owns it; the producer only reads it.
#[derive(Clone, Debug, Default)]
pub struct StreamFlag(Arc<AtomicBool>);

impl StreamFlag {
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Release);
    }

    /// Flip the flag and return the new state.
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::AcqRel)
    }
}

/// Uniform random integers in `[low, high]`, as floats. Never ends.
pub struct RandomSource {
    rng: StdRng,
    low: i64,
    high: i64,
}

impl RandomSource {
    pub fn new(low: i64, high: i64) -> Self {
        Self::with_rng(StdRng::from_entropy(), low, high)
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64, low: i64, high: i64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), low, high)
    }

    fn with_rng(rng: StdRng, low: i64, high: i64) -> Self {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        Self { rng, low, high }
    }
}

impl Iterator for RandomSource {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.rng.gen_range(self.low..=self.high) as f64)
    }
}

/// Receives produced samples on behalf of the owning thread.
pub trait SampleSink: Send + 'static {
    /// Hand over one sample. `false` means the receiver is gone and the producer stops.
    fn deliver(&self, sample: f64) -> bool;
}

impl SampleSink for mpsc::Sender<f64> {
    fn deliver(&self, sample: f64) -> bool {
        self.send(sample).is_ok()
    }
}

impl SampleSink for mpsc::SyncSender<f64> {
    fn deliver(&self, sample: f64) -> bool {
        self.send(sample).is_ok()
    }
}

pub struct StreamDriver<I, S> {
    flag: StreamFlag,
    tick: Duration,
    source: I,
    sink: S,
}

impl<I, S> StreamDriver<I, S>
where
    I: Iterator<Item = f64> + Send + 'static,
    S: SampleSink,
{
    pub fn new(flag: StreamFlag, tick: Duration, source: I, sink: S) -> Self {
        Self { flag, tick, source, sink }
    }

    /// Run on a named background thread.
    pub fn spawn(self) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("livechart-stream".into())
            .spawn(move || self.run())
    }

    /// Tick loop. Returns when the sink disconnects or the source runs dry.
    pub fn run(mut self) {
        info!(tick_ms = self.tick.as_millis() as u64, "stream producer started");
        loop {
            thread::sleep(self.tick);
            if !self.flag.is_enabled() {
                continue;
            }
            let Some(sample) = self.source.next() else {
                debug!("stream source exhausted");
                break;
            };
            if !self.sink.deliver(sample) {
                debug!("stream receiver gone");
                break;
            }
        }
        info!("stream producer stopped");
    }
}
