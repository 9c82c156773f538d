// File: crates/livechart-core/tests/stream.rs
// Purpose: Producer thread honours the enabled flag and stops when the receiver goes away.

use std::sync::mpsc;
use std::time::Duration;

use livechart_core::stream::RandomSource;
use livechart_core::{SampleSink, StreamDriver, StreamFlag};

const TICK: Duration = Duration::from_millis(5);

#[test]
fn random_source_stays_in_range() {
    let samples: Vec<f64> = RandomSource::seeded(7, 1, 100).take(500).collect();
    assert!(samples.iter().all(|v| (1.0..=100.0).contains(v) && v.fract() == 0.0));
    let again: Vec<f64> = RandomSource::seeded(7, 1, 100).take(500).collect();
    assert_eq!(samples, again);
}

#[test]
fn flag_toggle_reports_new_state() {
    let flag = StreamFlag::default();
    assert!(!flag.is_enabled());
    assert!(flag.toggle());
    assert!(flag.is_enabled());
    assert!(!flag.toggle());
}

#[test]
fn disabled_flag_produces_nothing() {
    let flag = StreamFlag::new(false);
    let (tx, rx) = mpsc::channel();
    // Never joined: a disabled producer never tries to deliver, so it never sees the disconnect.
    let _detached = StreamDriver::new(flag, TICK, std::iter::repeat(1.0), tx).spawn().unwrap();

    assert!(rx.recv_timeout(TICK * 20).is_err());
}

#[test]
fn enabled_flag_delivers_in_order_and_stops_on_disconnect() {
    let flag = StreamFlag::new(true);
    let (tx, rx) = mpsc::channel();
    let handle = StreamDriver::new(flag.clone(), TICK, (1..).map(f64::from), tx).spawn().unwrap();

    let got: Vec<f64> = (0..3).map(|_| rx.recv_timeout(Duration::from_secs(2)).expect("sample")).collect();
    assert_eq!(got, vec![1.0, 2.0, 3.0]);

    drop(rx);
    handle.join().expect("producer exits after the receiver is dropped");
}

#[test]
fn finite_source_ends_the_loop() {
    let (tx, rx) = mpsc::channel();
    StreamDriver::new(StreamFlag::new(true), TICK, [4.0, 2.0].into_iter(), tx).run();
    assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![4.0, 2.0]);
}

struct Collect(mpsc::SyncSender<f64>);

impl SampleSink for Collect {
    fn deliver(&self, sample: f64) -> bool {
        self.0.try_send(sample * 10.0).is_ok()
    }
}

#[test]
fn custom_sink_receives_samples() {
    let (tx, rx) = mpsc::sync_channel(4);
    StreamDriver::new(StreamFlag::new(true), TICK, [1.0, 2.0].into_iter(), Collect(tx)).run();
    assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![10.0, 20.0]);
}
