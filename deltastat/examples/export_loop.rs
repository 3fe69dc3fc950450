//! Several worker threads record request sizes while an exporter drains the summary on a
//! fixed tick and writes one line per non-empty window.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use deltastat::{
    DistributionStatisticConfig, DistributionSummary, LineError, ResettableSummary, SummaryLine,
    SummarySnapshotSupport,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // the percentile request is logged as ignored
    let config = DistributionStatisticConfig::builder()
        .percentiles([0.5, 0.99])
        .build()
        .expect("valid percentiles");
    let summary = Arc::new(
        ResettableSummary::builder()
            .statistic_config(config)
            .build()
            .expect("default scale is valid"),
    );
    let done = Arc::new(AtomicBool::new(false));

    let workers: Vec<_> = (0..4u32)
        .map(|worker| {
            let summary = summary.clone();
            let done = done.clone();
            thread::spawn(move || {
                let mut size = worker;
                while !done.load(Ordering::Relaxed) {
                    size = (size * 7919 + 13) % 65_536;
                    summary.record(f64::from(size) / 3.0);
                    thread::sleep(Duration::from_micros(200));
                }
            })
        })
        .collect();

    for tick in 0..5 {
        thread::sleep(Duration::from_millis(100));
        let snapshot = summary.take_summary_snapshot_and_reset();
        match SummaryLine::try_from_snapshot(&snapshot) {
            Ok(line) => tracing::info!(tick, "request.size {line}"),
            Err(LineError::Empty) => tracing::info!(tick, "nothing recorded"),
            Err(err) => tracing::warn!(tick, %err, "skipping window"),
        }
    }

    done.store(true, Ordering::Relaxed);
    for worker in workers {
        worker.join().expect("worker panicked");
    }
    tracing::info!(left_over = summary.count(), "stopped");
}
