use std::sync::Barrier;
use std::thread;

use assert2::check;
use deltastat::{DistributionSummary, ResettableSummary, SummarySnapshot, SummarySnapshotSupport};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const THREADS: usize = 4;

#[test]
fn aggregates_match_the_recorded_sequence() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..100 {
        let len = rng.random_range(1..200);
        let values: Vec<f64> = (0..len).map(|_| rng.random_range(0.0..1e6)).collect();

        let summary = ResettableSummary::new();
        for value in &values {
            summary.record(*value);
        }

        let snapshot = summary.take_summary_snapshot();
        check!(snapshot.count() == values.len() as u64);
        // same summation order, so the float sums match exactly
        check!(snapshot.total() == values.iter().sum::<f64>());
        check!(snapshot.max() == values.iter().copied().fold(f64::MIN, f64::max));
        check!(snapshot.min() == values.iter().copied().fold(f64::MAX, f64::min));
    }
}

#[test]
fn records_that_finish_before_a_reset_are_in_its_snapshot() {
    let summary = ResettableSummary::new();
    thread::scope(|s| {
        for t in 0..THREADS {
            let summary = &summary;
            s.spawn(move || {
                for i in 0..1000 {
                    summary.record((t * 1000 + i) as f64);
                }
            });
        }
    });
    let snapshot = summary.take_summary_snapshot_and_reset();
    check!(snapshot.count() == (THREADS * 1000) as u64);
    check!(snapshot.min() == 0.0);
    check!(snapshot.max() == (THREADS * 1000 - 1) as f64);
    check!(!summary.has_values());
}

#[test]
fn concurrent_records_land_on_exactly_one_side_of_each_reset() {
    for seed in 0..16 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        // whole numbers keep every partial sum exact, whatever the interleaving
        let per_thread: Vec<Vec<f64>> = (0..THREADS)
            .map(|_| {
                let len = rng.random_range(1_000..5_000);
                (0..len)
                    .map(|_| rng.random_range(1..10_000u32) as f64)
                    .collect()
            })
            .collect();
        let pauses: Vec<u32> = (0..rng.random_range(1..8))
            .map(|_| rng.random_range(0..20_000))
            .collect();

        let summary = ResettableSummary::new();
        let barrier = Barrier::new(THREADS + 1);
        let mut windows = thread::scope(|s| {
            for values in &per_thread {
                let (summary, barrier) = (&summary, &barrier);
                s.spawn(move || {
                    barrier.wait();
                    for value in values {
                        summary.record(*value);
                    }
                });
            }
            barrier.wait();
            pauses
                .iter()
                .map(|pause| {
                    for _ in 0..*pause {
                        std::hint::spin_loop();
                    }
                    summary.take_summary_snapshot_and_reset()
                })
                .collect::<Vec<_>>()
        });
        windows.push(summary.take_summary_snapshot_and_reset());

        let recorded: Vec<f64> = per_thread.iter().flatten().copied().collect();
        check_partition(&windows, &recorded);
        check!(summary.count() == 0);
    }
}

fn check_partition(windows: &[SummarySnapshot], recorded: &[f64]) {
    let count: u64 = windows.iter().map(SummarySnapshot::count).sum();
    let total: f64 = windows.iter().map(SummarySnapshot::total).sum();
    check!(count == recorded.len() as u64);
    check!(total == recorded.iter().sum::<f64>());

    let non_empty = || windows.iter().filter(|w| !w.is_empty());
    let max = non_empty().map(SummarySnapshot::max).fold(f64::MIN, f64::max);
    let min = non_empty().map(SummarySnapshot::min).fold(f64::MAX, f64::min);
    check!(max == recorded.iter().copied().fold(f64::MIN, f64::max));
    check!(min == recorded.iter().copied().fold(f64::MAX, f64::min));

    for window in windows {
        if window.is_empty() {
            check!(*window == SummarySnapshot::EMPTY);
        } else {
            // a torn window would break these
            check!(window.min() <= window.max());
            check!(window.total() >= window.min() * window.count() as f64);
            check!(window.total() <= window.max() * window.count() as f64);
        }
    }
}
