// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::{sync::OnceLock, time::Instant};

pub(crate) fn seconds_since_first_use() -> u64 {
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs()
}

/// `rate_limited!(interval, expr)` evaluates `expr` at most once per `interval` for each call
/// site, across all threads. The first call always evaluates.
///
/// Used for notices that a caller can trigger on every export tick, so that a misconfigured
/// exporter logs the problem once in a while instead of flooding the application log.
macro_rules! rate_limited {
    ($interval:expr, $call:expr) => {{
        use std::sync::atomic::{AtomicU64, Ordering};
        // 0 means "never fired"; deadlines are stored offset by one
        static NEXT_DEADLINE: AtomicU64 = AtomicU64::new(0);
        let interval: std::time::Duration = $interval;
        let now = $crate::rate_limit::seconds_since_first_use();
        let next = NEXT_DEADLINE.load(Ordering::Relaxed);
        if next == 0 || next - 1 <= now {
            let deadline = now.saturating_add(interval.as_secs().max(1)).saturating_add(1);
            if NEXT_DEADLINE
                .compare_exchange(next, deadline, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
            {
                $call;
            }
        }
    }};
}
pub(crate) use rate_limited;
