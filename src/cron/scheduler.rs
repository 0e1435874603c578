use super::job::ScheduledJob;
use super::types::{Clock, LocalClock, ScheduleEntry};
use crate::error::ScheduleError;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use tokio::time::{self, Duration, MissedTickBehavior};

const MIN_POLL_SECONDS: u64 = 1;
const MAX_WINDOW_MINUTES: u64 = 60;

/// Counters returned when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerSummary {
    pub runs: usize,
    pub failures: usize,
}

/// Single cooperative loop that fires each entry at most once per date.
pub struct Scheduler<C: Clock = LocalClock> {
    entries: Vec<ScheduleEntry>,
    last_fired: HashMap<ScheduleEntry, NaiveDate>,
    clock: C,
    poll_interval: Duration,
    window: TimeDelta,
}

impl Scheduler<LocalClock> {
    pub fn new(entries: Vec<ScheduleEntry>, poll_secs: u64) -> Result<Self, ScheduleError> {
        Self::with_clock(entries, poll_secs, LocalClock)
    }
}

impl<C: Clock> Scheduler<C> {
    pub fn with_clock(
        mut entries: Vec<ScheduleEntry>,
        poll_secs: u64,
        clock: C,
    ) -> Result<Self, ScheduleError> {
        if entries.is_empty() {
            return Err(ScheduleError::NoEntries);
        }
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(*entry) {
                return Err(ScheduleError::DuplicateTime(entry.to_string()));
            }
        }
        entries.sort();

        let poll_secs = poll_secs.max(MIN_POLL_SECONDS);
        // A wakeup can land up to one poll interval after the entry's minute,
        // plus timer latency and drift against the wall clock.
        let window_minutes = (poll_secs.div_ceil(60) + 1).clamp(2, MAX_WINDOW_MINUTES);

        Ok(Self {
            entries,
            last_fired: HashMap::new(),
            clock,
            poll_interval: Duration::from_secs(poll_secs),
            window: TimeDelta::minutes(i64::try_from(window_minutes).unwrap_or(1)),
        })
    }

    /// Change how often the loop wakes up without changing the match window.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Entries due at `now`, marked as fired for `now`'s date.
    ///
    /// An entry matches when `now` falls in `[time, time + window)` on a date
    /// it has not fired yet. The window never wraps past midnight.
    pub fn due_entries(&mut self, now: NaiveDateTime) -> Vec<ScheduleEntry> {
        let today = now.date();
        let mut due = Vec::new();

        for entry in &self.entries {
            if self.last_fired.get(entry) == Some(&today) {
                continue;
            }
            let elapsed = now.time().signed_duration_since(entry.time());
            if elapsed >= TimeDelta::zero() && elapsed < self.window {
                self.last_fired.insert(*entry, today);
                due.push(*entry);
            }
        }

        due
    }

    /// Poll until `shutdown` resolves.
    ///
    /// Shutdown is observed only between wakeups, so a run that has started
    /// always completes. Failed runs are logged and never stop the loop.
    pub async fn run_until<J, F>(&mut self, job: &mut J, shutdown: F) -> SchedulerSummary
    where
        J: ScheduledJob + ?Sized,
        F: Future<Output = ()>,
    {
        let mut summary = SchedulerSummary::default();
        let mut interval = time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        tracing::info!(
            entries = self.entries.len(),
            poll_secs = self.poll_interval.as_secs(),
            "scheduler started"
        );

        loop {
            tokio::select! {
                biased;
                () = &mut shutdown => break,
                _ = interval.tick() => {}
            }

            let now = self.clock.now();
            for entry in self.due_entries(now) {
                tracing::info!(entry = %entry, "schedule entry due");
                let report = job.run(&entry).await;
                summary.runs += 1;

                match &report.error {
                    Some(err) => {
                        summary.failures += 1;
                        tracing::warn!(
                            entry = %entry,
                            kind = err.kind().as_str(),
                            "scheduled run failed: {err}"
                        );
                    }
                    None => {
                        let published = report
                            .publish_outcome
                            .as_ref()
                            .is_some_and(|outcome| outcome.is_success());
                        tracing::info!(
                            entry = %entry,
                            topic = report.topic.as_deref().unwrap_or_default(),
                            published,
                            "scheduled run finished"
                        );
                    }
                }
            }
        }

        tracing::info!(runs = summary.runs, failures = summary.failures, "scheduler stopped");
        summary
    }
}
