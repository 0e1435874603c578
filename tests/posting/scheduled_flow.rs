use crate::mock_services::{DRAFT, mount_gemini_text, pipeline};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use postwright::cron::{Clock, ScheduleEntry, ScheduledPosting, Scheduler, SchedulerSummary};
use postwright::pipeline::AutoApprove;
use postwright::topic::FixedListTopicSource;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Advances ten minutes per reading.
struct StepClock(Rc<Cell<NaiveDateTime>>);

impl Clock for StepClock {
    fn now(&self) -> NaiveDateTime {
        let now = self.0.get();
        self.0.set(now + TimeDelta::minutes(10));
        now
    }
}

#[tokio::test]
async fn each_entry_posts_once_per_day() {
    let gemini = MockServer::start().await;
    let linkedin = MockServer::start().await;
    mount_gemini_text(&gemini, DRAFT).await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(201))
        .expect(4)
        .mount(&linkedin)
        .await;

    let start = NaiveDate::from_ymd_opt(2026, 5, 4)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let clock_now = Rc::new(Cell::new(start));
    let entries: Vec<ScheduleEntry> = vec!["09:00".parse().unwrap(), "15:00".parse().unwrap()];
    let mut scheduler = Scheduler::with_clock(entries, 60, StepClock(Rc::clone(&clock_now)))
        .unwrap()
        .with_poll_interval(Duration::from_millis(1));

    let topics = FixedListTopicSource::new(vec!["AI tools".to_string()]).unwrap();
    let mut job = ScheduledPosting::new(
        pipeline(&gemini, Some(&linkedin)),
        topics,
        Box::new(AutoApprove),
    );

    // Stop once the simulated clock has covered two full days.
    let end = start + TimeDelta::days(2);
    let shutdown = async {
        while clock_now.get() < end {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    };

    let summary = scheduler.run_until(&mut job, shutdown).await;
    assert_eq!(summary, SchedulerSummary { runs: 4, failures: 0 });
}
