use super::types::ScheduleEntry;
use crate::pipeline::{PipelineReport, PostingPipeline, PublishApproval};
use crate::topic::FixedListTopicSource;
use std::future::Future;
use std::pin::Pin;

/// Work the scheduler performs when an entry is due.
pub trait ScheduledJob {
    fn run<'a>(
        &'a mut self,
        entry: &'a ScheduleEntry,
    ) -> Pin<Box<dyn Future<Output = PipelineReport> + 'a>>;
}

/// One posting run per due entry, with a topic drawn from a fixed list.
pub struct ScheduledPosting {
    pipeline: PostingPipeline,
    topics: FixedListTopicSource,
    approval: Box<dyn PublishApproval>,
}

impl ScheduledPosting {
    pub fn new(
        pipeline: PostingPipeline,
        topics: FixedListTopicSource,
        approval: Box<dyn PublishApproval>,
    ) -> Self {
        Self {
            pipeline,
            topics,
            approval,
        }
    }
}

impl ScheduledJob for ScheduledPosting {
    fn run<'a>(
        &'a mut self,
        entry: &'a ScheduleEntry,
    ) -> Pin<Box<dyn Future<Output = PipelineReport> + 'a>> {
        let Self {
            pipeline,
            topics,
            approval,
        } = self;
        Box::pin(async move {
            tracing::debug!(entry = %entry, "starting scheduled posting");
            pipeline.run(topics, approval.as_mut()).await
        })
    }
}
