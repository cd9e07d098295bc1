//! # Progress Module
//!
//! Replays a `ProcessingTimeline` in real time as a Server-Sent Events
//! stream.
//!
//! Each frame is held back until its offset from the moment the stream was
//! created, then emitted as an SSE event named after the frame kind with the
//! frame as JSON data. The stream ends after the redirect frame; dropping it
//! (client disconnect) stops the timers with it.

use std::time::Duration;

use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::stream::{self, Stream, StreamExt};
use interviewai_core::{Frame, ProcessingTimeline};
use tokio::time::{Instant, sleep_until};
use tracing::debug;

/// Stand-in deadline for offsets past what `Instant` can represent.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// When a frame at `offset_ms` is due.
pub fn deadline(started: Instant, offset_ms: u64) -> Instant {
    started
        .checked_add(Duration::from_millis(offset_ms))
        .or_else(|| started.checked_add(FAR_FUTURE))
        .unwrap_or(started)
}

/// Emit each frame once its offset has elapsed.
pub fn frame_stream(timeline: ProcessingTimeline) -> impl Stream<Item = Frame> + Send {
    let started = Instant::now();
    stream::iter(timeline.into_frames()).then(move |frame| async move {
        sleep_until(deadline(started, frame.offset_ms)).await;
        debug!(
            offset_ms = frame.offset_ms,
            kind = frame.event.name(),
            "processing frame"
        );
        frame
    })
}

/// Convert a frame to an SSE event.
pub fn to_event(frame: &Frame) -> Result<Event, axum::Error> {
    Event::default()
        .event(frame.event.name())
        .json_data(&frame.event)
}

/// SSE response that plays `timeline`.
pub fn sse_response(
    timeline: ProcessingTimeline,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>> + Send> {
    Sse::new(frame_stream(timeline).map(|frame| to_event(&frame))).keep_alive(KeepAlive::default())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use interviewai_core::{FrameEvent, ProcessingTiming};

    #[tokio::test(start_paused = true)]
    async fn frames_arrive_in_order_after_their_offsets() {
        let timeline = ProcessingTimeline::standard(ProcessingTiming::default());
        let expected = timeline.frames().to_vec();
        let started = Instant::now();

        let frames: Vec<Frame> = frame_stream(timeline).collect().await;

        assert_eq!(frames, expected);
        assert!(started.elapsed() >= Duration::from_millis(6000));
    }

    #[tokio::test(start_paused = true)]
    async fn stream_ends_with_redirect() {
        let timeline = ProcessingTimeline::standard(ProcessingTiming::new(20, 10));
        let frames: Vec<Frame> = frame_stream(timeline).collect().await;
        assert!(matches!(
            frames.last().map(|f| &f.event),
            Some(FrameEvent::Redirect {
                location: "/dashboard"
            })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn huge_offsets_do_not_overflow_the_clock() {
        let started = Instant::now();
        assert!(deadline(started, u64::MAX) > started);
        assert_eq!(deadline(started, 10), started + Duration::from_millis(10));

        let timeline = ProcessingTimeline::standard(ProcessingTiming::new(u64::MAX, u64::MAX));
        let first = frame_stream(timeline).boxed().next().await;
        assert!(matches!(
            first.map(|f| f.event),
            Some(FrameEvent::StepStarted { step: 0, .. })
        ));
    }

    #[test]
    fn events_carry_kind_name() {
        let timeline = ProcessingTimeline::standard(ProcessingTiming::default());
        for frame in timeline.frames() {
            assert!(to_event(frame).is_ok());
        }
    }
}
