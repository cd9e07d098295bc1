//! # Processing Module
//!
//! The fake upload choreography, computed as a timeline.
//!
//! Nothing is processed. The upload page walks through a fixed list of
//! steps while a progress value climbs to each step's target, then sends the
//! visitor to the results page. This module turns that choreography into an
//! ordered list of frames with millisecond offsets, so the app only has to
//! sleep and emit.
//!
//! ## Timing
//!
//! ```text
//! step 0  ├─ tick ─ tick ─ … ─ 25% ─────────────┤ step_duration
//! step 1  ├─ tick ─ tick ─ … ─ 50% ─────────────┤
//! step 2  ├─ tick ─ tick ─ … ─ 75% ─────────────┤
//! step 3  ├─ tick ─ tick ─ … ─ 100% ────────────┤ completed ── redirect_delay ── redirect
//! ```
//!
//! Each tick adds `PROGRESS_INCREMENT` points, clamped to the step target.
//! The tick interval is `step_duration / TICKS_PER_STEP`. Offsets saturate at
//! `u64::MAX`.

use crate::icon::Icon;
use crate::route::Page;
use crate::score::Percent;
use serde::{Deserialize, Serialize};

/// Points added per tick.
pub const PROGRESS_INCREMENT: u8 = 2;

/// Ticks that fit in one step duration.
pub const TICKS_PER_STEP: u64 = 50;

/// Default time spent on each step.
pub const DEFAULT_STEP_DURATION_MS: u64 = 1250;

/// Default pause between completion and the redirect.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1000;

/// Upper bound accepted from the command line for either duration.
pub const MAX_TIMING_MS: u64 = 60_000;

// =============================================================================
// STEPS
// =============================================================================

/// One stage of the fake pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessingStep {
    pub label: &'static str,
    pub icon: Icon,
}

/// The four stages, in order.
pub const PROCESSING_STEPS: [ProcessingStep; 4] = [
    ProcessingStep {
        label: "Processing your interview...",
        icon: Icon::Video,
    },
    ProcessingStep {
        label: "Analyzing gestures and eye contact...",
        icon: Icon::Eye,
    },
    ProcessingStep {
        label: "Generating feedback...",
        icon: Icon::Brain,
    },
    ProcessingStep {
        label: "Analysis complete!",
        icon: Icon::CheckCircle,
    },
];

/// Progress target for `step` out of `count`. The last target is 100.
#[must_use]
pub fn step_target(step: usize, count: usize) -> Percent {
    if count == 0 {
        return Percent::FULL;
    }
    Percent::new(((step as u64 + 1) * 100 / count as u64) as u32)
}

// =============================================================================
// TIMING
// =============================================================================

/// Durations that drive the choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingTiming {
    pub step_duration_ms: u64,
    pub redirect_delay_ms: u64,
}

impl Default for ProcessingTiming {
    fn default() -> Self {
        Self {
            step_duration_ms: DEFAULT_STEP_DURATION_MS,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl ProcessingTiming {
    #[must_use]
    pub fn new(step_duration_ms: u64, redirect_delay_ms: u64) -> Self {
        Self {
            step_duration_ms,
            redirect_delay_ms,
        }
    }

    /// Interval between progress ticks. At least 1 ms.
    #[must_use]
    pub fn tick_ms(&self) -> u64 {
        (self.step_duration_ms / TICKS_PER_STEP).max(1)
    }
}

// =============================================================================
// FRAMES
// =============================================================================

/// What happens at one point of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameEvent {
    /// A new step became current.
    StepStarted {
        step: usize,
        label: &'static str,
        icon: &'static str,
    },
    /// The progress bar moved.
    Progress { step: usize, percent: Percent },
    /// The last step finished waiting.
    Completed,
    /// Navigate away.
    Redirect { location: &'static str },
}

impl FrameEvent {
    /// SSE event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::StepStarted { .. } => "step",
            Self::Progress { .. } => "progress",
            Self::Completed => "completed",
            Self::Redirect { .. } => "redirect",
        }
    }
}

/// A timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Milliseconds after the start of processing.
    pub offset_ms: u64,
    pub event: FrameEvent,
}

// =============================================================================
// TIMELINE
// =============================================================================

/// The complete, ordered choreography of one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingTimeline {
    frames: Vec<Frame>,
    destination: Page,
}

impl ProcessingTimeline {
    /// The standard four-step flow ending on the dashboard.
    #[must_use]
    pub fn standard(timing: ProcessingTiming) -> Self {
        Self::build(&PROCESSING_STEPS, timing, Page::Dashboard)
    }

    /// Lay out `steps` under `timing`, finishing with a redirect to
    /// `destination`.
    #[must_use]
    pub fn build(steps: &[ProcessingStep], timing: ProcessingTiming, destination: Page) -> Self {
        let tick = timing.tick_ms();
        let mut frames = Vec::new();
        let mut progress = Percent::ZERO;

        for (index, step) in steps.iter().enumerate() {
            let start = (index as u64).saturating_mul(timing.step_duration_ms);
            let end = start.saturating_add(timing.step_duration_ms);
            frames.push(Frame {
                offset_ms: start,
                event: FrameEvent::StepStarted {
                    step: index,
                    label: step.label,
                    icon: step.icon.name(),
                },
            });

            let target = step_target(index, steps.len());
            let mut ticks = 0u64;
            while progress < target {
                ticks = ticks.saturating_add(1);
                progress = progress.advance_toward(PROGRESS_INCREMENT, target);
                frames.push(Frame {
                    offset_ms: start.saturating_add(ticks.saturating_mul(tick)).min(end),
                    event: FrameEvent::Progress {
                        step: index,
                        percent: progress,
                    },
                });
            }
        }

        let finished = (steps.len() as u64).saturating_mul(timing.step_duration_ms);
        frames.push(Frame {
            offset_ms: finished,
            event: FrameEvent::Completed,
        });
        frames.push(Frame {
            offset_ms: finished.saturating_add(timing.redirect_delay_ms),
            event: FrameEvent::Redirect {
                location: destination.path(),
            },
        });

        Self {
            frames,
            destination,
        }
    }

    /// All frames in emission order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Consume into the frame list.
    #[must_use]
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    /// Where the flow ends up.
    #[must_use]
    pub fn destination(&self) -> Page {
        self.destination
    }

    /// Offset of the final frame.
    #[must_use]
    pub fn total_duration_ms(&self) -> u64 {
        self.frames.last().map(|f| f.offset_ms).unwrap_or(0)
    }

    /// Step indices in the order they started.
    #[must_use]
    pub fn visited_steps(&self) -> Vec<usize> {
        self.frames
            .iter()
            .filter_map(|f| match f.event {
                FrameEvent::StepStarted { step, .. } => Some(step),
                _ => None,
            })
            .collect()
    }

    /// Highest progress reached before the redirect.
    #[must_use]
    pub fn final_progress(&self) -> Percent {
        self.frames
            .iter()
            .filter_map(|f| match f.event {
                FrameEvent::Progress { percent, .. } => Some(percent),
                _ => None,
            })
            .max()
            .unwrap_or(Percent::ZERO)
    }
}

// =============================================================================
// TESTS
// =============================================================================
