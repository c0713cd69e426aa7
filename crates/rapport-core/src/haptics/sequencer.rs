//! Feedback pattern playback.
//!
//! The sequencer interprets a [`FeedbackPattern`] against one shared
//! [`HapticDevice`]. Steps run strictly in order and each `Wait` suspends for
//! exactly its duration before the next step issues.
//!
//! ## Overlap policy
//!
//! Playback is serialized. The output channel sits behind a fair
//! `tokio::sync::Mutex`, so a `play()` arriving while another pattern is
//! running waits its turn (FIFO) and then plays in full. Two patterns never
//! interleave on the device.
//!
//! ## Failure isolation
//!
//! A device error on one step is logged and dropped. The step is not
//! retried and the remaining steps keep their schedule. Nothing surfaces to
//! the caller beyond the counters in [`PlaybackReport`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::device::HapticDevice;
use super::pattern::{get_pattern, FeedbackPattern, HapticOutput, PatternName, Step};
use crate::storage::HapticsConfig;

/// A pending playback: what to play and when it was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackRequest {
    pub pattern: PatternName,
    pub requested_at: DateTime<Utc>,
}

impl PlaybackRequest {
    pub fn new(pattern: PatternName) -> Self {
        Self {
            pattern,
            requested_at: Utc::now(),
        }
    }
}

/// Result of one issued output step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Position of the step within the pattern
    pub index: usize,
    pub output: HapticOutput,
    /// Offset from the start of playback (after queueing)
    pub at_ms: u64,
    /// Device error message, if the call failed
    pub error: Option<String>,
}

/// Completion record for a single `play()` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackReport {
    pub pattern: PatternName,
    pub requested_at: DateTime<Utc>,
    /// Time spent waiting for an earlier pattern to finish
    pub queued_ms: u64,
    /// Total time suspended in `Wait` steps
    pub waited_ms: u64,
    pub issued: usize,
    pub failed: usize,
    /// Playback skipped because haptics are disabled
    pub disabled: bool,
    pub outcomes: Vec<StepOutcome>,
}

impl PlaybackReport {
    fn empty(request: &PlaybackRequest) -> Self {
        Self {
            pattern: request.pattern,
            requested_at: request.requested_at,
            queued_ms: 0,
            waited_ms: 0,
            issued: 0,
            failed: 0,
            disabled: false,
            outcomes: Vec::new(),
        }
    }

    /// Every issued step reached the device.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Clears the playing flag even when playback is dropped mid-pattern.
struct PlayingGuard<'a>(&'a AtomicBool);

impl<'a> PlayingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for PlayingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Plays feedback patterns on a single device, one at a time.
pub struct FeedbackSequencer<D> {
    device: D,
    channel: Mutex<()>,
    playing: AtomicBool,
    enabled: bool,
    log_failures: bool,
}

impl<D: HapticDevice> FeedbackSequencer<D> {
    /// Create an enabled sequencer for `device`.
    pub fn new(device: D) -> Self {
        Self::with_config(device, &HapticsConfig::default())
    }

    pub fn with_config(device: D, config: &HapticsConfig) -> Self {
        Self {
            device,
            channel: Mutex::new(()),
            playing: AtomicBool::new(false),
            enabled: config.enabled,
            log_failures: config.log_failures,
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Whether a pattern currently owns the output channel.
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    /// Play a catalog pattern by name.
    pub async fn play_named(&self, name: PatternName) -> PlaybackReport {
        self.play_request(PlaybackRequest::new(name)).await
    }

    pub async fn play_request(&self, request: PlaybackRequest) -> PlaybackReport {
        self.run(get_pattern(request.pattern), request).await
    }

    /// Play `pattern` to completion. Never fails.
    pub async fn play(&self, pattern: &FeedbackPattern) -> PlaybackReport {
        self.run(*pattern, PlaybackRequest::new(pattern.name())).await
    }

    async fn run(&self, pattern: FeedbackPattern, request: PlaybackRequest) -> PlaybackReport {
        let mut report = PlaybackReport::empty(&request);

        if !self.enabled {
            tracing::debug!(pattern = %request.pattern, "haptics disabled, skipping playback");
            report.disabled = true;
            return report;
        }
        // Nothing to play: resolve without touching (or waiting for) the channel.
        if pattern.is_empty() {
            return report;
        }

        let queued_since = Instant::now();
        let _channel = self.channel.lock().await;
        let _playing = PlayingGuard::acquire(&self.playing);
        report.queued_ms = queued_since.elapsed().as_millis() as u64;

        let started = Instant::now();
        for (index, step) in pattern.steps().iter().enumerate() {
            let output = match *step {
                Step::Pulse(intensity) => HapticOutput::Pulse(intensity),
                Step::Signal(kind) => HapticOutput::Signal(kind),
                Step::Wait(ms) => {
                    tracing::trace!(pattern = %request.pattern, index, ms, "wait");
                    tokio::time::sleep(Duration::from_millis(ms)).await;
                    report.waited_ms += ms;
                    continue;
                }
            };

            let at_ms = started.elapsed().as_millis() as u64;
            let error = match self.device.emit(output) {
                Ok(()) => {
                    tracing::debug!(
                        pattern = %request.pattern,
                        index,
                        ?output,
                        "step issued"
                    );
                    None
                }
                Err(err) => {
                    if self.log_failures {
                        tracing::warn!(
                            pattern = %request.pattern,
                            index,
                            ?output,
                            error = %err,
                            "haptic step failed, continuing"
                        );
                    }
                    report.failed += 1;
                    Some(err.to_string())
                }
            };
            report.issued += 1;
            report.outcomes.push(StepOutcome {
                index,
                output,
                at_ms,
                error,
            });
        }

        tracing::info!(
            pattern = %request.pattern,
            issued = report.issued,
            failed = report.failed,
            waited_ms = report.waited_ms,
            queued_ms = report.queued_ms,
            "playback complete"
        );
        report
    }
}
