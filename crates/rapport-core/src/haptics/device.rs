//! Hardware feedback capability.
//!
//! Platforms implement [`HapticDevice`]. Calls are expected to return
//! promptly; any error is reported per call and never retried.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::time::Instant;

use super::pattern::{HapticOutput, Intensity, SignalKind};
use crate::error::HapticError;

/// Shared, stateless output channel for tactile feedback.
pub trait HapticDevice: Send + Sync {
    fn pulse(&self, intensity: Intensity) -> Result<(), HapticError>;

    fn signal(&self, kind: SignalKind) -> Result<(), HapticError>;

    /// Dispatch a single output to the matching call.
    fn emit(&self, output: HapticOutput) -> Result<(), HapticError> {
        match output {
            HapticOutput::Pulse(intensity) => self.pulse(intensity),
            HapticOutput::Signal(kind) => self.signal(kind),
        }
    }
}

impl<T: HapticDevice + ?Sized> HapticDevice for Arc<T> {
    fn pulse(&self, intensity: Intensity) -> Result<(), HapticError> {
        (**self).pulse(intensity)
    }

    fn signal(&self, kind: SignalKind) -> Result<(), HapticError> {
        (**self).signal(kind)
    }
}

/// Device without a haptic engine. Every call fails with `Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableDevice;

impl HapticDevice for UnavailableDevice {
    fn pulse(&self, _intensity: Intensity) -> Result<(), HapticError> {
        Err(HapticError::Unavailable)
    }

    fn signal(&self, _kind: SignalKind) -> Result<(), HapticError> {
        Err(HapticError::Unavailable)
    }
}

/// A call observed by [`RecordingDevice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub output: HapticOutput,
    /// Offset from device creation on the tokio clock
    pub at: Duration,
    pub succeeded: bool,
}

/// In-memory device that records every call and can inject failures.
///
/// Timestamps use `tokio::time::Instant`, so paused-clock tests see exact
/// offsets.
#[derive(Debug)]
pub struct RecordingDevice {
    origin: Instant,
    calls: Mutex<Vec<RecordedCall>>,
    failing_calls: HashSet<usize>,
    failure: HapticError,
}

impl Default for RecordingDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            calls: Mutex::new(Vec::new()),
            failing_calls: HashSet::new(),
            failure: HapticError::Driver("injected failure".into()),
        }
    }

    /// Fail the calls at the given zero-based positions.
    pub fn failing_on(mut self, call_indices: impl IntoIterator<Item = usize>) -> Self {
        self.failing_calls.extend(call_indices);
        self
    }

    /// Error returned for injected failures.
    pub fn with_failure(mut self, failure: HapticError) -> Self {
        self.failure = failure;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().clone()
    }

    pub fn outputs(&self) -> Vec<HapticOutput> {
        self.lock().iter().map(|call| call.output).collect()
    }

    /// Call offsets in whole milliseconds.
    pub fn offsets_ms(&self) -> Vec<u64> {
        self.lock()
            .iter()
            .map(|call| call.at.as_millis() as u64)
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedCall>> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, output: HapticOutput) -> Result<(), HapticError> {
        let mut calls = self.lock();
        let failed = self.failing_calls.contains(&calls.len());
        calls.push(RecordedCall {
            output,
            at: self.origin.elapsed(),
            succeeded: !failed,
        });
        if failed {
            Err(self.failure.clone())
        } else {
            Ok(())
        }
    }
}

impl HapticDevice for RecordingDevice {
    fn pulse(&self, intensity: Intensity) -> Result<(), HapticError> {
        self.record(HapticOutput::Pulse(intensity))
    }

    fn signal(&self, kind: SignalKind) -> Result<(), HapticError> {
        self.record(HapticOutput::Signal(kind))
    }
}
