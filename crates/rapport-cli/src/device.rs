//! Terminal stand-in for a haptic engine.

use std::time::Instant;

use rapport_core::haptics::{HapticOutput, Intensity, SignalKind};
use rapport_core::{HapticDevice, HapticError};

/// Logs each call and prints it to stderr with its offset from device creation.
pub struct ConsoleDevice {
    origin: Instant,
}

impl ConsoleDevice {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    fn print(&self, output: HapticOutput) {
        tracing::debug!(?output, "haptic output");
        let label = match output {
            HapticOutput::Pulse(Intensity::Light) => "pulse  light  .",
            HapticOutput::Pulse(Intensity::Medium) => "pulse  medium o",
            HapticOutput::Pulse(Intensity::Heavy) => "pulse  heavy  O",
            HapticOutput::Signal(SignalKind::Success) => "signal success",
            HapticOutput::Signal(SignalKind::Warning) => "signal warning",
            HapticOutput::Signal(SignalKind::Error) => "signal error",
        };
        eprintln!("[+{:>5}ms] {label}", self.origin.elapsed().as_millis());
    }
}

impl HapticDevice for ConsoleDevice {
    fn pulse(&self, intensity: Intensity) -> Result<(), HapticError> {
        self.print(HapticOutput::Pulse(intensity));
        Ok(())
    }

    fn signal(&self, kind: SignalKind) -> Result<(), HapticError> {
        self.print(HapticOutput::Signal(kind));
        Ok(())
    }
}
