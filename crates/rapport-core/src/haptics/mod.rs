//! Haptic feedback: pattern catalog, device capability, sequencer and the
//! event-to-pattern mapping used by UI handlers.

mod device;
mod mapper;
mod pattern;
mod sequencer;

pub use device::{HapticDevice, RecordedCall, RecordingDevice, UnavailableDevice};
pub use mapper::{HapticFeedback, SeverityFeedbackMapper, SocialEvent};
pub use pattern::{
    get_pattern, get_pattern_named, FeedbackPattern, HapticOutput, HealthShade, Intensity,
    PatternName, SignalKind, Step, Warmth,
};
pub use sequencer::{FeedbackSequencer, PlaybackReport, PlaybackRequest, StepOutcome};
