//! Static catalog of named feedback patterns.
//!
//! Every pattern is an ordered list of [`Step`]s. Timings were tuned for
//! tactile perception and are part of the output protocol, so changes here
//! are user-visible.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValidationError};

/// Impact strength of a pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Medium,
    Heavy,
}

/// Notification-style signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Success,
    Warning,
    Error,
}

/// A single call against the hardware feedback channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum HapticOutput {
    Pulse(Intensity),
    Signal(SignalKind),
}

/// One unit of a feedback pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Step {
    Pulse(Intensity),
    Signal(SignalKind),
    /// Suspend for the given milliseconds.
    Wait(u64),
}

impl Step {
    /// Hardware call issued by this step, `None` for waits.
    pub fn output(&self) -> Option<HapticOutput> {
        match *self {
            Step::Pulse(intensity) => Some(HapticOutput::Pulse(intensity)),
            Step::Signal(kind) => Some(HapticOutput::Signal(kind)),
            Step::Wait(_) => None,
        }
    }
}

/// Engagement shade used by `HealthPulse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthShade {
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}

/// Conversation temperature used by `ConversationWarmth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Warmth {
    Hot,
    Warm,
    Cold,
    Dead,
}

impl FromStr for Warmth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hot" => Ok(Warmth::Hot),
            "warm" => Ok(Warmth::Warm),
            "cold" => Ok(Warmth::Cold),
            "dead" => Ok(Warmth::Dead),
            _ => Err(ValidationError::InvalidValue {
                field: "warmth".into(),
                message: format!("expected hot, warm, cold or dead, got '{s}'"),
            }),
        }
    }
}

/// Closed set of catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternName {
    MatchHeartbeat,
    ProximityBuzz,
    HealthPulse(HealthShade),
    ConversationWarmth(Warmth),
    Celebration,
    SuperLike,
}

impl PatternName {
    pub const ALL: [PatternName; 13] = [
        PatternName::MatchHeartbeat,
        PatternName::ProximityBuzz,
        PatternName::HealthPulse(HealthShade::Yellow),
        PatternName::HealthPulse(HealthShade::Orange),
        PatternName::HealthPulse(HealthShade::Red),
        PatternName::HealthPulse(HealthShade::Gray),
        PatternName::HealthPulse(HealthShade::Green),
        PatternName::ConversationWarmth(Warmth::Hot),
        PatternName::ConversationWarmth(Warmth::Warm),
        PatternName::ConversationWarmth(Warmth::Cold),
        PatternName::ConversationWarmth(Warmth::Dead),
        PatternName::Celebration,
        PatternName::SuperLike,
    ];

    /// Catalog name, e.g. `HealthPulse(red)`.
    pub fn as_str(self) -> &'static str {
        match self {
            PatternName::MatchHeartbeat => "MatchHeartbeat",
            PatternName::ProximityBuzz => "ProximityBuzz",
            PatternName::HealthPulse(HealthShade::Green) => "HealthPulse(green)",
            PatternName::HealthPulse(HealthShade::Yellow) => "HealthPulse(yellow)",
            PatternName::HealthPulse(HealthShade::Orange) => "HealthPulse(orange)",
            PatternName::HealthPulse(HealthShade::Red) => "HealthPulse(red)",
            PatternName::HealthPulse(HealthShade::Gray) => "HealthPulse(gray)",
            PatternName::ConversationWarmth(Warmth::Hot) => "ConversationWarmth(hot)",
            PatternName::ConversationWarmth(Warmth::Warm) => "ConversationWarmth(warm)",
            PatternName::ConversationWarmth(Warmth::Cold) => "ConversationWarmth(cold)",
            PatternName::ConversationWarmth(Warmth::Dead) => "ConversationWarmth(dead)",
            PatternName::Celebration => "Celebration",
            PatternName::SuperLike => "SuperLike",
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternName {
    type Err = ValidationError;

    /// Exact catalog names only. Anything else is a caller bug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownPattern(s.to_string()))
    }
}

impl Serialize for PatternName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PatternName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

use Intensity::{Heavy, Light, Medium};
use Step::{Pulse, Signal, Wait};

const MATCH_HEARTBEAT: &[Step] = &[
    Pulse(Heavy),
    Wait(120),
    Pulse(Heavy),
    Wait(400),
    Pulse(Medium),
    Wait(120),
    Pulse(Medium),
];

const PROXIMITY_BUZZ: &[Step] = &[
    Pulse(Light),
    Wait(80),
    Pulse(Light),
    Wait(80),
    Pulse(Light),
];

const HEALTH_GREEN: &[Step] = &[];
const HEALTH_YELLOW: &[Step] = &[Pulse(Light)];
const HEALTH_ORANGE: &[Step] = &[Pulse(Medium), Wait(150), Pulse(Medium)];
const HEALTH_RED: &[Step] = &[
    Pulse(Heavy),
    Wait(120),
    Pulse(Heavy),
    Wait(120),
    Pulse(Heavy),
];
const HEALTH_GRAY: &[Step] = &[Signal(SignalKind::Warning)];

const WARMTH_HOT: &[Step] = &[
    Signal(SignalKind::Success),
    Wait(200),
    Pulse(Medium),
    Wait(100),
    Pulse(Medium),
];
const WARMTH_WARM: &[Step] = &[Pulse(Medium)];
const WARMTH_COLD: &[Step] = &[Pulse(Light)];
const WARMTH_DEAD: &[Step] = &[Signal(SignalKind::Error)];

const CELEBRATION: &[Step] = &[
    Signal(SignalKind::Success),
    Wait(250),
    Pulse(Light),
    Wait(100),
    Pulse(Medium),
    Wait(100),
    Pulse(Heavy),
];

const SUPER_LIKE: &[Step] = &[
    Pulse(Heavy),
    Wait(200),
    Pulse(Light),
    Wait(60),
    Pulse(Light),
    Wait(60),
    Pulse(Light),
    Wait(200),
    Pulse(Heavy),
];

/// A named, immutable sequence of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedbackPattern {
    name: PatternName,
    steps: &'static [Step],
}

impl FeedbackPattern {
    pub fn name(&self) -> PatternName {
        self.name
    }

    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all `Wait` steps in milliseconds.
    pub fn total_wait_ms(&self) -> u64 {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Wait(ms) => *ms,
                _ => 0,
            })
            .sum()
    }

    /// Number of steps that reach the hardware.
    pub fn output_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.output().is_some())
            .count()
    }
}

/// Look up a catalog entry. Total over [`PatternName`].
pub fn get_pattern(name: PatternName) -> FeedbackPattern {
    let steps = match name {
        PatternName::MatchHeartbeat => MATCH_HEARTBEAT,
        PatternName::ProximityBuzz => PROXIMITY_BUZZ,
        PatternName::HealthPulse(HealthShade::Green) => HEALTH_GREEN,
        PatternName::HealthPulse(HealthShade::Yellow) => HEALTH_YELLOW,
        PatternName::HealthPulse(HealthShade::Orange) => HEALTH_ORANGE,
        PatternName::HealthPulse(HealthShade::Red) => HEALTH_RED,
        PatternName::HealthPulse(HealthShade::Gray) => HEALTH_GRAY,
        PatternName::ConversationWarmth(Warmth::Hot) => WARMTH_HOT,
        PatternName::ConversationWarmth(Warmth::Warm) => WARMTH_WARM,
        PatternName::ConversationWarmth(Warmth::Cold) => WARMTH_COLD,
        PatternName::ConversationWarmth(Warmth::Dead) => WARMTH_DEAD,
        PatternName::Celebration => CELEBRATION,
        PatternName::SuperLike => SUPER_LIKE,
    };
    FeedbackPattern { name, steps }
}

/// Look up a pattern by its catalog name, e.g. from CLI input.
pub fn get_pattern_named(name: &str) -> Result<FeedbackPattern> {
    let name: PatternName = name.parse()?;
    Ok(get_pattern(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_match_heartbeat_timing() {
        let pattern = get_pattern(PatternName::MatchHeartbeat);
        assert_eq!(pattern.output_count(), 4);
        assert_eq!(pattern.total_wait_ms(), 640);
        assert!(pattern
            .steps()
            .iter()
            .all(|s| matches!(s, Step::Pulse(_) | Step::Wait(_))));
    }

    #[test]
    fn test_green_health_pulse_is_empty() {
        let pattern = get_pattern(PatternName::HealthPulse(HealthShade::Green));
        assert!(pattern.is_empty());
        assert_eq!(pattern.total_wait_ms(), 0);
    }

    #[test]
    fn test_catalog_totals() {
        let expected = [
            ("MatchHeartbeat", 4, 640),
            ("ProximityBuzz", 3, 160),
            ("HealthPulse(yellow)", 1, 0),
            ("HealthPulse(orange)", 2, 150),
            ("HealthPulse(red)", 3, 240),
            ("HealthPulse(gray)", 1, 0),
            ("HealthPulse(green)", 0, 0),
            ("ConversationWarmth(hot)", 3, 300),
            ("ConversationWarmth(warm)", 1, 0),
            ("ConversationWarmth(cold)", 1, 0),
            ("ConversationWarmth(dead)", 1, 0),
            ("Celebration", 4, 450),
            ("SuperLike", 5, 520),
        ];
        for (name, outputs, wait_ms) in expected {
            let pattern = get_pattern_named(name).unwrap();
            assert_eq!(pattern.output_count(), outputs, "{name}");
            assert_eq!(pattern.total_wait_ms(), wait_ms, "{name}");
        }
    }

    #[test]
    fn test_signal_patterns() {
        assert_eq!(
            get_pattern(PatternName::HealthPulse(HealthShade::Gray)).steps(),
            &[Step::Signal(SignalKind::Warning)]
        );
        assert_eq!(
            get_pattern(PatternName::ConversationWarmth(Warmth::Dead)).steps(),
            &[Step::Signal(SignalKind::Error)]
        );
        assert_eq!(
            get_pattern(PatternName::Celebration).steps()[0],
            Step::Signal(SignalKind::Success)
        );
    }

    #[test]
    fn test_no_pattern_starts_or_ends_with_wait() {
        for name in PatternName::ALL {
            let steps = get_pattern(name).steps();
            assert!(!matches!(steps.first(), Some(Step::Wait(_))), "{name}");
            assert!(!matches!(steps.last(), Some(Step::Wait(_))), "{name}");
        }
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for name in PatternName::ALL {
            assert_eq!(name.as_str().parse::<PatternName>().unwrap(), name);
        }
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = get_pattern_named("HealthPulse(purple)").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::UnknownPattern(ref name))
                if name == "HealthPulse(purple)"
        ));
        assert!("matchheartbeat".parse::<PatternName>().is_err());
    }

    #[test]
    fn test_step_serialization() {
        let json = serde_json::to_string(&Step::Wait(120)).unwrap();
        assert_eq!(json, r#"{"kind":"wait","value":120}"#);
        let json = serde_json::to_string(&Step::Pulse(Intensity::Heavy)).unwrap();
        assert_eq!(json, r#"{"kind":"pulse","value":"heavy"}"#);
    }
}
