//! Social events to feedback patterns.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use super::device::HapticDevice;
use super::pattern::{HealthShade, PatternName, Warmth};
use super::sequencer::{FeedbackSequencer, PlaybackReport};
use crate::decay::Tier;
use crate::error::ValidationError;

/// Discrete events that produce a tactile cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SocialEvent {
    /// A profile or group view observed a decay tier
    HealthChanged(Tier),
    Match,
    Proximity,
    ConversationWarmth(Warmth),
    Celebration,
    SuperLike,
}

impl FromStr for SocialEvent {
    type Err = ValidationError;

    /// Parses `match`, `proximity`, `celebration`, `super_like`,
    /// `health:<tier>` and `warmth:<hot|warm|cold|dead>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ValidationError::UnknownEvent(s.to_string());
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");

        if let Some((kind, arg)) = normalized.split_once(':') {
            return match kind {
                "health" => arg
                    .parse()
                    .map(SocialEvent::HealthChanged)
                    .map_err(|_| unknown()),
                "warmth" => arg
                    .parse()
                    .map(SocialEvent::ConversationWarmth)
                    .map_err(|_| unknown()),
                _ => Err(unknown()),
            };
        }

        match normalized.as_str() {
            "match" => Ok(SocialEvent::Match),
            "proximity" => Ok(SocialEvent::Proximity),
            "celebration" => Ok(SocialEvent::Celebration),
            "super_like" | "superlike" => Ok(SocialEvent::SuperLike),
            _ => Err(unknown()),
        }
    }
}

/// Chooses the pattern for a social event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityFeedbackMapper;

impl SeverityFeedbackMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn shade_for(&self, tier: Tier) -> HealthShade {
        match tier {
            Tier::Active => HealthShade::Green,
            Tier::Cooling => HealthShade::Yellow,
            Tier::AtRisk => HealthShade::Orange,
            Tier::Critical => HealthShade::Red,
            Tier::Inactive => HealthShade::Gray,
        }
    }

    pub fn pattern_for(&self, event: SocialEvent) -> PatternName {
        match event {
            SocialEvent::HealthChanged(tier) => PatternName::HealthPulse(self.shade_for(tier)),
            SocialEvent::Match => PatternName::MatchHeartbeat,
            SocialEvent::Proximity => PatternName::ProximityBuzz,
            SocialEvent::ConversationWarmth(warmth) => PatternName::ConversationWarmth(warmth),
            SocialEvent::Celebration => PatternName::Celebration,
            SocialEvent::SuperLike => PatternName::SuperLike,
        }
    }
}

/// Entry point for UI event handlers: map an event and play its pattern.
///
/// Owned by the composition root and passed to whoever needs it.
pub struct HapticFeedback<D> {
    sequencer: Arc<FeedbackSequencer<D>>,
    mapper: SeverityFeedbackMapper,
}

impl<D> Clone for HapticFeedback<D> {
    fn clone(&self) -> Self {
        Self {
            sequencer: Arc::clone(&self.sequencer),
            mapper: self.mapper,
        }
    }
}

impl<D: HapticDevice + 'static> HapticFeedback<D> {
    pub fn new(sequencer: FeedbackSequencer<D>) -> Self {
        Self {
            sequencer: Arc::new(sequencer),
            mapper: SeverityFeedbackMapper::new(),
        }
    }

    pub fn sequencer(&self) -> &FeedbackSequencer<D> {
        &self.sequencer
    }

    /// Play the cue for `event` and wait for it to finish.
    pub async fn notify(&self, event: SocialEvent) -> PlaybackReport {
        let pattern = self.mapper.pattern_for(event);
        tracing::debug!(?event, %pattern, "social event");
        self.sequencer.play_named(pattern).await
    }

    /// Fire-and-forget variant. Must be called inside a tokio runtime; the
    /// handle is only needed for synchronization in tests.
    pub fn trigger(&self, event: SocialEvent) -> JoinHandle<PlaybackReport> {
        let feedback = self.clone();
        tokio::spawn(async move { feedback.notify(event).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::device::RecordingDevice;
    use crate::haptics::pattern::{HapticOutput, Intensity, SignalKind};

    #[test]
    fn test_tier_maps_to_health_pulse() {
        let mapper = SeverityFeedbackMapper::new();
        let expected = [
            (Tier::Active, "HealthPulse(green)"),
            (Tier::Cooling, "HealthPulse(yellow)"),
            (Tier::AtRisk, "HealthPulse(orange)"),
            (Tier::Critical, "HealthPulse(red)"),
            (Tier::Inactive, "HealthPulse(gray)"),
        ];
        for (tier, name) in expected {
            let pattern = mapper.pattern_for(SocialEvent::HealthChanged(tier));
            assert_eq!(pattern.as_str(), name);
        }
    }

    #[test]
    fn test_other_events() {
        let mapper = SeverityFeedbackMapper::new();
        assert_eq!(
            mapper.pattern_for(SocialEvent::Match),
            PatternName::MatchHeartbeat
        );
        assert_eq!(
            mapper.pattern_for(SocialEvent::SuperLike),
            PatternName::SuperLike
        );
        assert_eq!(
            mapper.pattern_for(SocialEvent::ConversationWarmth(Warmth::Cold)),
            PatternName::ConversationWarmth(Warmth::Cold)
        );
    }

    #[test]
    fn test_event_parsing() {
        assert_eq!("match".parse::<SocialEvent>().unwrap(), SocialEvent::Match);
        assert_eq!(
            "Super-Like".parse::<SocialEvent>().unwrap(),
            SocialEvent::SuperLike
        );
        assert_eq!(
            "health:red".parse::<SocialEvent>().unwrap(),
            SocialEvent::HealthChanged(Tier::Critical)
        );
        assert_eq!(
            "health:at_risk".parse::<SocialEvent>().unwrap(),
            SocialEvent::HealthChanged(Tier::AtRisk)
        );
        assert_eq!(
            "warmth:dead".parse::<SocialEvent>().unwrap(),
            SocialEvent::ConversationWarmth(Warmth::Dead)
        );
        assert!("warmth:lukewarm".parse::<SocialEvent>().is_err());
        assert!("wink".parse::<SocialEvent>().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_notify_plays_mapped_pattern() {
        let feedback = HapticFeedback::new(FeedbackSequencer::new(RecordingDevice::new()));

        let report = feedback
            .notify(SocialEvent::HealthChanged(Tier::Inactive))
            .await;

        assert_eq!(report.pattern, PatternName::HealthPulse(HealthShade::Gray));
        assert_eq!(
            feedback.sequencer().device().outputs(),
            vec![HapticOutput::Signal(SignalKind::Warning)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_runs_in_background() {
        let feedback = HapticFeedback::new(FeedbackSequencer::new(RecordingDevice::new()));

        let first = feedback.trigger(SocialEvent::Proximity);
        let second = feedback.trigger(SocialEvent::ConversationWarmth(Warmth::Warm));
        first.await.unwrap();
        second.await.unwrap();

        assert_eq!(
            feedback.sequencer().device().outputs(),
            vec![
                HapticOutput::Pulse(Intensity::Light),
                HapticOutput::Pulse(Intensity::Light),
                HapticOutput::Pulse(Intensity::Light),
                HapticOutput::Pulse(Intensity::Medium),
            ]
        );
    }
}
