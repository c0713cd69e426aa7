//! # Rapport Core Library
//!
//! This library provides the engagement-health logic behind Rapport's social
//! views: how long a connection has gone without a positive interaction, what
//! that means for the banner shown to the user, and which tactile cue
//! accompanies it.
//!
//! ## Architecture
//!
//! - **Decay**: pure classification of elapsed days into ordered severity
//!   tiers, plus the static banner policy per tier
//! - **Haptics**: a static catalog of timed feedback patterns, interpreted by
//!   one sequencer against a shared hardware feedback device
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`DecayWindow`]: tier table and classification
//! - [`policy_for`]: banner lookup per tier
//! - [`FeedbackSequencer`]: ordered, serialized pattern playback
//! - [`HapticFeedback`]: maps social events to patterns and plays them
//! - [`Config`]: application configuration management

pub mod decay;
pub mod error;
pub mod haptics;
pub mod storage;

pub use decay::{classify, policy_for, ActionKind, BannerPolicy, DecayStatus, DecayWindow, Tier};
pub use error::{ConfigError, CoreError, HapticError, ValidationError};
pub use haptics::{
    get_pattern, FeedbackPattern, FeedbackSequencer, HapticDevice, HapticFeedback, PatternName,
    PlaybackReport, SeverityFeedbackMapper, SocialEvent, Step,
};
pub use storage::Config;
