//! Banner policy per decay tier.
//!
//! The Active tier has no banner. Every other tier maps to exactly one row.

use serde::Serialize;

use super::classifier::{Tier, TierColor};

/// What the banner's call-to-action does when tapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    CheckIn,
    Post,
    Rejoin,
}

/// Messaging and action configuration for a non-Active tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BannerPolicy {
    pub headline: &'static str,
    pub message: &'static str,
    pub call_to_action_label: &'static str,
    pub action_kind: ActionKind,
    pub severity_color: TierColor,
}

/// Indexed by `Tier::severity()`.
static POLICIES: [Option<BannerPolicy>; 5] = [
    None,
    Some(BannerPolicy {
        headline: "Things are cooling off",
        message: "It has been a while since you last connected. A quick hello keeps things warm.",
        call_to_action_label: "Check in",
        action_kind: ActionKind::CheckIn,
        severity_color: TierColor::Yellow,
    }),
    Some(BannerPolicy {
        headline: "This connection is fading",
        message: "Share something new before this connection slips away.",
        call_to_action_label: "Post an update",
        action_kind: ActionKind::Post,
        severity_color: TierColor::Orange,
    }),
    Some(BannerPolicy {
        headline: "Last chance to reconnect",
        message: "Only a few days remain before this connection goes inactive.",
        call_to_action_label: "Check in now",
        action_kind: ActionKind::CheckIn,
        severity_color: TierColor::Red,
    }),
    Some(BannerPolicy {
        headline: "This connection has gone quiet",
        message: "It has been too long since your last interaction. Rejoin to pick things back up.",
        call_to_action_label: "Rejoin",
        action_kind: ActionKind::Rejoin,
        severity_color: TierColor::Gray,
    }),
];

/// Banner to show for `tier`, or `None` while Active.
pub fn policy_for(tier: Tier) -> Option<&'static BannerPolicy> {
    POLICIES[usize::from(tier.severity())].as_ref()
}
