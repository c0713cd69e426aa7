mod classifier;
mod policy;

pub use classifier::{
    classify, elapsed_days_between, DecayStatus, DecayWindow, Tier, TierColor, TierRange,
    DEFAULT_TOTAL_DAYS,
};
pub use policy::{policy_for, ActionKind, BannerPolicy};
