//! Engagement-health decay classification.
//!
//! Maps the number of whole days since the last positive interaction onto
//! one of five ordered severity tiers. The canonical window is 45 days with
//! cut points at 30/37/42/45; other window lengths rescale those cut points
//! proportionally.
//!
//! Classification is total: negative inputs clamp to day 0 and anything past
//! the window lands in [`Tier::Inactive`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Default decay window length in days.
pub const DEFAULT_TOTAL_DAYS: u32 = 45;

const CANONICAL_TOTAL_DAYS: u64 = 45;

/// Last day (inclusive) of each bounded tier in the canonical 45-day window.
const CANONICAL_CUTS: [(Tier, u64); 4] = [
    (Tier::Active, 30),
    (Tier::Cooling, 37),
    (Tier::AtRisk, 42),
    (Tier::Critical, 45),
];

/// Ordered engagement severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Recently engaged (green)
    Active,
    /// Starting to cool (yellow)
    Cooling,
    /// Close to lapsing (orange)
    AtRisk,
    /// Final days of the window (red)
    Critical,
    /// Past the window (gray)
    Inactive,
}

impl Tier {
    /// All tiers in ascending severity.
    pub const ALL: [Tier; 5] = [
        Tier::Active,
        Tier::Cooling,
        Tier::AtRisk,
        Tier::Critical,
        Tier::Inactive,
    ];

    /// Severity ordinal (0 = Active, 4 = Inactive)
    pub fn severity(self) -> u8 {
        match self {
            Tier::Active => 0,
            Tier::Cooling => 1,
            Tier::AtRisk => 2,
            Tier::Critical => 3,
            Tier::Inactive => 4,
        }
    }

    pub fn color(self) -> TierColor {
        match self {
            Tier::Active => TierColor::Green,
            Tier::Cooling => TierColor::Yellow,
            Tier::AtRisk => TierColor::Orange,
            Tier::Critical => TierColor::Red,
            Tier::Inactive => TierColor::Gray,
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Tier::Active => "Active",
            Tier::Cooling => "Cooling",
            Tier::AtRisk => "At risk",
            Tier::Critical => "Critical",
            Tier::Inactive => "Inactive",
        }
    }

    fn as_snake(self) -> &'static str {
        match self {
            Tier::Active => "active",
            Tier::Cooling => "cooling",
            Tier::AtRisk => "at_risk",
            Tier::Critical => "critical",
            Tier::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_snake())
    }
}

impl FromStr for Tier {
    type Err = ValidationError;

    /// Accepts tier names (`at_risk`, `at-risk`, `atrisk`) or colors (`orange`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "active" | "green" => Ok(Tier::Active),
            "cooling" | "yellow" => Ok(Tier::Cooling),
            "at_risk" | "atrisk" | "orange" => Ok(Tier::AtRisk),
            "critical" | "red" => Ok(Tier::Critical),
            "inactive" | "gray" | "grey" => Ok(Tier::Inactive),
            _ => Err(ValidationError::UnknownTier(s.to_string())),
        }
    }
}

/// Visual severity color attached to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierColor {
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl TierColor {
    pub fn as_str(self) -> &'static str {
        match self {
            TierColor::Green => "green",
            TierColor::Yellow => "yellow",
            TierColor::Orange => "orange",
            TierColor::Red => "red",
            TierColor::Gray => "gray",
        }
    }

    /// Hex swatch used by banner and ring consumers
    pub fn hex(self) -> &'static str {
        match self {
            TierColor::Green => "#22c55e",
            TierColor::Yellow => "#eab308",
            TierColor::Orange => "#f97316",
            TierColor::Red => "#ef4444",
            TierColor::Gray => "#9ca3af",
        }
    }
}

/// One row of the tier table: an inclusive day range.
///
/// `max_day == None` means unbounded. A row with `min_day > max_day` is
/// empty, which only happens for very short windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRange {
    pub tier: Tier,
    pub min_day: u64,
    pub max_day: Option<u64>,
}

impl TierRange {
    pub fn contains(&self, day: u64) -> bool {
        day >= self.min_day && self.max_day.map_or(true, |max| day <= max)
    }

    pub fn is_empty(&self) -> bool {
        self.max_day.is_some_and(|max| max < self.min_day)
    }
}

/// Snapshot of an entity's decay position, recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayStatus {
    /// Elapsed days after clamping
    pub elapsed_days: u64,
    pub total_days: u32,
    /// `max(0, total_days - elapsed_days)`
    pub days_remaining: u32,
    /// `elapsed_days > total_days`
    pub is_expired: bool,
    /// Remaining share of the window in `[0.0, 1.0]`
    pub fraction_remaining: f64,
    pub tier: Tier,
}

/// Decay window configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecayWindow {
    total_days: u32,
}

impl Default for DecayWindow {
    fn default() -> Self {
        Self {
            total_days: DEFAULT_TOTAL_DAYS,
        }
    }
}

impl DecayWindow {
    /// Create a window of `total_days`.
    ///
    /// A zero-length window is a programming error: it asserts in debug
    /// builds and is clamped to one day otherwise.
    pub fn new(total_days: u32) -> Self {
        debug_assert!(total_days > 0, "decay window must span at least one day");
        Self {
            total_days: total_days.max(1),
        }
    }

    /// Checked constructor for untrusted input (config, CLI).
    pub fn try_new(total_days: u32) -> Result<Self, ValidationError> {
        if total_days == 0 {
            return Err(ValidationError::InvalidValue {
                field: "total_days".into(),
                message: "decay window must span at least one day".into(),
            });
        }
        Ok(Self { total_days })
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Inclusive last day of Active, Cooling, AtRisk and Critical.
    ///
    /// Each cut is `floor(canonical / 45 * total_days)` and never falls below
    /// the previous cut.
    pub fn cut_points(&self) -> [u64; 4] {
        let total = u64::from(self.total_days);
        let mut cuts = [0u64; 4];
        let mut floor = 0u64;
        for (slot, (_, canonical)) in cuts.iter_mut().zip(CANONICAL_CUTS.iter()) {
            let scaled = canonical * total / CANONICAL_TOTAL_DAYS;
            *slot = scaled.max(floor);
            floor = *slot;
        }
        cuts
    }

    /// Ordered `(tier, min_day, max_day)` rows covering `[0, inf)`.
    pub fn tier_table(&self) -> [TierRange; 5] {
        let [active, cooling, at_risk, critical] = self.cut_points();
        [
            TierRange {
                tier: Tier::Active,
                min_day: 0,
                max_day: Some(active),
            },
            TierRange {
                tier: Tier::Cooling,
                min_day: active + 1,
                max_day: Some(cooling),
            },
            TierRange {
                tier: Tier::AtRisk,
                min_day: cooling + 1,
                max_day: Some(at_risk),
            },
            TierRange {
                tier: Tier::Critical,
                min_day: at_risk + 1,
                max_day: Some(critical),
            },
            TierRange {
                tier: Tier::Inactive,
                min_day: critical + 1,
                max_day: None,
            },
        ]
    }

    /// Classify whole elapsed days. Negative values clamp to 0.
    pub fn classify(&self, elapsed_days: i64) -> Tier {
        let day = clamp_days(elapsed_days);
        self.tier_table()
            .iter()
            .find(|range| range.contains(day))
            .map(|range| range.tier)
            .unwrap_or(Tier::Inactive)
    }

    /// Classify a fractional day count, flooring to whole days.
    ///
    /// Non-finite input asserts in debug builds. Otherwise NaN is treated as
    /// day 0 and infinities saturate.
    pub fn classify_fractional(&self, elapsed_days: f64) -> Tier {
        debug_assert!(elapsed_days.is_finite(), "elapsed days must be finite");
        self.classify(elapsed_days.floor() as i64)
    }

    /// Classify the span between the last positive interaction and `now`.
    pub fn classify_at(&self, last_positive: DateTime<Utc>, now: DateTime<Utc>) -> Tier {
        self.classify(elapsed_days_between(last_positive, now))
    }

    pub fn days_remaining(&self, elapsed_days: i64) -> u32 {
        let day = clamp_days(elapsed_days);
        u64::from(self.total_days).saturating_sub(day) as u32
    }

    pub fn is_expired(&self, elapsed_days: i64) -> bool {
        clamp_days(elapsed_days) > u64::from(self.total_days)
    }

    pub fn status(&self, elapsed_days: i64) -> DecayStatus {
        let days_remaining = self.days_remaining(elapsed_days);
        DecayStatus {
            elapsed_days: clamp_days(elapsed_days),
            total_days: self.total_days,
            days_remaining,
            is_expired: self.is_expired(elapsed_days),
            fraction_remaining: f64::from(days_remaining) / f64::from(self.total_days),
            tier: self.classify(elapsed_days),
        }
    }
}

/// Classify `elapsed_days` against a window of `total_days`.
pub fn classify(elapsed_days: i64, total_days: u32) -> Tier {
    DecayWindow::new(total_days).classify(elapsed_days)
}

/// Whole days between two instants. Spans where `now` precedes
/// `last_positive` (clock skew) count as zero.
pub fn elapsed_days_between(last_positive: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - last_positive).num_days().max(0)
}

fn clamp_days(elapsed_days: i64) -> u64 {
    elapsed_days.max(0) as u64
}
