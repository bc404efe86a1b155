//! Ordering, tiers and the recommendation verdict.

use std::cmp::Ordering;

use sr_core::ScoreScale;

use crate::SafetyReport;

/// Share of the scale maximum needed for [`Tier::Top`].
pub const TOP_TIER_FRACTION: f64 = 0.7;
/// Share of the scale maximum needed for [`Tier::Mid`].
pub const MID_TIER_FRACTION: f64 = 0.5;
/// Margin over the runner-up, as a share of the scale maximum, above which
/// the best route is called significantly safer.
pub const SIGNIFICANT_MARGIN_FRACTION: f64 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Top,
    Mid,
    Lower,
}

impl Tier {
    pub fn for_score(score: f64, scale: ScoreScale) -> Tier {
        let f = scale.fraction(score);
        if f >= TOP_TIER_FRACTION {
            Tier::Top
        } else if f >= MID_TIER_FRACTION {
            Tier::Mid
        } else {
            Tier::Lower
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Top => "top tier",
            Tier::Mid => "mid tier",
            Tier::Lower => "lower tier",
        }
    }
}

/// How the best route compares with the runner-up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    SignificantlySafer,
    Comparable,
}

pub struct Ranker {
    scale: ScoreScale,
}

impl Ranker {
    pub fn new(scale: ScoreScale) -> Self {
        Self { scale }
    }

    /// Sort descending by score (stable, so ties keep their input order),
    /// assign ranks `1..=N` and tiers, and put `margin_over_second` on the
    /// first report when there are at least two.
    pub fn rank(&self, mut reports: Vec<SafetyReport>) -> Vec<SafetyReport> {
        reports.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        for (i, report) in reports.iter_mut().enumerate() {
            report.rank = Some(i + 1);
            report.tier = Some(Tier::for_score(report.score, self.scale));
            report.margin_over_second = None;
        }
        if reports.len() >= 2 {
            reports[0].margin_over_second = Some(reports[0].score - reports[1].score);
        }
        reports
    }

    /// Verdict for ranked reports; `None` with fewer than two.
    pub fn verdict(&self, ranked: &[SafetyReport]) -> Option<Verdict> {
        let margin = ranked.first()?.margin_over_second?;
        Some(if margin > SIGNIFICANT_MARGIN_FRACTION * self.scale.max {
            Verdict::SignificantlySafer
        } else {
            Verdict::Comparable
        })
    }
}
