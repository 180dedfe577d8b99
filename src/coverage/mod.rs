//! The produce-safety coverage checker: the per-commodity sub-flow and the
//! top-level classification rule chain.
//!
//! This module is the single source of truth for the classification itself.
//! The declarative flow (and its reason table) only displays outcomes; the
//! rule chain here computes them.

mod commodity;
mod wizard;

pub use commodity::{
    Commodity, CommodityOutcome, CommodityQuestion, CommodityWalk, WalkBack, WalkStep,
};
pub use wizard::{CoverageWizard, WizardStep};

/// A plain yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(YesNo::Yes),
            "no" => Some(YesNo::No),
            _ => None,
        }
    }
}

/// Answer to the qualified-exemption test, which admits "not sure".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExemptionAnswer {
    Yes,
    No,
    NotSure,
}

impl ExemptionAnswer {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExemptionAnswer::Yes => "yes",
            ExemptionAnswer::No => "no",
            ExemptionAnswer::NotSure => "not_sure",
        }
    }
}

/// Terminal classification of the farm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not covered: the farm threshold or all-commodities-excluded rule.
    NotCoveredFarm,
    /// Not covered: the produce sales threshold.
    NotCoveredSales,
    /// Eligible for the commercial-processing exemption.
    ProcessingExemption,
    /// Eligible for a qualified exemption.
    QualifiedExemption,
    /// Covered by the rule.
    Covered,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::NotCoveredFarm | Outcome::NotCoveredSales => {
                "Not covered by the Produce Safety Rule"
            }
            Outcome::ProcessingExemption => {
                "Eligible for exemption (commercial processing with an adequate pathogen reduction \u{201c}kill step\u{201d})"
            }
            Outcome::QualifiedExemption => {
                "Eligible for a qualified exemption (must comply with modified requirements + documentation)"
            }
            Outcome::Covered => {
                "Covered by the Produce Safety Rule (\u{201c}YOU ARE COVERED BY THIS RULE.\u{201d})"
            }
        }
    }
}

/// A resolved classification with its justification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Determination {
    pub outcome: Outcome,
    pub reason: String,
    /// Set when the covered outcome was reached through the "not sure,
    /// continue anyway" escape hatch.
    pub provisional: bool,
}

/// The accumulated answers of one coverage check.
#[derive(Debug, Clone, Default)]
pub struct CoverageCheck {
    /// Does the farm grow, harvest, pack, or hold produce?
    pub q1: Option<YesNo>,
    /// Are average annual produce sales $25,000 or less (3-year average)?
    pub q2: Option<YesNo>,
    /// The commodities under review, in user-editable order.
    pub commodities: Vec<Commodity>,
    /// The qualified-exemption test.
    pub q6: Option<ExemptionAnswer>,
    /// "Not sure" on q6 followed by an explicit continue-anyway.
    pub provisional: bool,
}

impl CoverageCheck {
    /// A fresh check seeded with one unnamed commodity, matching how the
    /// list editor starts out.
    pub fn new() -> Self {
        Self {
            commodities: vec![Commodity::new("Produce item")],
            ..Self::default()
        }
    }

    /// True when every commodity resolves to one of the two exclusions.
    fn all_commodities_excluded(&self) -> bool {
        self.commodities
            .iter()
            .all(|commodity| commodity.outcome().is_some_and(|o| o.is_excluded()))
    }

    /// True when every commodity is excluded or processing-exempt.
    fn all_excluded_or_processing(&self) -> bool {
        self.commodities
            .iter()
            .all(|commodity| commodity.outcome().is_some())
    }

    /// True when at least one commodity is processing-exempt.
    fn has_processing_exemption(&self) -> bool {
        self.commodities
            .iter()
            .any(|commodity| commodity.outcome() == Some(CommodityOutcome::ProcessingExemption))
    }

    /// Evaluates the top-level rule chain.
    ///
    /// The guards are order-sensitive and must be evaluated exactly in this
    /// sequence: they are not independently exhaustive (the two
    /// all-commodities rules differ only in the processing-exempt
    /// predicate). Returns `None` while required answers are missing, which
    /// the presentation layer shows as an incomplete result.
    pub fn determination(&self) -> Option<Determination> {
        if self.q1 == Some(YesNo::No) {
            return Some(Determination {
                outcome: Outcome::NotCoveredFarm,
                reason: "Your farm does not grow, harvest, pack, or hold produce.".to_string(),
                provisional: false,
            });
        }
        if self.q1 == Some(YesNo::Yes) && self.q2 == Some(YesNo::Yes) {
            return Some(Determination {
                outcome: Outcome::NotCoveredSales,
                reason: "Your average annual produce sales are $25,000 or less.".to_string(),
                provisional: false,
            });
        }
        if self.q1 == Some(YesNo::Yes)
            && self.q2 == Some(YesNo::No)
            && self.all_excluded_or_processing()
            && self.has_processing_exemption()
        {
            return Some(Determination {
                outcome: Outcome::ProcessingExemption,
                reason: "All commodities are either excluded or intended for commercial processing with an adequate kill step."
                    .to_string(),
                provisional: false,
            });
        }
        if self.q1 == Some(YesNo::Yes)
            && self.q2 == Some(YesNo::No)
            && self.all_commodities_excluded()
        {
            return Some(Determination {
                outcome: Outcome::NotCoveredFarm,
                reason: "All commodities are excluded (rarely consumed raw or personal/on-farm consumption)."
                    .to_string(),
                provisional: false,
            });
        }
        if self.q6 == Some(ExemptionAnswer::Yes) {
            return Some(Determination {
                outcome: Outcome::QualifiedExemption,
                reason: "Your farm reports less than $500,000 in annual food sales and a majority of sales directly to qualified end-users."
                    .to_string(),
                provisional: false,
            });
        }
        if self.q6 == Some(ExemptionAnswer::No)
            || (self.q6 == Some(ExemptionAnswer::NotSure) && self.provisional)
        {
            let reason = if self.provisional {
                "Provisional result based on a \u{201c}not sure\u{201d} response to the qualified exemption test."
            } else {
                "You did not meet the qualified exemption test based on the information provided."
            };
            return Some(Determination {
                outcome: Outcome::Covered,
                reason: reason.to_string(),
                provisional: self.provisional,
            });
        }
        None
    }
}
