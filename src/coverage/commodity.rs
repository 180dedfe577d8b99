use uuid::Uuid;

use super::YesNo;

/// Resolved outcome of one commodity's three-question sub-flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommodityOutcome {
    /// Excluded: on the list of produce rarely consumed raw.
    RarelyConsumedRaw,
    /// Excluded: grown for personal or on-farm consumption.
    PersonalUse,
    /// Eligible for the commercial-processing exemption (adequate kill step).
    ProcessingExemption,
}

impl CommodityOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            CommodityOutcome::RarelyConsumedRaw => {
                "Produce commodity not covered (rarely consumed raw)"
            }
            CommodityOutcome::PersonalUse => {
                "Produce not covered (personal/on-farm consumption)"
            }
            CommodityOutcome::ProcessingExemption => {
                "Eligible for exemption (commercial processing with an adequate pathogen reduction \u{201c}kill step\u{201d})"
            }
        }
    }

    /// True for the two exclusion outcomes (not the processing exemption).
    pub fn is_excluded(&self) -> bool {
        matches!(
            self,
            CommodityOutcome::RarelyConsumedRaw | CommodityOutcome::PersonalUse
        )
    }
}

/// One produce commodity and its per-commodity sub-flow answers.
#[derive(Debug, Clone)]
pub struct Commodity {
    pub id: Uuid,
    pub name: String,
    pub rarely_consumed_raw: Option<YesNo>,
    pub personal_use: Option<YesNo>,
    pub processing_kill_step: Option<YesNo>,
}

impl Commodity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rarely_consumed_raw: None,
            personal_use: None,
            processing_kill_step: None,
        }
    }

    /// True once all three sub-flow questions are answered.
    pub fn is_complete(&self) -> bool {
        self.rarely_consumed_raw.is_some()
            && self.personal_use.is_some()
            && self.processing_kill_step.is_some()
    }

    /// Resolves this commodity's own outcome, first match wins:
    /// rarely-consumed-raw, then personal use, then the processing kill
    /// step. `None` means the commodity falls through to the top-level
    /// covered/exempt determination.
    pub fn outcome(&self) -> Option<CommodityOutcome> {
        if self.rarely_consumed_raw == Some(YesNo::Yes) {
            return Some(CommodityOutcome::RarelyConsumedRaw);
        }
        if self.personal_use == Some(YesNo::Yes) {
            return Some(CommodityOutcome::PersonalUse);
        }
        if self.processing_kill_step == Some(YesNo::Yes) {
            return Some(CommodityOutcome::ProcessingExemption);
        }
        None
    }

    /// Human-readable justification matching [`Commodity::outcome`].
    pub fn outcome_reason(&self) -> Option<&'static str> {
        self.outcome().map(|outcome| match outcome {
            CommodityOutcome::RarelyConsumedRaw => {
                "This commodity is on the FDA list of produce rarely consumed raw."
            }
            CommodityOutcome::PersonalUse => {
                "This produce is for personal/on-farm consumption."
            }
            CommodityOutcome::ProcessingExemption => {
                "This produce is intended for commercial processing that adequately reduces pathogens (a \u{201c}kill step\u{201d})."
            }
        })
    }
}

/// The three questions of the per-commodity sub-flow, in asking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommodityQuestion {
    RarelyConsumedRaw,
    PersonalUse,
    ProcessingKillStep,
}

impl CommodityQuestion {
    pub fn prompt(&self, commodity_name: &str) -> String {
        match self {
            CommodityQuestion::RarelyConsumedRaw => {
                format!("Is {} rarely consumed raw?", commodity_name)
            }
            CommodityQuestion::PersonalUse => {
                format!("Is {} for personal/on-farm consumption?", commodity_name)
            }
            CommodityQuestion::ProcessingKillStep => {
                format!(
                    "Is {} for commercial processing with a kill step?",
                    commodity_name
                )
            }
        }
    }
}

/// Position inside the repeated per-commodity sub-flow: which commodity, and
/// which of its three questions.
///
/// Modeling the sub-flow as outer index + inner step keeps the boundary
/// transitions (wrapping into the next commodity, backing into the previous
/// one's last question) explicit and testable in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommodityWalk {
    pub index: usize,
    pub question: CommodityQuestion,
}

/// Where a forward step of the walk lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStep {
    /// Still inside the sub-flow.
    Question(CommodityWalk),
    /// Every commodity's third question is answered; resume the top level.
    Done,
}

/// Where a backward step of the walk lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkBack {
    /// Still inside the sub-flow.
    Question(CommodityWalk),
    /// Backed out of the first commodity's first question.
    ListEditor,
}

impl CommodityWalk {
    /// The walk's entry point: first commodity, first question.
    pub fn start() -> Self {
        Self {
            index: 0,
            question: CommodityQuestion::RarelyConsumedRaw,
        }
    }

    /// Advances within the current commodity, or wraps to the next
    /// commodity's first question after the third, or completes after the
    /// last commodity.
    pub fn advance(self, commodity_count: usize) -> WalkStep {
        match self.question {
            CommodityQuestion::RarelyConsumedRaw => WalkStep::Question(CommodityWalk {
                index: self.index,
                question: CommodityQuestion::PersonalUse,
            }),
            CommodityQuestion::PersonalUse => WalkStep::Question(CommodityWalk {
                index: self.index,
                question: CommodityQuestion::ProcessingKillStep,
            }),
            CommodityQuestion::ProcessingKillStep => {
                if self.index + 1 < commodity_count {
                    WalkStep::Question(CommodityWalk {
                        index: self.index + 1,
                        question: CommodityQuestion::RarelyConsumedRaw,
                    })
                } else {
                    WalkStep::Done
                }
            }
        }
    }

    /// Steps backward within the current commodity, or across the boundary
    /// into the previous commodity's third question, or out to the
    /// commodity-list editor from the very first question.
    pub fn back(self) -> WalkBack {
        match self.question {
            CommodityQuestion::RarelyConsumedRaw => {
                if self.index == 0 {
                    WalkBack::ListEditor
                } else {
                    WalkBack::Question(CommodityWalk {
                        index: self.index - 1,
                        question: CommodityQuestion::ProcessingKillStep,
                    })
                }
            }
            CommodityQuestion::PersonalUse => WalkBack::Question(CommodityWalk {
                index: self.index,
                question: CommodityQuestion::RarelyConsumedRaw,
            }),
            CommodityQuestion::ProcessingKillStep => WalkBack::Question(CommodityWalk {
                index: self.index,
                question: CommodityQuestion::PersonalUse,
            }),
        }
    }
}
