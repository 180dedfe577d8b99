use super::commodity::{Commodity, CommodityQuestion, CommodityWalk, WalkBack, WalkStep};
use super::{CoverageCheck, Determination, ExemptionAnswer, YesNo};

/// The coverage checker's step cursor.
///
/// The per-commodity portion carries its own nested walk position instead of
/// flattening every commodity question into the enum, so the sub-flow
/// boundaries stay structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Intro,
    Q1,
    Q2,
    /// The user-editable commodity list.
    Commodities,
    CommodityQuestion(CommodityWalk),
    QualifiedExemption,
    NotSureHelper,
    Result,
}

impl WizardStep {
    /// 1-based position in the fixed ten-step progress display.
    pub fn step_number(&self) -> u32 {
        match self {
            WizardStep::Intro => 1,
            WizardStep::Q1 => 2,
            WizardStep::Q2 => 3,
            WizardStep::Commodities => 4,
            WizardStep::CommodityQuestion(walk) => match walk.question {
                CommodityQuestion::RarelyConsumedRaw => 5,
                CommodityQuestion::PersonalUse => 6,
                CommodityQuestion::ProcessingKillStep => 7,
            },
            WizardStep::QualifiedExemption => 8,
            WizardStep::NotSureHelper => 9,
            WizardStep::Result => 10,
        }
    }

    pub const TOTAL: u32 = 10;
}

/// Drives a [`CoverageCheck`] through the fixed question sequence with a
/// step cursor: forward skips branches that are already decided, back walks
/// the same path in reverse, including across commodity boundaries.
#[derive(Debug, Clone)]
pub struct CoverageWizard {
    step: WizardStep,
    check: CoverageCheck,
}

impl Default for CoverageWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Intro,
            check: CoverageCheck::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn check(&self) -> &CoverageCheck {
        &self.check
    }

    /// The commodity the walk is currently on, if inside the sub-flow.
    pub fn active_commodity(&self) -> Option<&Commodity> {
        match self.step {
            WizardStep::CommodityQuestion(walk) => self.check.commodities.get(walk.index),
            _ => None,
        }
    }

    /// Resolves the final classification once enough answers are present.
    pub fn determination(&self) -> Option<Determination> {
        self.check.determination()
    }

    pub fn set_q1(&mut self, answer: YesNo) {
        self.check.q1 = Some(answer);
    }

    pub fn set_q2(&mut self, answer: YesNo) {
        self.check.q2 = Some(answer);
    }

    pub fn set_q6(&mut self, answer: ExemptionAnswer) {
        self.check.q6 = Some(answer);
    }

    pub fn add_commodity(&mut self, name: impl Into<String>) {
        self.check.commodities.push(Commodity::new(name));
    }

    pub fn rename_commodity(&mut self, index: usize, name: impl Into<String>) {
        if let Some(commodity) = self.check.commodities.get_mut(index) {
            commodity.name = name.into();
        }
    }

    /// Answers the sub-flow question the walk is currently on.
    pub fn answer_commodity_question(&mut self, answer: YesNo) {
        let WizardStep::CommodityQuestion(walk) = self.step else {
            return;
        };
        let Some(commodity) = self.check.commodities.get_mut(walk.index) else {
            return;
        };
        match walk.question {
            CommodityQuestion::RarelyConsumedRaw => commodity.rarely_consumed_raw = Some(answer),
            CommodityQuestion::PersonalUse => commodity.personal_use = Some(answer),
            CommodityQuestion::ProcessingKillStep => {
                commodity.processing_kill_step = Some(answer)
            }
        }
    }

    /// Whether the forward control should be enabled on the current step.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Intro | WizardStep::Commodities => true,
            WizardStep::Q1 => self.check.q1.is_some(),
            WizardStep::Q2 => self.check.q2.is_some(),
            WizardStep::CommodityQuestion(walk) => {
                let Some(commodity) = self.check.commodities.get(walk.index) else {
                    return false;
                };
                match walk.question {
                    CommodityQuestion::RarelyConsumedRaw => {
                        commodity.rarely_consumed_raw.is_some()
                    }
                    CommodityQuestion::PersonalUse => commodity.personal_use.is_some(),
                    CommodityQuestion::ProcessingKillStep => {
                        commodity.processing_kill_step.is_some()
                    }
                }
            }
            WizardStep::QualifiedExemption => self.check.q6.is_some(),
            WizardStep::NotSureHelper => true,
            WizardStep::Result => false,
        }
    }

    /// Moves the cursor forward, short-circuiting to the result as soon as a
    /// rule has already decided the classification.
    pub fn next(&mut self) {
        let next = match self.step {
            WizardStep::Intro => WizardStep::Q1,
            WizardStep::Q1 => {
                if self.check.q1 == Some(YesNo::No) {
                    WizardStep::Result
                } else {
                    WizardStep::Q2
                }
            }
            WizardStep::Q2 => {
                if self.check.q2 == Some(YesNo::Yes) {
                    WizardStep::Result
                } else {
                    WizardStep::Commodities
                }
            }
            WizardStep::Commodities => WizardStep::CommodityQuestion(CommodityWalk::start()),
            WizardStep::CommodityQuestion(walk) => {
                match walk.advance(self.check.commodities.len()) {
                    WalkStep::Question(next_walk) => WizardStep::CommodityQuestion(next_walk),
                    WalkStep::Done => WizardStep::QualifiedExemption,
                }
            }
            WizardStep::QualifiedExemption => {
                if self.check.q6 == Some(ExemptionAnswer::NotSure) {
                    WizardStep::NotSureHelper
                } else {
                    WizardStep::Result
                }
            }
            WizardStep::NotSureHelper => WizardStep::Result,
            WizardStep::Result => WizardStep::Result,
        };
        self.step = next;
    }

    /// The helper's explicit escape hatch: mark the eventual result
    /// provisional and jump to it.
    pub fn continue_anyway(&mut self) {
        self.check.provisional = true;
        self.step = WizardStep::Result;
    }

    /// The helper's other action: return to the exemption question.
    pub fn answer_instead(&mut self) {
        self.step = WizardStep::QualifiedExemption;
    }

    /// Moves the cursor backward along the path that led here.
    pub fn back(&mut self) {
        let previous = match self.step {
            WizardStep::Intro => WizardStep::Intro,
            WizardStep::Q1 => WizardStep::Intro,
            WizardStep::Q2 => WizardStep::Q1,
            WizardStep::Commodities => WizardStep::Q2,
            WizardStep::CommodityQuestion(walk) => match walk.back() {
                WalkBack::Question(previous_walk) => {
                    WizardStep::CommodityQuestion(previous_walk)
                }
                WalkBack::ListEditor => WizardStep::Commodities,
            },
            WizardStep::QualifiedExemption => {
                match self.check.commodities.len().checked_sub(1) {
                    Some(last) => WizardStep::CommodityQuestion(CommodityWalk {
                        index: last,
                        question: CommodityQuestion::ProcessingKillStep,
                    }),
                    None => WizardStep::Commodities,
                }
            }
            WizardStep::NotSureHelper => WizardStep::QualifiedExemption,
            WizardStep::Result => match self.check.q6 {
                Some(ExemptionAnswer::NotSure) => WizardStep::NotSureHelper,
                Some(_) => WizardStep::QualifiedExemption,
                None => WizardStep::Q1,
            },
        };
        self.step = previous;
    }

    /// Clears every answer and returns to the opening step.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
