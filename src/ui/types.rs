use ahash::AHashMap;
use serde::Deserialize;

use crate::error::FlowConversionError;
use crate::flow::{
    AnswerMap, FlagMap, FlowDefinition, FlowNode, HelperAction, HelperNode, IntroNode, IntoFlow,
    NodeAction, Prompt, QuestionNode, QuestionOption, ResultDefinition, ResultNode, Tone,
};

/// Top-level raw flow document, matching the external JSON format.
#[derive(Debug, Deserialize)]
pub struct RawFlowDocument {
    pub start: String,
    #[serde(default)]
    #[serde(alias = "totalSteps")]
    pub total_steps: Option<u32>,
    #[serde(default)]
    #[serde(alias = "summaryOrder")]
    pub summary_order: Vec<String>,
    pub results: AHashMap<String, RawResult>,
    pub nodes: AHashMap<String, RawNode>,
}

/// Raw result definition with display content.
#[derive(Debug, Deserialize)]
pub struct RawResult {
    pub label: String,
    pub summary: String,
    #[serde(default)]
    pub tone: Option<RawTone>,
    #[serde(default)]
    #[serde(alias = "reminderTitle")]
    pub reminder_title: Option<String>,
    #[serde(default)]
    #[serde(alias = "reminderItems")]
    pub reminder_items: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RawTone {
    Neutral,
    Informational,
    Important,
}

/// Raw node, discriminated by its `type` tag. Node ids live on the
/// surrounding map keys, not inside the node objects.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawNode {
    Intro {
        title: String,
        #[serde(default)]
        body: Vec<String>,
        actions: Vec<RawAction>,
    },
    Question {
        #[serde(default)]
        step: Option<u32>,
        title: String,
        prompt: RawPrompt,
        #[serde(default)]
        #[serde(alias = "helperText")]
        helper_text: Option<String>,
        options: Vec<RawOption>,
    },
    Helper {
        #[serde(default)]
        step: Option<u32>,
        title: String,
        #[serde(default)]
        body: Vec<String>,
        actions: Vec<RawHelperAction>,
    },
    Result {
        #[serde(alias = "resultKey")]
        result_key: String,
    },
}

/// A question prompt is either a single string or an ordered list of lines.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawPrompt {
    Line(String),
    Lines(Vec<String>),
}

#[derive(Debug, Deserialize)]
pub struct RawAction {
    pub id: String,
    pub label: String,
    pub next: String,
}

#[derive(Debug, Deserialize)]
pub struct RawOption {
    pub label: String,
    pub value: String,
    pub next: String,
}

#[derive(Debug, Deserialize)]
pub struct RawHelperAction {
    pub id: String,
    pub label: String,
    pub next: String,
    #[serde(default)]
    #[serde(alias = "setAnswers")]
    pub set_answers: AnswerMap,
    #[serde(default)]
    #[serde(alias = "setFlags")]
    pub set_flags: FlagMap,
}

impl IntoFlow for RawFlowDocument {
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
        let results = self
            .results
            .into_iter()
            .map(|(key, raw)| {
                let definition = ResultDefinition {
                    label: raw.label,
                    summary: raw.summary,
                    tone: match raw.tone {
                        Some(RawTone::Informational) => Tone::Informational,
                        Some(RawTone::Important) => Tone::Important,
                        Some(RawTone::Neutral) | None => Tone::Neutral,
                    },
                    reminder_title: raw.reminder_title,
                    reminder_items: raw.reminder_items,
                };
                (key, definition)
            })
            .collect();

        let nodes = self
            .nodes
            .into_iter()
            .map(|(id, raw)| {
                let node = convert_node(id.clone(), raw);
                (id, node)
            })
            .collect();

        Ok(FlowDefinition {
            start: self.start,
            total_steps: self.total_steps,
            summary_order: self.summary_order,
            results,
            nodes,
        })
    }
}

fn convert_node(id: String, raw: RawNode) -> FlowNode {
    match raw {
        RawNode::Intro {
            title,
            body,
            actions,
        } => FlowNode::Intro(IntroNode {
            id,
            title,
            body,
            actions: actions
                .into_iter()
                .map(|a| NodeAction {
                    id: a.id,
                    label: a.label,
                    next: a.next,
                })
                .collect(),
        }),
        RawNode::Question {
            step,
            title,
            prompt,
            helper_text,
            options,
        } => FlowNode::Question(QuestionNode {
            id,
            step,
            title,
            prompt: match prompt {
                RawPrompt::Line(line) => Prompt::Line(line),
                RawPrompt::Lines(lines) => Prompt::Lines(lines),
            },
            helper_text,
            options: options
                .into_iter()
                .map(|o| QuestionOption {
                    label: o.label,
                    value: o.value,
                    next: o.next,
                })
                .collect(),
        }),
        RawNode::Helper {
            step,
            title,
            body,
            actions,
        } => FlowNode::Helper(HelperNode {
            id,
            step,
            title,
            body,
            actions: actions
                .into_iter()
                .map(|a| HelperAction {
                    id: a.id,
                    label: a.label,
                    next: a.next,
                    set_answers: a.set_answers,
                    set_flags: a.set_flags,
                })
                .collect(),
        }),
        RawNode::Result { result_key } => FlowNode::Result(ResultNode { id, result_key }),
    }
}
