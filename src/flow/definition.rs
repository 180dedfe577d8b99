use ahash::AHashMap;
use itertools::Either;

/// Accumulated question answers, keyed by question node id.
pub type AnswerMap = AHashMap<String, String>;

/// Accumulated boolean side-channel markers (e.g. "provisional").
pub type FlagMap = AHashMap<String, bool>;

/// The complete, canonical definition of a decision flow, ready to drive a
/// session. This is the target structure for any custom document conversion.
#[derive(Debug, Clone, Default)]
pub struct FlowDefinition {
    /// Id of the node a fresh session starts on.
    pub start: String,
    /// Display-only step count for "Step x of y" progress rendering.
    pub total_steps: Option<u32>,
    /// Ordered question ids controlling summary rendering order.
    pub summary_order: Vec<String>,
    /// Terminal outcome definitions, keyed by result key.
    pub results: AHashMap<String, ResultDefinition>,
    /// All nodes of the flow, keyed by node id.
    pub nodes: AHashMap<String, FlowNode>,
}

impl FlowDefinition {
    /// Pure node lookup. An absent id on a validated flow is a configuration
    /// error in the caller, not a normal outcome.
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.get(id)
    }

    /// Looks up the terminal outcome definition for a result key.
    pub fn result(&self, key: &str) -> Option<&ResultDefinition> {
        self.results.get(key)
    }
}

/// Display content for one terminal classification.
#[derive(Debug, Clone)]
pub struct ResultDefinition {
    pub label: String,
    pub summary: String,
    /// Display hint only; never consulted for control flow.
    pub tone: Tone,
    pub reminder_title: Option<String>,
    pub reminder_items: Vec<String>,
}

/// Visual tone of a result banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Informational,
    Important,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Informational => "informational",
            Tone::Important => "important",
        }
    }
}

/// One step of the flow.
///
/// The four variants cover every interaction template the engine knows how to
/// present; matching on this enum is exhaustive by construction.
#[derive(Debug, Clone)]
pub enum FlowNode {
    Intro(IntroNode),
    Question(QuestionNode),
    Helper(HelperNode),
    Result(ResultNode),
}

impl FlowNode {
    pub fn id(&self) -> &str {
        match self {
            FlowNode::Intro(node) => &node.id,
            FlowNode::Question(node) => &node.id,
            FlowNode::Helper(node) => &node.id,
            FlowNode::Result(node) => &node.id,
        }
    }

    /// Progress step number, where the node declares one.
    pub fn step(&self) -> Option<u32> {
        match self {
            FlowNode::Intro(_) | FlowNode::Result(_) => None,
            FlowNode::Question(node) => node.step,
            FlowNode::Helper(node) => node.step,
        }
    }

    /// Ordered iteration over the node ids this node can navigate to.
    ///
    /// Result nodes are terminal and offer nothing. This drives both
    /// load-time reference validation and the runtime offered-edge check.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        match self {
            FlowNode::Intro(node) => {
                Either::Left(Either::Left(node.actions.iter().map(|a| a.next.as_str())))
            }
            FlowNode::Question(node) => {
                Either::Left(Either::Right(node.options.iter().map(|o| o.next.as_str())))
            }
            FlowNode::Helper(node) => {
                Either::Right(Either::Left(node.actions.iter().map(|a| a.next.as_str())))
            }
            FlowNode::Result(_) => Either::Right(Either::Right(std::iter::empty())),
        }
    }
}

/// Opening slide: title, body paragraphs, and plain navigation actions.
#[derive(Debug, Clone)]
pub struct IntroNode {
    pub id: String,
    pub title: String,
    pub body: Vec<String>,
    pub actions: Vec<NodeAction>,
}

/// A plain navigation action carried by intro nodes.
#[derive(Debug, Clone)]
pub struct NodeAction {
    pub id: String,
    pub label: String,
    pub next: String,
}

/// A single- or multi-paragraph question prompt.
#[derive(Debug, Clone)]
pub enum Prompt {
    Line(String),
    Lines(Vec<String>),
}

impl Prompt {
    /// Iterates the prompt paragraphs in order, regardless of arity.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        match self {
            Prompt::Line(line) => Either::Left(std::iter::once(line.as_str())),
            Prompt::Lines(lines) => Either::Right(lines.iter().map(String::as_str)),
        }
    }
}

/// A question slide. Selecting an option records the answer; navigation is a
/// separate, explicit advance using the selected option's `next`.
#[derive(Debug, Clone)]
pub struct QuestionNode {
    pub id: String,
    pub step: Option<u32>,
    pub title: String,
    pub prompt: Prompt,
    pub helper_text: Option<String>,
    pub options: Vec<QuestionOption>,
}

impl QuestionNode {
    /// Finds the option whose recorded value equals `value`.
    pub fn option_for_value(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// One selectable answer on a question node.
#[derive(Debug, Clone)]
pub struct QuestionOption {
    pub label: String,
    pub value: String,
    pub next: String,
}

/// Informational interstitial. Its actions can navigate and simultaneously
/// merge partial answers/flags into the session (the "not sure, continue
/// anyway" pattern).
#[derive(Debug, Clone)]
pub struct HelperNode {
    pub id: String,
    pub step: Option<u32>,
    pub title: String,
    pub body: Vec<String>,
    pub actions: Vec<HelperAction>,
}

impl HelperNode {
    pub fn action(&self, action_id: &str) -> Option<&HelperAction> {
        self.actions.iter().find(|action| action.id == action_id)
    }
}

/// A helper-slide action: navigation plus an optional state patch.
#[derive(Debug, Clone)]
pub struct HelperAction {
    pub id: String,
    pub label: String,
    pub next: String,
    pub set_answers: AnswerMap,
    pub set_flags: FlagMap,
}

/// A terminal node referencing its outcome by result key.
#[derive(Debug, Clone)]
pub struct ResultNode {
    pub id: String,
    pub result_key: String,
}
