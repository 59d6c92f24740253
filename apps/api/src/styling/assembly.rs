//! Prompt Assembly — turns a styling request into an ordered segment list.
//!
//! Layout is fixed for every strategy: the instruction segment first, then
//! zero or more (user example, model example) pairs, then the live request.
//! Assembly is pure; the network call lives in `planner`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm_client::Segment;
use crate::styling::example_bank::{Example, ExampleBank};
use crate::styling::example_selector::select_examples;
use crate::styling::models::StylingRequest;
use crate::styling::prompts::{
    HIDDEN_REASONING_INSTRUCTION, STYLING_CONTEXT_TEMPLATE, STYLIST_DIRECTIVE, TASK_TEMPLATE,
};

/// How the prompt is built around the live request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStrategy {
    ZeroShot,
    OneShot,
    FewShot,
    #[default]
    DynamicFewShot,
    ChainOfThought,
}

impl PromptStrategy {
    pub const ALL: [PromptStrategy; 5] = [
        PromptStrategy::ZeroShot,
        PromptStrategy::OneShot,
        PromptStrategy::FewShot,
        PromptStrategy::DynamicFewShot,
        PromptStrategy::ChainOfThought,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptStrategy::ZeroShot => "zero_shot",
            PromptStrategy::OneShot => "one_shot",
            PromptStrategy::FewShot => "few_shot",
            PromptStrategy::DynamicFewShot => "dynamic_few_shot",
            PromptStrategy::ChainOfThought => "chain_of_thought",
        }
    }
}

impl fmt::Display for PromptStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown prompt strategy '{0}'")]
pub struct UnknownStrategy(pub String);

impl FromStr for PromptStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        PromptStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == normalized)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Result of assembly: the segments plus how many example pairs went in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    pub segments: Vec<Segment>,
    pub example_count: usize,
}

/// Builds the full segment list for `request` under `strategy`.
pub fn assemble_prompt(
    strategy: PromptStrategy,
    bank: &ExampleBank,
    request: &StylingRequest,
) -> AssembledPrompt {
    let examples: Vec<&Example> = match strategy {
        PromptStrategy::ZeroShot | PromptStrategy::ChainOfThought => Vec::new(),
        PromptStrategy::OneShot => bank.first().into_iter().collect(),
        PromptStrategy::FewShot => bank.examples().iter().collect(),
        PromptStrategy::DynamicFewShot => select_examples(bank, request),
    };

    let mut segments = Vec::with_capacity(examples.len() * 2 + 2);
    segments.push(Segment::model(build_instruction(strategy)));
    for example in &examples {
        segments.push(Segment::user(example.user));
        segments.push(Segment::model(example.model));
    }
    segments.push(Segment::user(build_task(request)));

    AssembledPrompt {
        segments,
        example_count: examples.len(),
    }
}

/// Directive text, plus the hidden-reasoning procedure for chain-of-thought.
pub fn build_instruction(strategy: PromptStrategy) -> String {
    match strategy {
        PromptStrategy::ChainOfThought => {
            format!("{STYLIST_DIRECTIVE}{HIDDEN_REASONING_INSTRUCTION}")
        }
        _ => STYLIST_DIRECTIVE.to_string(),
    }
}

/// Catalog and pricing block with the wardrobe interpolated.
pub fn build_styling_context(wardrobe: &str) -> String {
    fill_template(STYLING_CONTEXT_TEMPLATE, &[("wardrobe", wardrobe)])
}

/// The final user segment describing the live request.
pub fn build_task(request: &StylingRequest) -> String {
    let gender = request.gender_text();
    let occasion = request.occasion_text();
    let budget = request.budget_text();
    let preferences = request.preferences_text();
    let styling_context = build_styling_context(&request.wardrobe_text());

    fill_template(
        TASK_TEMPLATE,
        &[
            ("gender", gender.as_str()),
            ("occasion", occasion.as_str()),
            ("budget", budget.as_str()),
            ("preferences", preferences.as_str()),
            ("styling_context", styling_context.as_str()),
        ],
    )
}

/// Replaces `{key}` markers in a single pass, so values that happen to
/// contain a marker are inserted verbatim rather than expanded.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let replaced = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, end))
        });

        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
