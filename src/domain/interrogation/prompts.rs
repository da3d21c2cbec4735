//! Prompt templates for LLM-backed game masters.

use crate::domain::game::{Scenario, Suspect, SuspicionScore};

/// Scenario writing is planned, not improvised.
pub const SCENARIO_TEMPERATURE: f32 = 0.0;

/// Suspects get some room to improvise.
pub const SUSPECT_TEMPERATURE: f32 = 0.7;

pub const SCORER_TEMPERATURE: f32 = 0.7;

pub const SCENARIO_MAX_TOKENS: u32 = 2048;
pub const SUSPECT_MAX_TOKENS: u32 = 400;
pub const SCORER_MAX_TOKENS: u32 = 16;

const SCENARIO_SYSTEM_PROMPT: &str = concat!(
    "You are generating a grounded detective interrogation case for a web game. ",
    "Output STRICT JSON ONLY (no markdown, no commentary). Schema:\n",
    "{\n",
    "  \"summary\": string,\n",
    "  \"details\": {\n",
    "    \"crime\": string,\n",
    "    \"location\": string,\n",
    "    \"time_window\": string,\n",
    "    \"clues\": [string, ...]\n",
    "  },\n",
    "  \"suspects\": [\n",
    "    { \"id\": 's1', \"name\": string, \"occupation\": string, \"bio\": string, \"alibi\": string, \"role\": 'suspect'|'criminal' }\n",
    "  ],\n",
    "  \"criminal_id\": 'sX'\n",
    "}\n",
    "Choose one suspect as the criminal. Keep facts consistent and plausible."
);

const SCORER_SYSTEM_PROMPT: &str = concat!(
    "You are scoring interrogation answers for suspicion. ",
    "Return ONLY a single float delta in the range [-0.5, 0.8] based on whether the answer increases suspicion. ",
    "Small values are preferred; 0.0 if neutral."
);

pub fn scenario_system_prompt() -> &'static str {
    SCENARIO_SYSTEM_PROMPT
}

pub fn scenario_user_prompt(num_suspects: usize) -> String {
    format!(
        "Create a case with {} suspects. \
         Avoid randomness; use consistent narrative and realistic names/occupations. \
         Keep bios 1-2 sentences, alibis 1 sentence. Clues should be concrete and checkable.",
        num_suspects
    )
}

/// System prompt that puts the model in a suspect's shoes.
///
/// The criminal is told to deflect, everyone else to cooperate.
pub fn suspect_system_prompt(scenario: &Scenario, suspect: &Suspect) -> String {
    let details = serde_json::to_string(&scenario.details).unwrap_or_default();
    let stance = if suspect.is_criminal() {
        "As the criminal, be evasive, plausible, and deflect; avoid obvious contradictions."
    } else {
        "As an innocent suspect, be cooperative and consistent."
    };

    format!(
        "You are role-playing as a suspect in an interrogation game. \
         Stay in character, use first person, and defend yourself. \
         Do NOT confess unless the evidence is overwhelming and directly proves guilt. \
         Keep responses concise (2-5 sentences). \
         Your name is {name}. Persona: {bio}. Alibi: {alibi}. \
         Case: {summary}. Relevant facts: {details}. {stance}",
        name = suspect.display_name(),
        bio = suspect.bio,
        alibi = suspect.alibi,
        summary = scenario.summary,
        details = details,
        stance = stance,
    )
}

pub fn scorer_system_prompt() -> &'static str {
    SCORER_SYSTEM_PROMPT
}

pub fn scorer_user_prompt(
    scenario: &Scenario,
    suspect: &Suspect,
    question: &str,
    answer: &str,
    current: SuspicionScore,
) -> String {
    format!(
        "Question: {}\nAnswer: {}\nSuspect persona: {}\nScenario summary: {}\nCurrent suspicion: {}",
        question, answer, suspect.bio, scenario.summary, current
    )
}
