//! Prompt templates for character analysis and theme suggestions.
//!
//! Everything here is pure string construction: deterministic for a given
//! input, no I/O, no failure modes.

/// The 28 admissible tragic-flaw labels: the deficiency and excess of each
/// of fourteen virtues.
pub const FLAW_LABELS: [&str; 28] = [
    "Courage deficiency",
    "Courage excess",
    "Temperance deficiency",
    "Temperance excess",
    "Liberality deficiency",
    "Liberality excess",
    "Magnificence deficiency",
    "Magnificence excess",
    "Magnanimity deficiency",
    "Magnanimity excess",
    "Ambition deficiency",
    "Ambition excess",
    "Patience deficiency",
    "Patience excess",
    "Truthfulness deficiency",
    "Truthfulness excess",
    "Wittiness deficiency",
    "Wittiness excess",
    "Friendliness deficiency",
    "Friendliness excess",
    "Theoretical Wisdom deficiency",
    "Theoretical Wisdom excess",
    "Intuition deficiency",
    "Intuition excess",
    "Episteme deficiency",
    "Episteme excess",
    "Techne deficiency",
    "Techne excess",
];

/// System instruction for analyses: persona plus the exact JSON shape.
pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an expert in Aristotelian philosophy and character analysis. You examine fictional and historical characters through Aristotelian concepts such as hamartia (tragic flaw), phronesis (practical wisdom) and telos (purpose or end goal).

Respond with valid JSON in exactly this structure:
{
  "characterName": "string",
  "hamartia": "string",
  "context": "string",
  "phronesisLevel": "string",
  "phronesisTrajectory": "string",
  "telos": "string",
  "universe": "string",
  "greatestWin": "string",
  "greatestDefeat": "string",
  "tags": ["string1", "string2", "string3"]
}

REQUIREMENTS:
- Every field is mandatory, including "tags"
- "tags" holds 3-5 categorization tags
- Match the format, length and style of the example in the user message
- Be specific, insightful and philosophically grounded"#;

const FEW_SHOT_EXAMPLES: &str = r#"{
  "characterName": "Macbeth",
  "hamartia": "Ambition excess",
  "context": "Kingship (basileia)",
  "phronesisLevel": "High",
  "phronesisTrajectory": "Decreasing",
  "telos": "To seize and keep the crown of Scotland that the witches promised him.",
  "universe": "Shakespeare's Macbeth",
  "greatestWin": "Macbeth wins glory on the battlefield by defeating the rebel Macdonwald and the invading Norwegians. King Duncan rewards him with the title of Thane of Cawdor. His valor makes him the most celebrated soldier in Scotland.",
  "greatestDefeat": "His unchecked ambition drives him to murder Duncan and then everyone who threatens his stolen throne. Each killing isolates him further until his wife is dead and his thanes have deserted him. He dies at Macduff's hand, a tyrant with nothing left to rule.",
  "tags": ["Literature", "Tragedy", "Shakespeare"]
}

{
  "characterName": "Achilles",
  "hamartia": "Patience deficiency",
  "context": "War (polemos)",
  "phronesisLevel": "Medium",
  "phronesisTrajectory": "Constant",
  "telos": "Undying glory (kleos) earned on the battlefield, even at the cost of a short life.",
  "universe": "Greek Mythology (Homer's Iliad)",
  "greatestWin": "Achilles kills Hector in single combat before the walls of Troy. The victory avenges Patroclus and turns the tide of the war. It confirms him as the greatest warrior of the Greeks.",
  "greatestDefeat": "Enraged by Agamemnon's insult, he withdraws from the fighting and lets the Greeks be slaughtered. His wrath outlives its cause when he desecrates Hector's body. The excess stains the honor he fought to win.",
  "tags": ["Mythology", "Tragedy", "War"]
}"#;

/// Build the user prompt asking for an analysis of `name`.
///
/// # Examples
///
/// ```
/// use hamartia_analysis::{build_analysis_prompt, FLAW_LABELS};
///
/// let prompt = build_analysis_prompt("Hamlet");
/// assert!(prompt.contains("\"Hamlet\""));
/// assert!(FLAW_LABELS.iter().all(|label| prompt.contains(label)));
/// assert_eq!(prompt, build_analysis_prompt("Hamlet"));
/// ```
pub fn build_analysis_prompt(name: &str) -> String {
    let labels = FLAW_LABELS
        .iter()
        .map(|label| format!("- {}", label))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Analyze the character "{name}" through an Aristotelian philosophical lens. Provide:

1. **Hamartia** (tragic flaw): the fundamental flaw or error in judgment.
   It MUST be the deficiency or excess of one of fourteen virtues, so exactly one of these 28 labels:
{labels}
2. **Context**: the situation where the flaw causes the most harm, at most two words followed by a Greek term transliterated into the Latin alphabet.
3. **Phronesis Level**: practical wisdom in one word (low/medium/high).
4. **Phronesis Trajectory**: how that wisdom changes, in one word (increasing/decreasing/constant).
5. **Telos**: their ultimate purpose or what they strive toward, in one sentence.
6. **Universe**: the story world, franchise or historical setting they come from (e.g. "Marvel Universe", "Game of Thrones", "World War 2").
7. **Greatest Win**: a specific victory where their traits served them well, in about three sentences.
8. **Greatest Defeat**: a specific failure caused by their hamartia, in about three sentences.
9. **Tags**: 3-5 categorization tags (e.g. anime, literature, history, science). MANDATORY.

Example responses:

{examples}

Be specific and insightful. Show how the hamartia manifests in the context and how it shapes both the greatest triumph and the downfall.

Follow the examples exactly in structure, length and style: a flaw label from the list, a short context, a one-sentence telos and three sentences each for greatestWin and greatestDefeat.

Return only the JSON object."#,
        name = name,
        labels = labels,
        examples = FEW_SHOT_EXAMPLES,
    )
}

/// System instruction for theme suggestions.
pub const SUGGESTION_SYSTEM_PROMPT: &str = "You are an expert in literature, history and mythology. Suggest characters that reward Aristotelian character analysis.";

/// Build the user prompt asking for `count` characters related to `theme`.
///
/// # Examples
///
/// ```
/// use hamartia_analysis::build_suggestion_prompt;
///
/// let prompt = build_suggestion_prompt("tragic heroes", 3);
/// assert!(prompt.starts_with("Suggest 3 "));
/// assert!(prompt.contains("\"tragic heroes\""));
/// ```
pub fn build_suggestion_prompt(theme: &str, count: usize) -> String {
    format!(
        "Suggest {count} interesting characters related to the theme \"{theme}\" that would be excellent for Aristotelian character analysis (hamartia, phronesis, telos). Include a mix of fictional and historical figures. Return only the character names, one per line."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flaw_labels_pair_every_virtue() {
        for pair in FLAW_LABELS.chunks(2) {
            let virtue = pair[0].trim_end_matches(" deficiency");
            assert_eq!(pair[1], format!("{} excess", virtue));
        }
    }

    #[test]
    fn analysis_prompt_embeds_name_verbatim() {
        let prompt = build_analysis_prompt("Tom Hansen from 500 days of Summer");
        assert!(prompt.starts_with(
            "Analyze the character \"Tom Hansen from 500 days of Summer\""
        ));
    }

    #[test]
    fn analysis_prompt_keeps_model_keys() {
        let prompt = build_analysis_prompt("Medea");
        for key in ["characterName", "hamartia", "phronesisLevel", "greatestDefeat", "tags"] {
            assert!(prompt.contains(key), "missing {}", key);
            assert!(ANALYSIS_SYSTEM_PROMPT.contains(key), "missing {}", key);
        }
    }

    #[test]
    fn few_shot_examples_are_valid_json() {
        for block in FEW_SHOT_EXAMPLES.split("\n\n") {
            let value: serde_json::Value = serde_json::from_str(block).unwrap();
            let flaw = value["hamartia"].as_str().unwrap();
            assert!(FLAW_LABELS.contains(&flaw));
        }
    }
}
