//! Prompt templates for the debate flow

/// Templates for generating prompts at each decision point
pub struct PromptTemplate;

impl PromptTemplate {
    /// Speaker selection prompt.
    ///
    /// `definitions` holds one `name: description` line per agent;
    /// `history` is the rendered transcript.
    pub fn speaker_selection(definitions: &str, history: &str) -> String {
        format!(
            r#"You are the next speaker selector.

- You MUST return ONLY agent name from the list of available agents below.
- You MUST return the agent name and nothing else.
- The agent names are case-sensitive and should not be abbreviated or changed.
- Check the history, and decide WHAT agent is the best next speaker
- You MUST call CRITIC agent to evaluate WRITER RESPONSE
- YOU MUST OBSERVE AGENT USAGE INSTRUCTIONS.

# AVAILABLE AGENTS

{}

# CHAT HISTORY

{}
"#,
            definitions, history
        )
    }

    /// Score extraction prompt applied to a critique
    pub fn score_extraction(evaluation: &str) -> String {
        format!(
            r#"You are a data extraction assistant.
Check the provided evaluation and return the evaluation score.
It MUST be a single number only, for example - for 6/10 return 6.

{}"#,
            evaluation
        )
    }

    /// Status summary prompt: predicts the next step from the turns so far
    pub fn next_action(transcript: &str) -> String {
        format!(
            r#"You are observing a debate between agents that refine a response.
Based on the conversation below, describe the next step in ONE short sentence.
Start with the name of the agent that acts next in upper case, followed by a colon.
For example: "CRITIC: Evaluates the revised draft".
Return the sentence only.

# CONVERSATION

{}"#,
            transcript
        )
    }

    /// Status emitted before the first turn
    pub fn initial_status(producer: &str) -> String {
        format!("{}: Prepares the initial draft", producer.to_uppercase())
    }
}
