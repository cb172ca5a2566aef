//! Quick-prompt trigger table and the instructional prompt template.
//!
//! The chat page ships a handful of preset buttons whose labels arrive as
//! ordinary messages. A label that matches an entry here is rewritten to a
//! fuller prompt before it reaches the model; anything else passes through
//! untouched.

/// Which set of quick-prompt triggers is active. Selected once at startup
/// via `QUICK_PROMPT_SET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptSet {
    #[default]
    Classic,
    Cheerful,
}

const CLASSIC: &[(&str, &str)] = &[
    ("Tell me a joke", "Tell me a funny joke."),
    ("Today's Quote", "Share an inspirational quote."),
    ("Getting Bored", "Tell me something fun or a random fact."),
    (
        "I want Recommendation",
        "Give me a cool recommendation to try today.",
    ),
];

const CHEERFUL: &[(&str, &str)] = &[
    ("Cheer me up!", "Tell me a funny joke!"),
    (
        "What's new today?",
        "Give me a quick update on current events or interesting facts.",
    ),
    ("Got any fun facts?", "Tell me a cool and random fun fact."),
    (
        "Help me decide...",
        "I need a recommendation for something cool.",
    ),
];

impl PromptSet {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::Classic),
            "cheerful" => Some(Self::Cheerful),
            _ => None,
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Classic => CLASSIC,
            Self::Cheerful => CHEERFUL,
        }
    }

    /// Exact-match lookup on the trimmed message; misses pass through as-is.
    pub fn expand<'a>(self, message: &'a str) -> &'a str {
        self.table()
            .iter()
            .find(|(trigger, _)| *trigger == message)
            .map(|(_, expanded)| *expanded)
            .unwrap_or(message)
    }
}

/// Wraps the subject in the fixed instructional template sent to the model.
pub fn compose_prompt(subject: &str) -> String {
    format!(
        "Respond concisely in markdown format:\n\
         - Use **bold** for key terms.\n\
         - Keep it short.\n\
         **User query:** {subject}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_trigger_is_expanded() {
        assert_eq!(
            PromptSet::Classic.expand("Tell me a joke"),
            "Tell me a funny joke."
        );
    }

    #[test]
    fn cheerful_trigger_is_expanded() {
        assert_eq!(
            PromptSet::Cheerful.expand("Cheer me up!"),
            "Tell me a funny joke!"
        );
    }

    #[test]
    fn non_trigger_passes_through() {
        assert_eq!(
            PromptSet::Classic.expand("What is the capital of France?"),
            "What is the capital of France?"
        );
    }

    #[test]
    fn triggers_from_the_other_set_pass_through() {
        assert_eq!(PromptSet::Classic.expand("Cheer me up!"), "Cheer me up!");
    }

    #[test]
    fn set_names_parse() {
        assert_eq!(PromptSet::from_name("classic"), Some(PromptSet::Classic));
        assert_eq!(PromptSet::from_name("cheerful"), Some(PromptSet::Cheerful));
        assert_eq!(PromptSet::from_name("bogus"), None);
    }

    #[test]
    fn composed_prompt_contains_subject_and_instructions() {
        let prompt = compose_prompt("Tell me a funny joke.");
        assert!(prompt.contains("**User query:** Tell me a funny joke."));
        assert!(prompt.contains("markdown"));
    }
}
