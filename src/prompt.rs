/// Template the gallery was originally illustrated with.
pub const DEFAULT_TEMPLATE: &str = "Create a dreamy watercolor illustration of {name}, a fantastical city: {summary}. Ethereal, mystical, architectural fantasy in soft watercolors.";

/// Text up to the first `.`, trimmed. Text without a period is used whole.
pub fn first_sentence(text: &str) -> &str {
    text.split('.').next().unwrap_or(text).trim()
}

/// Prompt text with `{name}` and `{summary}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    pub fn render(&self, name: &str, description: &str) -> String {
        self.template
            .replace("{name}", name)
            .replace("{summary}", first_sentence(description))
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}
