//! The prompt contract between retrieval and generation.

use vestibot_model::GenerateRequest;

/// A two-slot prompt template: retrieved context goes into the system
/// instruction, the raw user query into the user turn.
///
/// The fixed instruction encodes the behavioral contract the generation
/// step must uphold: answer only from the supplied context, state
/// uncertainty explicitly when the context is insufficient, keep the
/// answer concise, and respond in the configured output language.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    language: String,
}

impl PromptTemplate {
    /// Create a template answering in `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self { language: language.into() }
    }

    /// Render the template with retrieved context and the user's query.
    pub fn render(&self, context: &str, input: &str) -> GenerateRequest {
        let system = format!(
            "You are an assistant for question-answering tasks about \
             admission-exam regulations. Use only the following pieces of \
             retrieved context to answer the question. If the context does \
             not contain the answer, say that you don't know. Keep the \
             answer concise. Assume all questions are about the Unicamp \
             vestibular. Always answer in {}.\n\n{}",
            self.language, context
        );
        GenerateRequest { system, user: input.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_both_slots() {
        let template = PromptTemplate::new("Portuguese");
        let request = template.render("Inscrições abrem em março", "Quando abrem?");

        assert!(request.system.contains("Inscrições abrem em março"));
        assert_eq!(request.user, "Quando abrem?");
    }

    #[test]
    fn instruction_encodes_the_behavioral_contract() {
        let request = PromptTemplate::new("Portuguese").render("", "q");

        assert!(request.system.contains("retrieved context"));
        assert!(request.system.contains("say that you don't know"));
        assert!(request.system.contains("concise"));
        assert!(request.system.contains("Portuguese"));
    }

    #[test]
    fn output_language_is_configurable() {
        let request = PromptTemplate::new("English").render("", "q");
        assert!(request.system.contains("Always answer in English."));
    }
}
