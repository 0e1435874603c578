use super::engine::TeraEngine;
use crate::error::PromptError;
use crate::persona::PersonaProfile;
use tera::Context;

pub const POST_PROMPT_NAME: &str = "linkedin_post";

const POST_PROMPT_TEMPLATE: &str = "\
Act as my expert LinkedIn content strategist and copywriter. Your tone is knowledgeable, engaging, and tailored for the LinkedIn platform.

**My Persona Profile:**
- **My Niche:** {{ niche }}
- **My Target Audience:** {{ audience }}
- **My Voice and Tone:** {{ voice }}
- **My Core Content Pillars:** {{ pillars | join(sep=\", \") }}
- **My Primary Goal:** {{ goal }}

**Your Task:**
Draft a compelling LinkedIn post based on the following topic. You must adhere strictly to my persona and follow the structure below.

**Topic for today's post:**
\"{{ topic }}\"

**Required Post Structure:**
1.  **Engaging Hook (1-2 lines):** Start with a provocative question, a bold statement, or a surprising statistic to grab immediate attention.
2.  **Insightful Body (3-5 short paragraphs):**
    - Elaborate on the hook.
    - Provide your unique perspective, analysis, or a short story related to the topic.
    - Use bullet points or numbered lists for clarity if it makes sense.
    - Explain the \"so what?\" - why should my audience care?
3.  **Clear Call-to-Action (exactly one):** End with a single question to encourage comments and engagement.
4.  **Relevant Hashtags (3-5):** Include 3-5 relevant, specific hashtags. Avoid overly generic ones.

Produce only the final, ready-to-publish LinkedIn post. Do not include any extra commentary before or after the post.
";

/// Renders a persona and a topic into the prompt sent to the model.
pub struct PromptBuilder {
    engine: TeraEngine,
}

impl PromptBuilder {
    pub fn new() -> Result<Self, PromptError> {
        let mut engine = TeraEngine::new();
        engine.add_template(POST_PROMPT_NAME, POST_PROMPT_TEMPLATE)?;
        Ok(Self { engine })
    }

    /// Render the post prompt. The topic is embedded verbatim; a blank topic
    /// is rejected before anything is rendered.
    pub fn build(&self, persona: &PersonaProfile, topic: &str) -> Result<String, PromptError> {
        if topic.trim().is_empty() {
            return Err(PromptError::InvalidTopic);
        }

        let mut ctx = Context::new();
        ctx.insert("niche", persona.niche());
        ctx.insert("audience", persona.audience());
        ctx.insert("voice", persona.voice());
        ctx.insert("pillars", persona.content_pillars());
        ctx.insert("goal", persona.goal());
        ctx.insert("topic", topic);

        self.engine.render(POST_PROMPT_NAME, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona() -> PersonaProfile {
        PersonaProfile::new(
            "X",
            "Y",
            "Z",
            vec!["A".to_string(), "B".to_string()],
            "G",
        )
        .unwrap()
    }

    #[test]
    fn build_is_deterministic() {
        let builder = PromptBuilder::new().unwrap();
        let first = builder.build(&persona(), "AI tools").unwrap();
        let second = PromptBuilder::new()
            .unwrap()
            .build(&persona(), "AI tools")
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn blank_topics_are_invalid() {
        let builder = PromptBuilder::new().unwrap();
        assert_eq!(
            builder.build(&persona(), "").unwrap_err(),
            PromptError::InvalidTopic
        );
        assert_eq!(
            builder.build(&persona(), "   ").unwrap_err(),
            PromptError::InvalidTopic
        );
    }

    #[test]
    fn persona_fields_render_in_fixed_order() {
        let prompt = PromptBuilder::new()
            .unwrap()
            .build(&persona(), "AI tools")
            .unwrap();

        let positions: Vec<usize> = [
            "**My Niche:** X",
            "**My Target Audience:** Y",
            "**My Voice and Tone:** Z",
            "**My Core Content Pillars:** A, B",
            "**My Primary Goal:** G",
            "\"AI tools\"",
            "Engaging Hook (1-2 lines)",
            "Insightful Body (3-5 short paragraphs)",
            "Call-to-Action (exactly one)",
            "Relevant Hashtags (3-5)",
        ]
        .iter()
        .map(|needle| {
            prompt
                .find(needle)
                .unwrap_or_else(|| panic!("missing `{needle}` in prompt"))
        })
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn topic_is_embedded_verbatim() {
        let topic = "  {{ not a template }} <b>&amp; \"quotes\"  ";
        let prompt = PromptBuilder::new()
            .unwrap()
            .build(&persona(), topic)
            .unwrap();
        assert!(prompt.contains(&format!("\"{topic}\"")));
    }
}
