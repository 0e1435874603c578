use crate::error::PersonaError;

const RECOMMENDED_PILLARS: std::ops::RangeInclusive<usize> = 3..=5;

/// Voice, audience and goal that steer every generated post.
///
/// Validated once at construction and never mutated afterwards; share it
/// behind an `Arc` when several owners need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaProfile {
    niche: String,
    audience: String,
    voice: String,
    content_pillars: Vec<String>,
    goal: String,
}

impl PersonaProfile {
    pub fn new(
        niche: impl Into<String>,
        audience: impl Into<String>,
        voice: impl Into<String>,
        content_pillars: Vec<String>,
        goal: impl Into<String>,
    ) -> Result<Self, PersonaError> {
        let niche = required("niche", niche.into())?;
        let audience = required("audience", audience.into())?;
        let voice = required("voice", voice.into())?;
        let goal = required("goal", goal.into())?;

        if content_pillars.is_empty() {
            return Err(PersonaError::NoPillars);
        }
        let content_pillars = content_pillars
            .into_iter()
            .enumerate()
            .map(|(idx, pillar)| {
                let trimmed = pillar.trim();
                if trimmed.is_empty() {
                    Err(PersonaError::EmptyPillar(idx + 1))
                } else {
                    Ok(trimmed.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !RECOMMENDED_PILLARS.contains(&content_pillars.len()) {
            tracing::warn!(
                pillars = content_pillars.len(),
                "persona works best with 3-5 content pillars"
            );
        }

        Ok(Self {
            niche,
            audience,
            voice,
            content_pillars,
            goal,
        })
    }

    pub fn niche(&self) -> &str {
        &self.niche
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    /// Pillars in configured order. Order is kept for rendering only.
    pub fn content_pillars(&self) -> &[String] {
        &self.content_pillars
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }
}

fn required(field: &'static str, value: String) -> Result<String, PersonaError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PersonaError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
