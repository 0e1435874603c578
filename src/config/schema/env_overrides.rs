use super::Config;

impl Config {
    /// Environment values win over file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) =
            std::env::var("GEMINI_API_KEY").or_else(|_| std::env::var("GOOGLE_API_KEY"))
            && !key.trim().is_empty()
        {
            self.generation.api_key = Some(key.trim().to_string());
        }

        if let Ok(model) = std::env::var("POSTWRIGHT_MODEL")
            && !model.is_empty()
        {
            self.generation.model = model;
        }

        if let Ok(token) = std::env::var("LINKEDIN_ACCESS_TOKEN")
            && !token.trim().is_empty()
        {
            self.publish.access_token = Some(token.trim().to_string());
        }

        if let Ok(person_id) = std::env::var("LINKEDIN_PERSON_ID")
            && !person_id.trim().is_empty()
        {
            self.publish.person_id = Some(person_id.trim().to_string());
        }

        if let Ok(client_id) = std::env::var("LINKEDIN_CLIENT_ID")
            && !client_id.is_empty()
        {
            self.oauth.client_id = Some(client_id);
        }
    }
}
