use crate::app::report::print_report;
use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result, bail};
use postwright::auth::{OAuthClient, authorization_url};
use postwright::cron::{ScheduledPosting, Scheduler};
use postwright::error::TopicError;
use postwright::llm::{GeminiClient, GenerationClient, RetryingGenerationClient};
use postwright::pipeline::{
    AutoApprove, ConfirmApproval, NeverPublish, PipelineError, PostingPipeline, PublishApproval,
    Publisher,
};
use postwright::prompt::PromptBuilder;
use postwright::publish::{LinkedInClient, PermissionCheck};
use postwright::topic::{
    FixedListTopicSource, InteractiveTopicSource, SingleTopicSource, TopicSource,
};
use postwright::ui::style;
use postwright::{AuthCommands, Config};
use std::sync::Arc;
use tracing::info;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => run_interactive(&config).await,
        Commands::Once { topic, no_publish } => run_once(&config, topic, no_publish).await,
        Commands::Schedule => run_schedule(&config).await,
        Commands::Prompt { topic } => print_prompt(&config, &topic),
        Commands::Check => run_check(&config).await,
        Commands::Auth { auth_command } => match auth_command {
            AuthCommands::Url => print_authorization_url(&config),
            AuthCommands::Exchange {
                code,
                client_secret,
            } => exchange_code(&config, &code, client_secret).await,
        },
    }
}

// ── Wiring ──────────────────────────────────────────────────────

/// Gemini client behind the transient-retry decorator. A missing key is fatal.
fn build_generator(config: &Config) -> Result<Arc<dyn GenerationClient>> {
    let Some(api_key) = config.generation_api_key() else {
        bail!("No Gemini API key configured. Set GEMINI_API_KEY or generation.api_key.");
    };

    let model = config.generation.model.as_str();
    let mut gemini = GeminiClient::new(Some(api_key.to_string()), model)
        .with_temperature(config.generation.temperature)
        .with_timeout_secs(config.generation.timeout_secs);
    if let Some(api_base) = &config.generation.api_base {
        gemini = gemini.with_api_base(api_base.as_str());
    }

    Ok(Arc::new(RetryingGenerationClient::new(
        Box::new(gemini),
        config.reliability.generation_retries,
        config.reliability.generation_backoff_ms,
    )))
}

fn linkedin_client(config: &Config) -> LinkedInClient {
    let client = LinkedInClient::new().with_timeout_secs(config.publish.timeout_secs);
    match &config.publish.api_base {
        Some(api_base) => client.with_api_base(api_base.as_str()),
        None => client,
    }
}

fn build_pipeline(config: &Config, publish: bool) -> Result<PostingPipeline> {
    let persona = Arc::new(config.persona_profile()?);
    let pipeline = PostingPipeline::new(persona, build_generator(config)?)?;
    if !publish {
        return Ok(pipeline);
    }
    let publisher = Publisher::new(
        Arc::new(linkedin_client(config)),
        config.publish_credentials(),
    );
    Ok(pipeline.with_publisher(publisher))
}

fn configured_topics(config: &Config) -> Result<FixedListTopicSource> {
    FixedListTopicSource::new(config.schedule.topics.iter().cloned())
        .context("schedule.topics has no usable topic")
}

// ── Run modes ───────────────────────────────────────────────────

/// Why interactive mode drafts only, or `None` when it can publish.
fn draft_only_reason(config: &Config) -> Option<String> {
    match config.publish_credentials() {
        Ok(_) => None,
        Err(e) if config.publish.is_configured() => Some(format!(
            "LinkedIn credentials are incomplete ({e}); drafts will not be published."
        )),
        Err(_) => Some(
            "LinkedIn credentials are not configured; drafts will not be published.".to_string(),
        ),
    }
}

async fn run_interactive(config: &Config) -> Result<()> {
    let draft_only = draft_only_reason(config);
    let publish = draft_only.is_none();
    let pipeline = build_pipeline(config, publish)?;
    let mut topics = InteractiveTopicSource::new();
    let mut approval: Box<dyn PublishApproval> = if publish {
        Box::new(ConfirmApproval)
    } else {
        Box::new(NeverPublish)
    };

    println!("{}", style::header("Postwright: LinkedIn post drafting"));
    println!(
        "{}",
        style::dim("Give me a topic, an idea or a link. Type 'exit' to quit.")
    );
    if let Some(reason) = &draft_only {
        println!("{}", style::warning(reason));
    }

    loop {
        let report = pipeline.run(&mut topics, approval.as_mut()).await;
        match &report.error {
            Some(PipelineError::Topic(TopicError::Closed)) => break,
            Some(PipelineError::Topic(TopicError::Empty)) => {
                println!("{}", style::warning("Topic cannot be empty."));
            }
            Some(PipelineError::Topic(err)) => bail!("could not read a topic: {err}"),
            _ => print_report(&report, !publish),
        }
    }

    println!("{}", style::dim("Goodbye."));
    Ok(())
}

async fn run_once(config: &Config, topic: Option<String>, no_publish: bool) -> Result<()> {
    let pipeline = build_pipeline(config, !no_publish)?;
    let mut topics: Box<dyn TopicSource> = match topic {
        Some(topic) => Box::new(SingleTopicSource::new(topic)),
        None => Box::new(configured_topics(config)?),
    };
    let mut approval: Box<dyn PublishApproval> = if no_publish {
        Box::new(NeverPublish)
    } else {
        Box::new(AutoApprove)
    };

    let report = pipeline.run(topics.as_mut(), approval.as_mut()).await;
    print_report(&report, true);

    if !report.is_success() {
        bail!("posting run did not complete successfully");
    }
    Ok(())
}

async fn run_schedule(config: &Config) -> Result<()> {
    let mut scheduler = Scheduler::new(config.schedule_entries()?, config.schedule.poll_secs)?;
    let pipeline = build_pipeline(config, true)?;
    let topics = configured_topics(config)?;
    let mut job = ScheduledPosting::new(pipeline, topics, Box::new(AutoApprove));

    let times: Vec<String> = scheduler.entries().iter().map(ToString::to_string).collect();
    println!(
        "{} {}",
        style::header("Scheduled posting at"),
        style::value(times.join(", "))
    );
    println!("{}", style::dim("Press Ctrl-C to stop."));

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("cannot listen for Ctrl-C, running until killed: {e}");
            std::future::pending::<()>().await;
        }
    };
    let summary = scheduler.run_until(&mut job, shutdown).await;

    println!(
        "{}",
        style::dim(format!(
            "Stopped after {} run(s), {} failed.",
            summary.runs, summary.failures
        ))
    );
    Ok(())
}

fn print_prompt(config: &Config, topic: &str) -> Result<()> {
    let persona = config.persona_profile()?;
    let prompt = PromptBuilder::new()?.build(&persona, topic)?;
    println!("{prompt}");
    Ok(())
}

// ── LinkedIn helpers ────────────────────────────────────────────

async fn run_check(config: &Config) -> Result<()> {
    let token = config
        .publish
        .access_token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .context("No LinkedIn access token. Set LINKEDIN_ACCESS_TOKEN or publish.access_token.")?;
    let client = linkedin_client(config);

    let profile = client.fetch_profile(token).await?;
    println!(
        "{} {} {} (person id {})",
        style::success("Connected as"),
        profile.first_name,
        profile.last_name,
        style::value(&profile.id)
    );
    match config.publish.person_id.as_deref() {
        Some(id) if id.trim() == profile.id => {}
        Some(id) => println!(
            "{}",
            style::warning(format!(
                "Configured person id `{id}` differs from the token's id `{}`.",
                profile.id
            ))
        ),
        None => println!(
            "{}",
            style::warning(format!("Set LINKEDIN_PERSON_ID={} to publish.", profile.id))
        ),
    }

    match client.check_posting_permissions(token).await? {
        PermissionCheck::Granted => println!("{}", style::success("Posting permission granted.")),
        PermissionCheck::MissingScope => println!(
            "{}",
            style::failure("Token lacks the w_member_social scope; re-authorize the app.")
        ),
        PermissionCheck::Unexpected(status) => println!(
            "{}",
            style::warning(format!("Permission check returned HTTP {status}."))
        ),
    }
    Ok(())
}

fn oauth_client_id(config: &Config) -> Result<&str> {
    config
        .oauth
        .client_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .context("No LinkedIn client id. Set LINKEDIN_CLIENT_ID or oauth.client_id.")
}

fn print_authorization_url(config: &Config) -> Result<()> {
    let url = authorization_url(
        oauth_client_id(config)?,
        &config.oauth.redirect_uri,
        &config.oauth.scopes,
    )?;
    println!("{}", style::header("Open this URL and approve the app:"));
    println!("{}", style::url(&url));
    println!(
        "{}",
        style::dim("Then run `postwright auth exchange --code <code>` with the `code` from the redirect.")
    );
    Ok(())
}

async fn exchange_code(config: &Config, code: &str, client_secret: Option<String>) -> Result<()> {
    let client_id = oauth_client_id(config)?;
    let client_secret = match client_secret {
        Some(secret) => secret,
        None => dialoguer::Password::new()
            .with_prompt("LinkedIn client secret")
            .interact()
            .context("failed to read client secret")?,
    };

    let token = OAuthClient::new()
        .exchange_code(client_id, &client_secret, code, &config.oauth.redirect_uri)
        .await?;
    info!(expires_in = token.expires_in_secs, "access token obtained");

    println!("{}", style::success("Access token obtained."));
    println!("LINKEDIN_ACCESS_TOKEN={}", token.access_token);
    if let Some(secs) = token.expires_in_secs {
        println!("{}", style::dim(format!("Expires in {} day(s).", secs / 86_400)));
    }
    println!(
        "{}",
        style::dim("Export it, then run `postwright check` to find your person id.")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use postwright::pipeline::ErrorKind;

    #[test]
    fn complete_credentials_enable_interactive_publishing() {
        let mut config = Config::default();
        config.publish.access_token = Some("tok".into());
        config.publish.person_id = Some("abc".into());
        assert!(draft_only_reason(&config).is_none());
    }

    #[test]
    fn partial_credentials_fall_back_to_drafting() {
        let mut config = Config::default();
        config.publish.access_token = Some("tok".into());
        let reason = draft_only_reason(&config).unwrap();
        assert!(reason.contains("incomplete"));
        assert!(reason.contains("LINKEDIN_PERSON_ID"));

        let mut config = Config::default();
        config.publish.person_id = Some("abc".into());
        assert!(draft_only_reason(&config).unwrap().contains("LINKEDIN_ACCESS_TOKEN"));

        assert!(
            draft_only_reason(&Config::default())
                .unwrap()
                .contains("not configured")
        );
    }

    #[tokio::test]
    async fn draft_only_pipeline_never_reports_missing_credentials() {
        let mut config = Config::default();
        config.generation.api_key = Some("AIza-test".into());
        // Unroutable base: the run fails in generation, not on credentials.
        config.generation.api_base = Some("http://127.0.0.1:1".into());
        config.generation.timeout_secs = 2;
        config.reliability.generation_retries = 0;
        config.publish.access_token = Some("tok".into());

        let publish = draft_only_reason(&config).is_none();
        let pipeline = build_pipeline(&config, publish).unwrap();
        let report = pipeline
            .run(&mut SingleTopicSource::new("AI tools"), &mut NeverPublish)
            .await;

        assert_ne!(report.error_kind(), Some(ErrorKind::MissingCredentials));
    }
}
