use std::future::Future;
use std::io::{self, Write};
use std::time::Instant;
use anyhow::Context;
use crate::config::constants::PROMPT;
use crate::config::environment::Environment;
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::ai_providers::vertex::VertexProvider;
use crate::services::credential_configurator::CredentialConfigurator;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::cli::Cli;
use crate::traits::ai_provider::AiProvider;

pub struct CommandRunner;

impl CommandRunner {
    pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
        let start_time = Instant::now();
        let mut stdout = io::stdout();

        Self::execute(
            cli.json_key_file.as_deref(),
            Environment::from_process(),
            &mut stdout,
            |env| async move { VertexProvider::from_environment(&env).await },
        )
        .await?;

        log::info!("⏱️  Command completed in {:.2}s", start_time.elapsed().as_secs_f64());
        Ok(())
    }

    /// Configures credentials, builds the provider from the resulting environment, then
    /// generates once.
    pub async fn execute<W, F, Fut, P>(json_key_file: Option<&str>, mut env: Environment, out: &mut W, build_provider: F)
        -> anyhow::Result<()>
    where
        W: Write,
        F: FnOnce(Environment) -> Fut,
        Fut: Future<Output = Result<P, AiProviderError>>,
        P: AiProvider,
    {
        CredentialConfigurator::configure(json_key_file, &mut env, out)
            .context("Failed to write credential confirmation")?;

        let provider = build_provider(env)
            .await
            .context("Failed to set up the Vertex AI client")?;

        Self::generate(&provider, out).await
    }

    /// Sends the fixed prompt and prints the whole response. Nothing is written on failure.
    pub async fn generate<P, W>(provider: &P, out: &mut W) -> anyhow::Result<()>
    where
        P: AiProvider + ?Sized,
        W: Write,
    {
        log::info!("🚀 Sending generation request...");

        let response = provider
            .generate_content(vec![PROMPT.to_string()], GeminiGenerationConfig::default())
            .await
            .context("Generation request failed")?;

        if let Some(reason) = response.finish_reason() {
            log::info!("✅ Generation finished: {}", reason);
        }

        writeln!(out, "{:#?}", response)?;
        out.flush()?;

        Ok(())
    }
}
