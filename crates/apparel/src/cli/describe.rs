//! The `apparel describe` command.

use apparel_core::{ApparelDescriptor, Config, DescribeError, OutputWriter};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `describe` command.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Image file to describe (defaults to input.image_path from config)
    pub image: Option<PathBuf>,

    /// Gemini model (overrides gemini.model)
    #[arg(short, long)]
    pub model: Option<String>,

    /// API base URL (overrides gemini.endpoint)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Gemini API key (overrides gemini.api_key)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Print compact single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Execute the describe command.
///
/// A failed describe call is logged and printed as `null`; only setup
/// problems (no image, no key) return an error.
pub async fn execute(args: DescribeArgs, config: &Config) -> anyhow::Result<()> {
    let descriptor = build_descriptor(&args, config)?;
    let image = resolve_image_path(args.image, config)?;

    let result = match descriptor.describe(&image).await {
        Ok(result) => Some(result),
        Err(e) => {
            report_failure(&e);
            None
        }
    };

    let pretty = config.output.pretty && !args.compact;
    let mut writer = OutputWriter::new(std::io::stdout().lock(), pretty);
    writer.write_result(result.as_ref())?;
    writer.flush()?;

    Ok(())
}

/// Apply flag overrides to `[gemini]`; the merged settings are validated again.
fn build_descriptor(args: &DescribeArgs, config: &Config) -> anyhow::Result<ApparelDescriptor> {
    let mut gemini = config.gemini.clone();
    if let Some(endpoint) = &args.endpoint {
        gemini.endpoint = endpoint.clone();
    }
    Ok(ApparelDescriptor::from_config(
        &gemini,
        args.api_key.as_deref(),
        args.model.as_deref(),
    )?)
}

fn resolve_image_path(arg: Option<PathBuf>, config: &Config) -> anyhow::Result<PathBuf> {
    arg.or_else(|| config.image_path()).ok_or_else(|| {
        anyhow::anyhow!(
            "No image given. Pass an image path or set input.image_path in {}",
            Config::default_path().display()
        )
    })
}

fn report_failure(error: &DescribeError) {
    tracing::error!("{error}");
    if let Some(body) = error.response_body() {
        tracing::error!("Response body: {body}");
    }
    if let DescribeError::SchemaDecode { text, .. } = error {
        tracing::debug!("Candidate text: {text}");
    }
}
