//! Image → Gemini → apparel attributes.

use serde_json::Value;
use std::path::Path;
use std::time::Instant;

use crate::config::GeminiConfig;
use crate::error::{ConfigError, DescribeError, DescribeResult};
use crate::gemini::{
    build_prompt, extract_candidate_text, GenerateContentRequest, ReqwestTransport, Transport,
};
use crate::pipeline::{ImageDecoder, ImageInput};
use crate::schema::ApparelSchema;
use crate::types::ApparelResult;

/// Describes the apparel item in an image with one `generateContent` call.
///
/// The schema is rendered once at construction and the same text is used for
/// every prompt this descriptor builds. The descriptor holds no per-call
/// state, so a shared reference can serve concurrent calls.
pub struct ApparelDescriptor {
    endpoint: String,
    model: String,
    api_key: String,
    schema_text: String,
    prompt: String,
    transport: Box<dyn Transport>,
}

impl ApparelDescriptor {
    pub fn new(endpoint: &str, model: &str, api_key: &str) -> Self {
        let schema_text = ApparelSchema::to_pretty_string();
        let prompt = build_prompt(&schema_text);
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
            schema_text,
            prompt,
            transport: Box::new(ReqwestTransport::new()),
        }
    }

    /// Create a descriptor from config, with optional key and model overrides.
    ///
    /// The key override wins over `gemini.api_key`, which may itself be a
    /// `${ENV_VAR}` reference. Endpoint and model are validated here, since
    /// callers may have changed them after the config file was loaded.
    pub fn from_config(
        config: &GeminiConfig,
        api_key_override: Option<&str>,
        model_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = config.clone();
        if let Some(model) = model_override {
            config.model = model.to_string();
        }
        config.validate()?;

        let api_key = api_key_override
            .filter(|k| !k.is_empty())
            .map(String::from)
            .or_else(|| config.resolved_api_key())
            .ok_or_else(|| {
                ConfigError::ValidationError(
                    "Gemini API key not set. Set GEMINI_API_KEY or gemini.api_key.".to_string(),
                )
            })?;
        Ok(Self::new(&config.endpoint, &config.model, &api_key))
    }

    /// Replace the HTTP transport.
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The schema text embedded in every prompt.
    pub fn schema_text(&self) -> &str {
        &self.schema_text
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }

    fn redacted_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key=***",
            self.endpoint, self.model
        )
    }

    /// Describe the apparel item in the image at `path`.
    ///
    /// Performs exactly one request when the image loads, none otherwise.
    /// The returned mapping is not checked against the schema.
    pub async fn describe(&self, path: &Path) -> DescribeResult<ApparelResult> {
        let start = Instant::now();
        tracing::info!("Analyzing image: {}", path.display());

        let decoded = ImageDecoder::decode(path).await?;
        let (image, format) = (decoded.image, decoded.format);
        let path_owned = path.to_path_buf();
        let input = tokio::task::spawn_blocking(move || ImageInput::from_image(&image, format))
            .await
            .map_err(|e| DescribeError::ImageDecode {
                path: path_owned.clone(),
                message: format!("Task join error: {e}"),
            })?
            .map_err(|e| DescribeError::ImageDecode {
                path: path_owned,
                message: format!("Failed to re-encode image: {e}"),
            })?;

        let body = serde_json::to_vec(&GenerateContentRequest::json_reply(&self.prompt, &input))
            .map_err(|e| DescribeError::Transport {
                message: format!("Failed to serialize request: {e}"),
                status_code: None,
                body: None,
            })?;

        tracing::info!("Sending request to Gemini ({})", self.model);
        tracing::debug!(
            "POST {} via {} ({} bytes, {})",
            self.redacted_url(),
            self.transport.name(),
            body.len(),
            input.mime_type
        );

        let reply = self.transport.post_json(&self.url(), body).await?;
        tracing::debug!("Gemini response status: {}", reply.status);

        if !reply.is_success() {
            return Err(DescribeError::Transport {
                message: format!("Gemini HTTP {}", reply.status),
                status_code: Some(reply.status),
                body: Some(reply.body),
            });
        }

        let text = extract_candidate_text(&reply.body)?;
        let result = parse_result(&text)?;

        let missing = result.missing_required();
        if !missing.is_empty() {
            tracing::warn!("Reply is missing required fields: {}", missing.join(", "));
        }

        tracing::info!(
            "Received apparel attributes in {}ms",
            start.elapsed().as_millis()
        );
        Ok(result)
    }
}

/// Parse the candidate text into a result mapping.
fn parse_result(text: &str) -> DescribeResult<ApparelResult> {
    let value: Value = serde_json::from_str(text).map_err(|e| DescribeError::SchemaDecode {
        message: e.to_string(),
        text: text.to_string(),
    })?;

    match value {
        Value::Object(fields) => Ok(ApparelResult::new(fields)),
        other => Err(DescribeError::SchemaDecode {
            message: format!("expected a JSON object, got {}", json_kind(&other)),
            text: text.to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
