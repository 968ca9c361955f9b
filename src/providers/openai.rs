//! OpenAI Responses client
//!
//! Builds the wire request, performs one POST to `/v1/responses`, and
//! normalizes the body into a [`NormalizedResponse`].

use super::openai_shared::{
    build_wire_request, extract_output, http::ResponsesHttpClient, instructions_echo,
    normalize_usage, OpenAIInput, OpenAIResponsesRequest, OpenAIResponsesResponse,
};
use crate::config::ResponsesConfig;
use crate::core_types::provider::ResponsesApi;
use crate::core_types::request::ResponseRequest;
use crate::core_types::response::NormalizedResponse;
use crate::error::{ResponsesError, ResponsesResult};
use crate::logging::log_debug;
use crate::response_parser::validate_strict_output;
use async_trait::async_trait;
use std::time::Instant;

/// Client for the hosted Responses endpoint
#[derive(Debug, Clone)]
pub struct OpenAIResponsesClient {
    http_client: ResponsesHttpClient,
    config: ResponsesConfig,
}

impl OpenAIResponsesClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails
    /// [`ResponsesConfig::validate`] or the HTTP client cannot be built.
    pub fn new(config: ResponsesConfig) -> ResponsesResult<Self> {
        config.validate()?;

        log_debug!(
            provider = "openai",
            base_url = %config.base_url,
            default_model = %config.default_model,
            timeout_secs = config.request_timeout.as_secs(),
            "Creating OpenAI Responses client"
        );

        Ok(Self {
            http_client: ResponsesHttpClient::new(config.request_timeout)?,
            config,
        })
    }

    pub fn config(&self) -> &ResponsesConfig {
        &self.config
    }

    /// Validate `request` and convert it to the wire body that would be sent.
    pub fn build_request(&self, request: &ResponseRequest) -> ResponsesResult<OpenAIResponsesRequest> {
        request.validate()?;
        Ok(build_wire_request(request, &self.config.default_model))
    }

    async fn send(&self, wire: &OpenAIResponsesRequest) -> ResponsesResult<OpenAIResponsesResponse> {
        let url = self.config.responses_url();
        let headers = ResponsesHttpClient::build_auth_headers(self.config.credential.expose())?;
        self.http_client
            .execute_responses_request(&url, &headers, wire)
            .await
    }

    /// Turn a decoded body into a normalized record, enforcing strict schemas.
    fn normalize(
        &self,
        request: &ResponseRequest,
        wire: &OpenAIResponsesRequest,
        api_response: OpenAIResponsesResponse,
    ) -> ResponsesResult<NormalizedResponse> {
        if api_response.status.as_deref() == Some("failed") {
            let message = api_response
                .error
                .as_ref()
                .map(|e| e.message.clone())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Response generation failed".to_string());
            return Err(ResponsesError::server_error(200, message, None));
        }

        let extracted = extract_output(&api_response);
        let output_text = match extracted.refusal {
            Some(refusal) if request.schema().is_some() => {
                return Err(ResponsesError::schema_violation(
                    format!("Model refused to produce structured output: {refusal}"),
                    Some(extracted.text),
                ));
            }
            Some(refusal) if extracted.text.is_empty() => refusal,
            _ => extracted.text,
        };

        let model = if api_response.model.is_empty() {
            wire.model.clone()
        } else {
            api_response.model.clone()
        };

        let response = NormalizedResponse {
            id: api_response.id.clone(),
            model,
            created_at: api_response.created_at,
            output_text,
            usage: normalize_usage(api_response.usage.as_ref()),
            instructions: instructions_echo(&api_response),
        };

        if let Some(schema) = request.schema().filter(|s| s.strict) {
            validate_strict_output(&response.output_text, schema)?;
        }

        Ok(response)
    }
}

#[async_trait]
impl ResponsesApi for OpenAIResponsesClient {
    async fn create_response(
        &self,
        request: &ResponseRequest,
    ) -> ResponsesResult<NormalizedResponse> {
        let wire = self.build_request(request)?;
        let input_kind = match wire.input {
            OpenAIInput::Text(_) => "text",
            OpenAIInput::Messages(_) => "messages",
        };

        log_debug!(
            provider = "openai",
            model = %wire.model,
            input_kind = input_kind,
            schema = wire.text.as_ref().map(|t| t.format.name.as_str()).unwrap_or("none"),
            "Executing Responses request"
        );

        let start_time = Instant::now();
        let api_response = self.send(&wire).await?;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        let response = self.normalize(request, &wire, api_response)?;

        log_debug!(
            provider = "openai",
            response_id = %response.id,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            duration_ms = duration_ms,
            "Responses request completed"
        );

        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
