//! Gemini REST client. Implements `TextGenerator` over `generateContent`
//! and `streamGenerateContent?alt=sse`.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, Response, StatusCode};
use reqwest_eventsource::{retry::Never, Event, EventSource};
use tracing::{debug, warn};

use crate::llm_client::models::{GeminiError, GenerateContentRequest, GenerateContentResponse};
use crate::llm_client::{GenerationOptions, LlmError, Segment, TextGenerator, TextStream};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// The single Gemini client used by the stylist.
/// No timeout is set; reqwest defaults apply.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: String, api_base: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key,
            api_base,
        })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{model}:{method}", self.api_base)
    }

    async fn post(&self, url: &str, body: &GenerateContentRequest) -> Result<Response, LlmError> {
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, body));
        }

        Ok(response)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_stream(
        &self,
        contents: &[Segment],
        options: &GenerationOptions,
    ) -> Result<TextStream, LlmError> {
        let body = GenerateContentRequest::new(contents, options);
        let url = format!(
            "{}?alt=sse",
            self.endpoint(&options.model, "streamGenerateContent")
        );

        let req_builder = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body);

        let mut event_source = EventSource::new(req_builder)
            .map_err(|e| LlmError::Stream(format!("Failed to create event source: {e}")))?;
        // A dropped stream must not be replayed; the planner owns the single fallback.
        event_source.set_retry_policy(Box::new(Never));
        debug!("Gemini stream opened (model: {})", options.model);

        let stream = async_stream::stream! {
            while let Some(event) = event_source.next().await {
                match event {
                    Ok(Event::Open) => continue,
                    Ok(Event::Message(message)) => match parse_event(&message.data) {
                        Some(Ok(text)) => {
                            yield Ok(text);
                        }
                        Some(Err(e)) => {
                            yield Err(e);
                            break;
                        }
                        None => continue,
                    },
                    Err(reqwest_eventsource::Error::StreamEnded) => break,
                    Err(reqwest_eventsource::Error::InvalidStatusCode(status, response)) => {
                        let body = response.text().await.unwrap_or_default();
                        yield Err(api_error(status, body));
                        break;
                    }
                    Err(e) => {
                        yield Err(LlmError::Stream(e.to_string()));
                        break;
                    }
                }
            }
            event_source.close();
        };

        Ok(stream.boxed())
    }

    async fn generate(
        &self,
        contents: &[Segment],
        options: &GenerationOptions,
    ) -> Result<String, LlmError> {
        let body = GenerateContentRequest::new(contents, options);
        let url = self.endpoint(&options.model, "generateContent");

        let response: GenerateContentResponse = self.post(&url, &body).await?.json().await?;

        if let Some(reason) = response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
        {
            debug!("Gemini generate finished: {reason}");
        }

        response.first_candidate_text().ok_or(LlmError::EmptyContent)
    }
}

/// Builds an `Api` error from a non-success response, preferring Gemini's own message.
fn api_error(status: StatusCode, body: String) -> LlmError {
    warn!("Gemini API returned {}: {}", status, body);
    let message = serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    LlmError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Parses one event payload. `None` when the event carries no text
/// (usage metadata, grounding info, `[DONE]`).
fn parse_event(data: &str) -> Option<Result<String, LlmError>> {
    if data.trim() == "[DONE]" {
        return None;
    }

    let chunk = match serde_json::from_str::<GenerateContentResponse>(data) {
        Ok(chunk) => chunk,
        Err(e) => {
            return Some(Err(LlmError::Stream(format!(
                "invalid stream event: {e}"
            ))))
        }
    };

    if let Some(error) = chunk.error {
        warn!("Gemini stream reported error: {}", error.message);
        return Some(Err(LlmError::Api {
            status: error.code.unwrap_or(500),
            message: error.message,
        }));
    }

    chunk
        .first_candidate_text()
        .filter(|text| !text.is_empty())
        .map(Ok)
}
