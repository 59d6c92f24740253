//! Style plan generation — streaming call with a single non-streaming fallback.
//!
//! Flow: stream fragments → concatenate in arrival order → if the result is
//! blank, re-issue the identical request without streaming. No other retries.

use futures::StreamExt;
use tracing::{debug, warn};

use crate::llm_client::{GenerationOptions, LlmError, Segment, TextGenerator};

/// Generates the plan text for an assembled prompt.
///
/// Errors from either path are returned unchanged. A blank fallback is
/// reported as `LlmError::EmptyContent`, so `Ok` always carries text.
pub async fn generate_style_plan(
    llm: &dyn TextGenerator,
    contents: &[Segment],
    options: &GenerationOptions,
) -> Result<String, LlmError> {
    let mut stream = llm.generate_stream(contents, options).await?;

    let mut plan = String::new();
    let mut fragments = 0usize;
    while let Some(fragment) = stream.next().await {
        plan.push_str(&fragment?);
        fragments += 1;
    }
    debug!("Stream finished: {} fragments, {} bytes", fragments, plan.len());

    if !plan.trim().is_empty() {
        return Ok(plan);
    }

    warn!("Streaming returned no text, falling back to non-streaming generation");
    let plan = llm.generate(contents, options).await?;

    if plan.trim().is_empty() {
        return Err(LlmError::EmptyContent);
    }

    Ok(plan)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use futures::stream;

    use crate::llm_client::TextStream;

    /// Scripted `TextGenerator`. `None` makes the corresponding call fail.
    /// Every call records the segments it was given, in call order.
    pub struct FakeGenerator {
        pub fragments: Option<Vec<&'static str>>,
        pub fallback: Option<&'static str>,
        pub stream_calls: AtomicUsize,
        pub fallback_calls: AtomicUsize,
        pub received: Mutex<Vec<Vec<Segment>>>,
    }

    impl FakeGenerator {
        pub fn new(fragments: Option<Vec<&'static str>>, fallback: Option<&'static str>) -> Self {
            Self {
                fragments,
                fallback,
                stream_calls: AtomicUsize::new(0),
                fallback_calls: AtomicUsize::new(0),
                received: Mutex::new(Vec::new()),
            }
        }

        pub fn received(&self) -> Vec<Vec<Segment>> {
            self.received.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate_stream(
            &self,
            contents: &[Segment],
            _options: &GenerationOptions,
        ) -> Result<TextStream, LlmError> {
            self.stream_calls.fetch_add(1, Ordering::SeqCst);
            self.received.lock().unwrap().push(contents.to_vec());
            match &self.fragments {
                Some(fragments) => {
                    let items: Vec<Result<String, LlmError>> =
                        fragments.iter().map(|f| Ok(f.to_string())).collect();
                    Ok(stream::iter(items).boxed())
                }
                None => Err(LlmError::Api {
                    status: 503,
                    message: "stream unavailable".to_string(),
                }),
            }
        }

        async fn generate(
            &self,
            contents: &[Segment],
            _options: &GenerationOptions,
        ) -> Result<String, LlmError> {
            self.fallback_calls.fetch_add(1, Ordering::SeqCst);
            self.received.lock().unwrap().push(contents.to_vec());
            self.fallback
                .map(str::to_string)
                .ok_or_else(|| LlmError::Api {
                    status: 500,
                    message: "generate unavailable".to_string(),
                })
        }
    }

    pub fn options() -> GenerationOptions {
        GenerationOptions {
            model: "gemini-2.0-flash".to_string(),
            top_k: 40,
            web_search: true,
        }
    }

    fn contents() -> Vec<Segment> {
        vec![Segment::model("directive"), Segment::user("task")]
    }

    #[tokio::test]
    async fn test_fragments_concatenated_in_order() {
        let llm = FakeGenerator::new(Some(vec!["1. Outfit", " Recommendation", ": dress"]), None);
        let plan = generate_style_plan(&llm, &contents(), &options()).await.unwrap();

        assert_eq!(plan, "1. Outfit Recommendation: dress");
        assert_eq!(llm.fallback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_stream_falls_back_exactly_once() {
        let llm = FakeGenerator::new(Some(vec![]), Some("fallback plan"));
        let plan = generate_style_plan(&llm, &contents(), &options()).await.unwrap();

        assert_eq!(plan, "fallback plan");
        assert_eq!(llm.stream_calls.load(Ordering::SeqCst), 1);
        assert_eq!(llm.fallback_calls.load(Ordering::SeqCst), 1);

        let received = llm.received();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0], contents());
        assert_eq!(received[1], received[0]);
    }

    #[tokio::test]
    async fn test_whitespace_stream_falls_back() {
        let llm = FakeGenerator::new(Some(vec!["  ", "\n"]), Some("fallback plan"));
        let plan = generate_style_plan(&llm, &contents(), &options()).await.unwrap();

        assert_eq!(plan, "fallback plan");
        assert_eq!(llm.fallback_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_fallback_is_empty_content_error() {
        let llm = FakeGenerator::new(Some(vec![]), Some("   "));
        let err = generate_style_plan(&llm, &contents(), &options())
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_stream_error_propagates_without_fallback() {
        let llm = FakeGenerator::new(None, Some("unused"));
        let err = generate_style_plan(&llm, &contents(), &options())
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::Api { status: 503, .. }));
        assert_eq!(llm.fallback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_mid_stream_error_propagates() {
        struct BrokenStream;

        #[async_trait]
        impl TextGenerator for BrokenStream {
            async fn generate_stream(
                &self,
                _contents: &[Segment],
                _options: &GenerationOptions,
            ) -> Result<TextStream, LlmError> {
                let items = vec![
                    Ok("partial".to_string()),
                    Err(LlmError::Stream("connection reset".to_string())),
                ];
                Ok(stream::iter(items).boxed())
            }

            async fn generate(
                &self,
                _contents: &[Segment],
                _options: &GenerationOptions,
            ) -> Result<String, LlmError> {
                Ok("unused".to_string())
            }
        }

        let err = generate_style_plan(&BrokenStream, &contents(), &options())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Stream(_)));
    }
}
