//! Brief refinement with a fixed fallback for every failure path.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::generator::TextGenerator;
use crate::prompt::build_brief_prompt;

/// Returned without any network call when no credential is configured.
pub const FALLBACK_OFFLINE: &str = "We will engineer a robust solution for your energy infrastructure needs. (AI Refinement unavailable without API Key)";

/// Returned when the service answers with no text.
pub const FALLBACK_EMPTY: &str = "Could not generate a brief at this time.";

/// Returned when the call fails for any reason.
pub const FALLBACK_ERROR: &str =
    "Error connecting to AI assistant. Please try again manually describing your project.";

/// Rewrites rough project descriptions into technical briefs.
///
/// Never fails: every outcome resolves to text the form can use. Holds no
/// per-call state, so one refiner can serve concurrent calls.
#[derive(Clone)]
pub struct BriefRefiner {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl BriefRefiner {
    /// A refiner with no credential; always answers [`FALLBACK_OFFLINE`].
    pub fn offline() -> Self {
        Self { generator: None }
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Build from configuration: online with Gemini when a key is set,
    /// offline otherwise.
    #[cfg(feature = "gemini")]
    pub fn from_config(config: &crate::AiConfig) -> Self {
        match crate::GeminiClient::from_config(config) {
            Some(client) => Self::with_generator(Arc::new(client)),
            None => Self::offline(),
        }
    }

    pub fn is_online(&self) -> bool {
        self.generator.is_some()
    }

    /// Refine `user_input` into a project brief.
    ///
    /// Callers reject empty input before calling; it is not re-checked here.
    pub async fn refine(&self, user_input: &str) -> String {
        let Some(generator) = &self.generator else {
            warn!("API key is missing, returning placeholder brief");
            return FALLBACK_OFFLINE.to_string();
        };

        let prompt = build_brief_prompt(user_input);
        match generator.generate(&prompt).await {
            Ok(Some(text)) if !text.is_empty() => {
                info!(model = %generator.model(), "brief refined");
                text
            }
            Ok(_) => {
                warn!(model = %generator.model(), "generation returned no text");
                FALLBACK_EMPTY.to_string()
            }
            Err(e) => {
                error!(model = %generator.model(), error = %e, "text generation failed");
                FALLBACK_ERROR.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GenerationError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Reply {
        Text(&'static str),
        Nothing,
        Fail(fn() -> GenerationError),
    }

    struct Scripted {
        reply: Reply,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl Scripted {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for Scripted {
        fn model(&self) -> &str {
            "scripted"
        }

        async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.reply {
                Reply::Text(t) => Ok(Some((*t).to_string())),
                Reply::Nothing => Ok(None),
                Reply::Fail(make) => Err(make()),
            }
        }
    }

    #[tokio::test]
    async fn offline_returns_placeholder() {
        let refiner = BriefRefiner::offline();
        assert!(!refiner.is_online());
        assert_eq!(
            refiner.refine("20km subsea pipeline").await,
            "We will engineer a robust solution for your energy infrastructure needs. (AI Refinement unavailable without API Key)"
        );
    }

    #[tokio::test]
    async fn success_returns_generated_text() {
        let generator = Scripted::new(Reply::Text("A 20 km 12-inch subsea flowline."));
        let refiner = BriefRefiner::with_generator(generator.clone());
        assert_eq!(
            refiner.refine("20km pipeline").await,
            "A 20 km 12-inch subsea flowline."
        );
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
        let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("User Input: \"20km pipeline\""));
    }

    #[tokio::test]
    async fn empty_payload_returns_could_not_generate() {
        for reply in [Reply::Nothing, Reply::Text("")] {
            let refiner = BriefRefiner::with_generator(Scripted::new(reply));
            assert_eq!(
                refiner.refine("x").await,
                "Could not generate a brief at this time."
            );
        }
    }

    #[tokio::test]
    async fn any_error_returns_connection_message() {
        let failures: [fn() -> GenerationError; 2] = [
            || GenerationError::Server {
                status: 403,
                body: "API key not valid".into(),
            },
            || GenerationError::Other("socket closed".into()),
        ];
        for make in failures {
            let refiner = BriefRefiner::with_generator(Scripted::new(Reply::Fail(make)));
            assert_eq!(
                refiner.refine("x").await,
                "Error connecting to AI assistant. Please try again manually describing your project."
            );
        }
    }

    #[tokio::test]
    async fn concurrent_calls_are_independent() {
        let generator = Scripted::new(Reply::Text("brief"));
        let refiner = BriefRefiner::with_generator(generator.clone());
        let (a, b) = tokio::join!(refiner.refine("one"), refiner.refine("two"));
        assert_eq!(a, "brief");
        assert_eq!(b, "brief");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
    }

    #[cfg(feature = "gemini")]
    mod over_http {
        use super::super::*;
        use crate::AiConfig;
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        #[tokio::test]
        async fn no_key_makes_no_request() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(200))
                .expect(0)
                .mount(&server)
                .await;

            let mut cfg = AiConfig::default();
            cfg.endpoint = server.uri();
            let refiner = BriefRefiner::from_config(&cfg);
            assert_eq!(refiner.refine("anything").await, FALLBACK_OFFLINE);
        }

        #[tokio::test]
        async fn server_failure_becomes_fallback() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
                .expect(1)
                .mount(&server)
                .await;

            let mut cfg = AiConfig::default().with_api_key(Some("k".into()));
            cfg.endpoint = server.uri();
            let refiner = BriefRefiner::from_config(&cfg);
            assert!(refiner.is_online());
            assert_eq!(refiner.refine("anything").await, FALLBACK_ERROR);
        }

        #[tokio::test]
        async fn unreachable_endpoint_becomes_fallback() {
            let mut cfg = AiConfig::default().with_api_key(Some("k".into()));
            cfg.endpoint = "http://127.0.0.1:9".into();
            let refiner = BriefRefiner::from_config(&cfg);
            assert_eq!(refiner.refine("anything").await, FALLBACK_ERROR);
        }
    }
}
