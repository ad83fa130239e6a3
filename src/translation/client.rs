use crate::language::Language;
use crate::translation::cache::TranslationCache;
use crate::translation::retry::{retry_with_backoff, AttemptError, RetryError, RetryPolicy};
use crate::utils::{Result, TranslationConfig, VocabError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use tracing::{error, info_span, Instrument};

/// DeepL answers 456 once the account's character quota is used up.
pub const QUOTA_EXCEEDED_STATUS: u16 = 456;
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

#[derive(Debug, Clone, Copy)]
pub struct TranslateRequest<'a> {
    pub text: &'a str,
    pub source: Language,
    pub target: Language,
}

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one translation request. An `Err` is retried unless the request could not be built.
pub trait Transport {
    fn post(&self, request: &TranslateRequest<'_>) -> impl Future<Output = Result<TransportResponse>>;
}

pub struct HttpTransport {
    client: Client,
    endpoint: String,
    auth_key: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, auth_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            auth_key: auth_key.into(),
        })
    }
}

impl Transport for HttpTransport {
    async fn post(&self, request: &TranslateRequest<'_>) -> Result<TransportResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("DeepL-Auth-Key {}", self.auth_key))
            .form(&[
                ("text", request.text),
                ("source_lang", request.source.api_code()),
                ("target_lang", request.target.api_code()),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}

#[derive(Debug, Deserialize)]
struct DeepLResponse {
    #[serde(default)]
    translations: Vec<DeepLTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeepLTranslation {
    #[serde(default)]
    text: String,
}

fn parse_translation(body: &str) -> std::result::Result<String, String> {
    let response: DeepLResponse =
        serde_json::from_str(body).map_err(|e| format!("invalid response body: {}", e))?;
    match response.translations.into_iter().next() {
        Some(translation) if !translation.text.is_empty() => Ok(translation.text),
        _ => Err("empty translation".to_string()),
    }
}

fn classify(result: Result<TransportResponse>) -> std::result::Result<String, AttemptError> {
    let response = match result {
        Ok(response) => response,
        // a request that cannot be built will never succeed
        Err(VocabError::HttpError(e)) if e.is_builder() => {
            return Err(AttemptError::Fatal(VocabError::HttpError(e)))
        }
        Err(e) => return Err(AttemptError::Transient(e.to_string())),
    };

    match response.status {
        200..=299 => parse_translation(&response.body).map_err(AttemptError::Transient),
        QUOTA_EXCEEDED_STATUS => Err(AttemptError::Fatal(VocabError::QuotaExceeded)),
        status if RETRYABLE_STATUSES.contains(&status) => {
            Err(AttemptError::Transient(format!("HTTP {}", status)))
        }
        status => Err(AttemptError::Fatal(VocabError::HttpStatus {
            status,
            body: response.body,
        })),
    }
}

/// Cached, throttled, retrying translation over a [`Transport`].
pub struct Translator<T> {
    transport: T,
    policy: RetryPolicy,
    request_delay: Duration,
    cache: TranslationCache,
    rng: StdRng,
}

impl<T: Transport> Translator<T> {
    pub fn new(transport: T, policy: RetryPolicy, request_delay: Duration) -> Self {
        Self {
            transport,
            policy,
            request_delay,
            cache: TranslationCache::new(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_config(transport: T, config: &TranslationConfig) -> Self {
        let policy = RetryPolicy {
            max_attempts: config.max_attempts,
            base_delay: Duration::from_millis(config.backoff_base_ms),
            max_jitter: Duration::from_millis(config.jitter_ms),
        };
        Self::new(transport, policy, config.request_delay())
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn translate(&mut self, text: &str, source: Language, target: Language) -> Result<String> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(String::new());
        }
        if let Some(cached) = self.cache.get(text, source, target) {
            return Ok(cached.to_string());
        }

        let request = TranslateRequest { text, source, target };
        let transport = &self.transport;
        let rng = &mut self.rng;
        let span = info_span!("translate", source = %source, target = %target, text);

        let outcome = retry_with_backoff(
            &self.policy,
            || rng.gen::<f64>(),
            |_| async move { classify(transport.post(&request).await) },
        )
        .instrument(span)
        .await;

        match outcome {
            Ok(translated) => {
                self.cache
                    .insert(text.to_string(), source, target, translated.clone());
                tokio::time::sleep(self.request_delay).await;
                Ok(translated)
            }
            Err(RetryError::Fatal(e)) => {
                error!(source = %source, target = %target, text, error = %e, "Translation aborted");
                Err(e)
            }
            Err(RetryError::Exhausted { attempts, last_error }) => Err(VocabError::TranslationFailed {
                text: text.to_string(),
                source_lang: source,
                target_lang: target,
                attempts,
                last_error,
            }),
        }
    }
}
