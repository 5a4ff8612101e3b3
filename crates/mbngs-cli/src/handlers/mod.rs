//! Command handlers.
//!
//! Handlers follow one pattern:
//! `pub async fn execute(client, &Args, out) -> Result<(), CliError>`.
//! They turn arguments into library options, make the call and print the
//! result. They are generic over the HTTP backend and the output writer.

pub mod browse;
pub mod collections;
pub mod cover_art;
pub mod discid;
pub mod identifiers;
pub mod lookup;
pub mod search;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use mbngs_ws::{
        ClientConfig, HttpBackend, MbError, MbResult, MusicBrainzClient, RateLimit, UserAgent,
        WsRequest, WsResponse,
    };

    /// Answers with a fixed status and body and records request URLs.
    pub struct StaticBackend {
        status: u16,
        body: Vec<u8>,
        pub urls: Arc<Mutex<Vec<String>>>,
    }

    impl StaticBackend {
        pub fn json(value: &serde_json::Value) -> Self {
            Self::bytes(value.to_string().into_bytes())
        }

        pub fn bytes(body: Vec<u8>) -> Self {
            Self {
                status: 200,
                body,
                urls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn status(status: u16) -> Self {
            Self {
                status,
                ..Self::bytes(Vec::new())
            }
        }
    }

    #[async_trait]
    impl HttpBackend for StaticBackend {
        async fn execute(&self, request: &WsRequest) -> MbResult<WsResponse> {
            self.urls.lock().unwrap().push(request.url.to_string());
            if self.status == 200 {
                Ok(WsResponse::ok(self.body.clone()))
            } else {
                Err(MbError::ApiRequestFailed {
                    status: self.status,
                    url: request.url.to_string(),
                    message: None,
                })
            }
        }
    }

    pub fn client(backend: StaticBackend) -> (MusicBrainzClient<StaticBackend>, Arc<Mutex<Vec<String>>>) {
        let urls = Arc::clone(&backend.urls);
        let config = ClientConfig::new()
            .with_user_agent(UserAgent::new("mbngs-test", "1.0", None).unwrap())
            .with_rate_limit(RateLimit::Disabled);
        (MusicBrainzClient::with_backend(config, backend), urls)
    }

    pub fn output(out: Vec<u8>) -> serde_json::Value {
        serde_json::from_slice(&out).unwrap()
    }
}
