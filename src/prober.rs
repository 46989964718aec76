use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::{Duration, Instant};

use crate::config::{Method, ProbeConfig};
use crate::error::Result;

/// Result of probing a single target.
///
/// Created fresh per target and consumed immediately by the classifier;
/// status and latency are only populated when the transport succeeded.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub status_code: Option<u16>,
    pub latency: Option<Duration>,
    pub error: Option<String>,
}

/// Seam between the batch runner and the network.
#[async_trait]
pub trait Probe {
    /// Perform exactly one request against `target`. Never retries.
    async fn probe(&self, target: &str) -> ProbeOutcome;
}

/// Probes targets over HTTP using a shared reqwest client.
#[derive(Debug)]
pub struct HttpProber {
    client: reqwest::Client,
    method: Method,
}

impl HttpProber {
    /// Build a prober from a validated `ProbeConfig`.
    ///
    /// The configured timeout bounds the whole round trip (connect, write
    /// and read), so a slow target surfaces as a transport error just like a
    /// refused connection.
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let redirect_policy = Policy::limited(10);
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(redirect_policy)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            method: config.method,
        })
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(&self, target: &str) -> ProbeOutcome {
        let request = match self.method {
            Method::Head => self.client.head(target),
            Method::Get => self.client.get(target),
        };

        // Latency brackets the request execution only, not its construction.
        let started = Instant::now();
        match request.send().await {
            Ok(response) => {
                let latency = started.elapsed();
                let status_code = response.status().as_u16();
                // Dropping the response here releases the connection before
                // the next target in the batch is probed.
                drop(response);
                ProbeOutcome {
                    status_code: Some(status_code),
                    latency: Some(latency),
                    error: None,
                }
            }
            Err(err) => {
                let description = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                ProbeOutcome {
                    status_code: None,
                    latency: None,
                    error: Some(description),
                }
            }
        }
    }
}
