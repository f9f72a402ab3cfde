//! Kalshi REST client for the two read-only endpoints the tracker needs:
//! the authenticated fill history and per-ticker market lookups.
//!
//! Requests are signed with RSA-PSS/SHA-256 over `timestamp + method + path`,
//! where `path` is the URL path without its query string.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use reqwest::{Client, Url};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::pss::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{RandomizedSigner, SignatureEncoding};
use rsa::RsaPrivateKey;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::{redact, Credentials};
use crate::error::{Result, TrackerError};
use crate::exchange::wire::{decode_page, FillsResponse, MarketResponse};
use crate::exchange::{FillPage, MarketDataSource};
use crate::models::MarketState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct KalshiClient {
    client: Client,
    base_url: String,
    /// Path component of `base_url`, prepended to endpoints when signing.
    path_prefix: String,
    api_key_id: String,
    signing_key: SigningKey<Sha256>,
}

impl std::fmt::Debug for KalshiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KalshiClient")
            .field("base_url", &self.base_url)
            .field("api_key_id", &redact(&self.api_key_id))
            .finish()
    }
}

impl KalshiClient {
    pub fn new(base_url: &str, creds: &Credentials) -> Result<Self> {
        let key = parse_private_key(&creds.private_key_pem)?;
        let client = Self::with_key(base_url, &creds.api_key_id, key)?;
        info!(
            "Kalshi client initialized (API key: {})",
            redact(&creds.api_key_id)
        );
        Ok(client)
    }

    pub fn with_key(base_url: &str, api_key_id: &str, key: RsaPrivateKey) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let path_prefix = Url::parse(&base_url)
            .map_err(|e| TrackerError::Config(format!("invalid base url '{}': {}", base_url, e)))?
            .path()
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url,
            path_prefix,
            api_key_id: api_key_id.to_string(),
            signing_key: SigningKey::<Sha256>::new(key),
        })
    }

    fn sign(&self, timestamp_ms: i64, method: &str, path: &str) -> String {
        let message = format!("{}{}{}", timestamp_ms, method, path);
        let mut rng = rand::thread_rng();
        let signature = self.signing_key.sign_with_rng(&mut rng, message.as_bytes());
        BASE64.encode(signature.to_bytes())
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T> {
        let timestamp_ms = Utc::now().timestamp_millis();
        let signed_path = format!("{}{}", self.path_prefix, endpoint);
        let signature = self.sign(timestamp_ms, "GET", &signed_path);

        debug!("GET {}", signed_path);
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, endpoint))
            .query(query)
            .header("Accept", "application/json")
            .header("KALSHI-ACCESS-KEY", &self.api_key_id)
            .header("KALSHI-ACCESS-TIMESTAMP", timestamp_ms.to_string())
            .header("KALSHI-ACCESS-SIGNATURE", signature)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TrackerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json::<T>().await?)
    }

    pub async fn fetch_fills(&self, cursor: Option<&str>, limit: usize) -> Result<FillPage> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(c) = cursor {
            query.push(("cursor", c.to_string()));
        }
        let resp: FillsResponse = self.get("/portfolio/fills", &query).await?;
        Ok(decode_page(resp.fills, resp.cursor))
    }

    pub async fn fetch_market(&self, ticker: &str) -> Result<MarketState> {
        let resp: MarketResponse = self.get(&format!("/markets/{}", ticker), &[]).await?;
        Ok(resp.market.into())
    }
}

#[async_trait]
impl MarketDataSource for KalshiClient {
    async fn list_fills(&mut self, cursor: Option<&str>, limit: usize) -> Result<FillPage> {
        self.fetch_fills(cursor, limit).await
    }

    async fn get_market(&mut self, ticker: &str) -> Result<MarketState> {
        self.fetch_market(ticker).await
    }
}

/// Accepts PKCS#8 ("BEGIN PRIVATE KEY") or PKCS#1 ("BEGIN RSA PRIVATE KEY") PEM.
pub fn parse_private_key(pem: &str) -> Result<RsaPrivateKey> {
    let pem = pem.trim();
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| TrackerError::Signing(format!("invalid Kalshi private key: {}", e)))
}
