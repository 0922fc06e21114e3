//! Client-credentials token acquisition against the Microsoft identity
//! platform, authenticating with a certificate-signed JWT assertion.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Map, Value};
use sha1::{Digest, Sha1};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::client_specific::error::{CallError, ClientSpecificError};

pub const PRIVATE_KEY_PATH_ENV: &str = "MSFT_PRIVATE_KEY_PATH";
pub const CERTIFICATE_PATH_ENV: &str = "MSFT_CERTIFICATE_PATH";

const CLIENT_ASSERTION_TYPE: &str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";
const TOKEN_KEY: &str = "access_token";
const AUTH_PARSE_MESSAGE: &str = "Couldn't parse auth response.";

/// Lifetime of a signed client assertion.
const ASSERTION_LIFETIME_SECS: i64 = 600;

/// Tokens are refreshed this long before they expire.
const REFRESH_MARGIN: Duration = Duration::from_secs(300);

/// Assumed lifetime when the authority omits `expires_in`.
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

const TOKEN_EXCHANGE_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const TOKEN_EXCHANGE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Certificate is not a PEM encoded X.509 certificate")]
    InvalidCertificate,

    #[error("Private key is not a PEM encoded RSA key: {0}")]
    InvalidPrivateKey(#[from] jsonwebtoken::errors::Error),
}

/// Configured path, else the environment variable, else empty.
pub fn resolve_path(configured: Option<&Path>, env_var: &str) -> PathBuf {
    match configured {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => std::env::var(env_var).map(PathBuf::from).unwrap_or_default(),
    }
}

/// Private key and certificate used to sign client assertions.
pub struct ClientCredential {
    private_key: SecretString,
    certificate_der: Vec<u8>,
    thumbprint: String,
}

impl ClientCredential {
    pub fn load(private_key_path: &Path, certificate_path: &Path) -> Result<Self, CredentialError> {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|source| CredentialError::Read {
                path: path.to_path_buf(),
                source,
            })
        };
        Self::from_pem(read(private_key_path)?, &read(certificate_path)?)
    }

    pub fn from_pem(private_key_pem: String, certificate_pem: &str) -> Result<Self, CredentialError> {
        EncodingKey::from_rsa_pem(private_key_pem.as_bytes())?;
        let certificate_der = certificate_der(certificate_pem).ok_or(CredentialError::InvalidCertificate)?;
        let thumbprint = hex::encode(Sha1::digest(&certificate_der));

        Ok(Self {
            private_key: SecretString::from(private_key_pem),
            certificate_der,
            thumbprint,
        })
    }

    /// Lower-case hex SHA-1 fingerprint of the certificate.
    pub fn thumbprint(&self) -> &str {
        &self.thumbprint
    }

    /// Sign a client assertion for `audience` on behalf of `client_id`.
    pub fn client_assertion(&self, client_id: &str, audience: &str) -> Result<String, ClientSpecificError> {
        #[derive(Serialize)]
        struct Claims<'a> {
            aud: &'a str,
            iss: &'a str,
            sub: &'a str,
            jti: String,
            nbf: i64,
            iat: i64,
            exp: i64,
        }

        let now = Utc::now().timestamp();
        let claims = Claims {
            aud: audience,
            iss: client_id,
            sub: client_id,
            jti: uuid::Uuid::new_v4().to_string(),
            nbf: now,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.x5t = Some(URL_SAFE_NO_PAD.encode(Sha1::digest(&self.certificate_der)));
        header.x5c = Some(vec![STANDARD.encode(&self.certificate_der)]);

        let key = EncodingKey::from_rsa_pem(self.private_key.expose_secret().as_bytes())
            .map_err(|e| ClientSpecificError::auth(format!("Failed to load signing key: {e}")))?;
        jsonwebtoken::encode(&header, &claims, &key)
            .map_err(|e| ClientSpecificError::auth(format!("Failed to sign client assertion: {e}")))
    }
}

/// DER bytes of the first `CERTIFICATE` block of a PEM document.
fn certificate_der(pem: &str) -> Option<Vec<u8>> {
    let body: String = pem
        .lines()
        .map(str::trim)
        .skip_while(|line| *line != "-----BEGIN CERTIFICATE-----")
        .skip(1)
        .take_while(|line| *line != "-----END CERTIFICATE-----")
        .collect();
    if body.is_empty() {
        return None;
    }
    STANDARD.decode(body).ok()
}

struct CachedToken {
    token: SecretString,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Instant::now() + REFRESH_MARGIN < self.expires_at
    }
}

/// Application token source with an in-memory cache.
///
/// The cache lock is held for the whole exchange, so concurrent callers that
/// miss the cache wait for one outbound request instead of each making
/// their own.
///
/// The exchange runs on the blocking pool, which a caller's timeout cannot
/// cancel. `exchange_timeout` bounds how long that thread stays busy, and
/// [`caller`](super::caller) sets it to the verify timeout.
pub struct TokenProvider {
    authority: String,
    client_id: String,
    scope: String,
    credential: ClientCredential,
    exchange_timeout: Duration,
    cache: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    pub fn new(authority: &str, client_id: &str, scope: &str, credential: ClientCredential) -> Self {
        Self {
            authority: authority.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            scope: scope.to_string(),
            credential,
            exchange_timeout: TOKEN_EXCHANGE_TIMEOUT,
            cache: Mutex::new(None),
        }
    }

    pub fn with_exchange_timeout(mut self, timeout: Duration) -> Self {
        self.exchange_timeout = timeout;
        self
    }

    pub fn exchange_timeout(&self) -> Duration {
        self.exchange_timeout
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn token_endpoint(&self) -> String {
        format!("{}/oauth2/v2.0/token", self.authority)
    }

    /// A bearer token, from cache when still fresh.
    #[instrument(skip(self), fields(authority = %self.authority))]
    pub async fn get_token(&self) -> Result<SecretString, CallError> {
        info!("Acquiring authentication token.");
        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache.as_ref().filter(|cached| cached.is_fresh()) {
            debug!("Using cached authentication token.");
            return Ok(SecretString::from(cached.token.expose_secret()));
        }

        debug!(url = %self.token_endpoint(), "Contacting authority.");
        let data = self.exchange().await?;

        let Some(token) = data.get(TOKEN_KEY).and_then(Value::as_str) else {
            return Err(self.parse_error(&data).into());
        };
        let lifetime = data
            .get("expires_in")
            .and_then(|value| value.as_u64().or_else(|| value.as_str()?.parse().ok()))
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOKEN_LIFETIME);

        *cache = Some(CachedToken {
            token: SecretString::from(token),
            expires_at: Instant::now() + lifetime,
        });
        info!(expires_in = lifetime.as_secs(), "Acquired authentication token.");
        Ok(SecretString::from(token))
    }

    /// Drop any cached token.
    pub async fn clear(&self) {
        *self.cache.lock().await = None;
    }

    /// Run the blocking client-credentials exchange on the blocking pool.
    async fn exchange(&self) -> Result<Map<String, Value>, CallError> {
        let endpoint = self.token_endpoint();
        let assertion = self.credential.client_assertion(&self.client_id, &endpoint)?;
        let form = [
            ("grant_type", "client_credentials".to_string()),
            ("client_id", self.client_id.clone()),
            ("scope", self.scope.clone()),
            ("client_assertion_type", CLIENT_ASSERTION_TYPE.to_string()),
            ("client_assertion", assertion),
        ];

        let timeout = self.exchange_timeout;
        tokio::task::spawn_blocking(move || request_token(&endpoint, &form, timeout))
            .await
            .map_err(|e| CallError::Task(e.to_string()))?
    }

    fn parse_error(&self, data: &Map<String, Value>) -> ClientSpecificError {
        let mut error = ClientSpecificError::auth(AUTH_PARSE_MESSAGE).with_context("authority", self.authority.as_str());
        for (key, value) in data {
            let value = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            error = error.with_context(key.as_str(), value);
        }
        error
    }
}

fn request_token(endpoint: &str, form: &[(&str, String)], timeout: Duration) -> Result<Map<String, Value>, CallError> {
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(TOKEN_EXCHANGE_CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .build()?;
    let response = client.post(endpoint).form(form).send()?;
    let status = response.status();
    let text = response.text()?;

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(data)) => Ok(data),
        _ => Ok(Map::from_iter([
            ("status".to_string(), Value::from(status.as_u16())),
            ("body".to_string(), Value::from(text)),
        ])),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use jsonwebtoken::decode_header;

    const KEY: &str = include_str!("../../../tests/fixtures/msft_private_key.pem");
    const CERT: &str = include_str!("../../../tests/fixtures/msft_certificate.pem");

    #[test]
    fn test_thumbprint_is_sha1_of_der() {
        let credential = ClientCredential::from_pem(KEY.to_string(), CERT).unwrap();
        assert_eq!(credential.thumbprint(), "5f47d64f6bab7c05c151ed85945ce94aff84a425");
    }

    #[test]
    fn test_invalid_pem_is_rejected() {
        assert!(matches!(
            ClientCredential::from_pem(KEY.to_string(), "not a certificate"),
            Err(CredentialError::InvalidCertificate)
        ));
        assert!(matches!(
            ClientCredential::from_pem("garbage".to_string(), CERT),
            Err(CredentialError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn test_client_assertion_header_and_claims() {
        let credential = ClientCredential::from_pem(KEY.to_string(), CERT).unwrap();
        let jwt = credential
            .client_assertion("client-1", "https://login.test/tenant/oauth2/v2.0/token")
            .unwrap();

        let header = decode_header(&jwt).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);
        let x5t = URL_SAFE_NO_PAD.decode(header.x5t.unwrap()).unwrap();
        assert_eq!(hex::encode(x5t), credential.thumbprint());
        assert_eq!(header.x5c.unwrap().len(), 1);

        let payload = jwt.split('.').nth(1).unwrap();
        let claims: Value = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap();
        assert_eq!(claims["aud"], "https://login.test/tenant/oauth2/v2.0/token");
        assert_eq!(claims["iss"], "client-1");
        assert_eq!(claims["sub"], "client-1");
    }

    #[test]
    fn test_resolve_path_prefers_configuration() {
        let configured = PathBuf::from("/etc/msft/key.pem");
        assert_eq!(resolve_path(Some(&configured), "E9Y_TEST_UNSET_PATH_VAR"), configured);
        assert_eq!(resolve_path(None, "E9Y_TEST_UNSET_PATH_VAR"), PathBuf::new());
    }

    #[test]
    fn test_certificate_der_requires_markers() {
        assert!(certificate_der("-----BEGIN CERTIFICATE-----\n-----END CERTIFICATE-----").is_none());
        assert!(certificate_der(CERT).is_some());
    }
}
