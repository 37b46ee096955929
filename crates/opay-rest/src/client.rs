//! Connection client implementation

use crate::error::{RestError, RestResult};
use crate::modules::{BankTransfer, Cashout, Inquiry, Verification, WalletTransfer};
use opay_auth::Credentials;
use opay_types::{ApiResponse, AuthScheme, Endpoint, HttpMethod, Params};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the merchant ID on every request
const MERCHANT_ID_HEADER: &str = "MerchantId";

const SANDBOX_URL: &str = "https://sandbox-cashierapi.opayweb.com/api/v3";
const PRODUCTION_URL: &str = "https://cashierapi.opayweb.com/api/v3";

const ENVIRONMENT_VAR: &str = "OPAY_ENVIRONMENT";

/// OPay deployment to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Test environment (default)
    #[default]
    Sandbox,
    /// Live environment
    Production,
}

impl Environment {
    /// Get the API base URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_URL,
            Self::Production => PRODUCTION_URL,
        }
    }

    /// Read `OPAY_ENVIRONMENT` ("sandbox" or "production")
    ///
    /// Unset means sandbox. A set value that is not recognized is an error.
    pub fn from_env() -> RestResult<Self> {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) => Self::from_value(&value),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(RestError::InvalidParameter(format!(
                "{} is not valid unicode",
                ENVIRONMENT_VAR
            ))),
        }
    }

    /// Parse an environment name, rejecting unknown values
    pub fn from_value(value: &str) -> RestResult<Self> {
        Self::parse(value).ok_or_else(|| {
            RestError::InvalidParameter(format!(
                "{}={:?} is not one of sandbox, test, production, live",
                ENVIRONMENT_VAR, value
            ))
        })
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sandbox" | "test" => Some(Self::Sandbox),
            "production" | "live" => Some(Self::Production),
            _ => None,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Merchant credentials
    pub credentials: Credentials,
    /// API base URL, endpoint paths are appended to it
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a sandbox configuration for the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: Environment::default().base_url().to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }

    /// Build a configuration from `OPAY_*` environment variables
    pub fn from_env() -> RestResult<Self> {
        let credentials = Credentials::from_env()?;
        Ok(Self::new(credentials).with_environment(Environment::from_env()?))
    }

    /// Target a known environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.base_url = environment.base_url().to_string();
        self
    }

    /// Target a custom base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// OPay connection client
///
/// Builds, authenticates and sends every request. Feature modules borrow it
/// and delegate to [`ConnectionClient::send`].
///
/// # Example
///
/// ```no_run
/// use opay_rest::{ClientConfig, ConnectionClient, Credentials, Params};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::new("256612345678901", "OPAYPUB...", "OPAYPRV...")?;
///     let client = ConnectionClient::new(ClientConfig::new(creds))?;
///
///     let balance = client.inquiry().balance(&Params::new()).await?;
///     println!("Balances: {:?}", balance);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ConnectionClient {
    http_client: Client,
    credentials: Credentials,
    base_url: String,
}

impl ConnectionClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> RestResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| RestError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("opay-rest/0.1.0"))
            .build()?;

        info!(
            %base_url,
            merchant_id = config.credentials.merchant_id(),
            "Created OPay client"
        );

        Ok(Self {
            http_client,
            credentials: config.credentials,
            base_url,
        })
    }

    /// Create a client from `OPAY_*` environment variables
    pub fn from_env() -> RestResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn merchant_id(&self) -> &str {
        self.credentials.merchant_id()
    }

    /// Full URL for an endpoint path
    ///
    /// A missing leading `/` is added, so `cashier/refund` and
    /// `/cashier/refund` resolve to the same URL.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Send a request to a registered endpoint
    ///
    /// Returns the provider's JSON object unchanged, whatever its HTTP status
    /// or response code. Fails with [`RestError::Transport`] when the exchange
    /// cannot complete and [`RestError::Parse`] when the body is not a JSON
    /// object. Never retries.
    pub async fn send(&self, params: &Params, endpoint: Endpoint) -> RestResult<ApiResponse> {
        self.send_raw(params, endpoint.path(), endpoint.method(), endpoint.auth())
            .await
    }

    /// Send a request to an arbitrary path under the base URL
    #[instrument(skip(self, params), fields(param_count = params.len()))]
    pub async fn send_raw(
        &self,
        params: &Params,
        path: &str,
        method: HttpMethod,
        auth: AuthScheme,
    ) -> RestResult<ApiResponse> {
        let request = match method {
            HttpMethod::Post => self.build_post(params, path, auth)?,
            HttpMethod::Get => self.build_get(params, path, auth)?,
        };

        debug!("Sending {} {}", method, path);

        let response = request
            .header(MERCHANT_ID_HEADER, self.credentials.merchant_id())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        parse_body(status.as_u16(), &body)
    }

    fn build_post(
        &self,
        params: &Params,
        path: &str,
        auth: AuthScheme,
    ) -> RestResult<RequestBuilder> {
        let body = params
            .to_json()
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        let authorization = self.credentials.authorization(auth, &body);

        Ok(self
            .http_client
            .post(self.url_for(path))
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, authorization)
            .body(body))
    }

    fn build_get(
        &self,
        params: &Params,
        path: &str,
        auth: AuthScheme,
    ) -> RestResult<RequestBuilder> {
        let query = serde_urlencoded::to_string(params.to_query_pairs())
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        let authorization = self.credentials.authorization(auth, &query);

        let mut url = self.url_for(path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        Ok(self
            .http_client
            .get(url)
            .header(AUTHORIZATION, authorization))
    }

    // ========================================================================
    // Feature modules
    // ========================================================================

    /// Hosted checkout operations
    pub fn cashout(&self) -> Cashout<'_> {
        Cashout::new(self)
    }

    /// Transfers to OPay wallets
    pub fn wallet_transfer(&self) -> WalletTransfer<'_> {
        WalletTransfer::new(self)
    }

    /// Transfers to bank accounts
    pub fn bank_transfer(&self) -> BankTransfer<'_> {
        BankTransfer::new(self)
    }

    /// Balance and account lookups
    pub fn inquiry(&self) -> Inquiry<'_> {
        Inquiry::new(self)
    }

    /// Account-name verification
    pub fn verification(&self) -> Verification<'_> {
        Verification::new(self)
    }
}

impl std::fmt::Debug for ConnectionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Parse a response body into a JSON object
fn parse_body(status: u16, body: &[u8]) -> RestResult<ApiResponse> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(ApiResponse::new(map)),
        Ok(other) => Err(RestError::parse(
            status,
            format!("expected JSON object, got {}", json_kind(&other)),
            body,
        )),
        Err(e) => Err(RestError::parse(status, e.to_string(), body)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
