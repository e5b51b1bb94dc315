//! Session endpoints and the authenticated [`Session`] handle.

use crate::api::ZoneNoteRequestBuilder;
use crate::DynClient;
use dynect_core::{ApiResponse, Credentials, DynError, Result, SessionData};
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, instrument};

const SESSION_PATH: &str = "Session/";

/// Session API endpoints
pub struct SessionApi<'a> {
    client: &'a DynClient,
}

impl<'a> SessionApi<'a> {
    pub(crate) const fn new(client: &'a DynClient) -> Self {
        Self { client }
    }

    /// Log in and open a session
    ///
    /// Failed authentication is returned as [`DynError::Api`] with the
    /// server's messages; it is never retried.
    #[instrument(
        skip(self, credentials),
        fields(customer = %credentials.customer_name, user = %credentials.user_name)
    )]
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let response = self
            .client
            .execute(Method::POST, SESSION_PATH, Some(credentials), None)
            .await?;

        let data: SessionData = response.into_data()?;
        let token = data
            .token
            .filter(|t| !t.is_empty())
            .ok_or(DynError::MissingToken)?;

        debug!(api_version = data.version.as_deref().unwrap_or("unknown"), "logged in");
        Ok(Session::new(self.client.clone(), token))
    }
}

/// An authenticated session
///
/// Holds the token for the lifetime of one unit of work. [`Session::logout`]
/// consumes the session, so a session can be closed at most once.
pub struct Session {
    client: DynClient,
    token: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.client.base_url().as_str())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Wrap an existing token
    #[must_use]
    pub fn new(client: DynClient, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
        }
    }

    /// Token sent as `Auth-Token` on every request of this session
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Request a zone's change-note history
    #[must_use]
    pub fn zone_notes(&self, zone: impl Into<String>) -> ZoneNoteRequestBuilder<'_> {
        ZoneNoteRequestBuilder::new(self, zone.into())
    }

    /// List the node names of a zone
    #[instrument(skip(self))]
    pub async fn node_list(&self, zone: &str) -> Result<Vec<String>> {
        self.execute::<()>(Method::GET, &format!("NodeList/{zone}/"), None)
            .await?
            .into_data()
    }

    /// Invalidate the token
    #[instrument(skip(self))]
    pub async fn logout(self) -> Result<()> {
        let empty = serde_json::Map::new();
        self.execute(Method::DELETE, SESSION_PATH, Some(&empty)).await?;
        debug!("logged out");
        Ok(())
    }

    /// Perform an authenticated request, resolved through the job poller
    pub(crate) async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse> {
        self.client
            .execute(method, path, body, Some(&self.token))
            .await
    }
}
