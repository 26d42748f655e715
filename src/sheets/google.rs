//! Google Sheets writer implementation
//!
//! Talks to the Sheets v4 values API directly over HTTP with a
//! service-account bearer token. Tokens come from the authenticator's
//! cache, so a long-running process keeps writing across token expiry
//! without re-authenticating.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use yup_oauth2::authenticator::DefaultAuthenticator;
use yup_oauth2::{ServiceAccountAuthenticator, ServiceAccountKey};

use crate::constants::{
    REQUEST_TIMEOUT_SECS, SHEETS_API_URL, SHEETS_SCOPE, SHEET_RANGE, USER_AGENT,
};
use crate::error::{AuthError, RenderError};
use crate::sheet::SheetWriter;
use crate::types::Row;

/// Writer for one Google Sheets tab, held for the process lifetime
pub struct GoogleSheetsWriter {
    client: Client,
    auth: DefaultAuthenticator,
    spreadsheet_key: String,
}

impl GoogleSheetsWriter {
    /// Acquires the spreadsheet handle.
    ///
    /// Builds the service-account authenticator, fetches an initial
    /// access token and probes the spreadsheet metadata endpoint so that
    /// a bad key or an unshared spreadsheet fails here, at startup,
    /// rather than on the first tick.
    pub async fn authenticate(
        credentials: ServiceAccountKey,
        spreadsheet_key: &str,
    ) -> Result<Self, AuthError> {
        let auth = ServiceAccountAuthenticator::builder(credentials)
            .build()
            .await
            .map_err(AuthError::Authenticator)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        let writer = Self {
            client,
            auth,
            spreadsheet_key: spreadsheet_key.to_string(),
        };

        let token = writer.access_token().await.map_err(AuthError::Token)?;

        let url = format!(
            "{}/{}?fields=spreadsheetId",
            SHEETS_API_URL, writer.spreadsheet_key
        );
        let response = writer.client.get(&url).bearer_auth(&token).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::SpreadsheetAccess {
                key: writer.spreadsheet_key.clone(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        tracing::info!(
            spreadsheet_key = %writer.spreadsheet_key,
            "Authenticated against Google Sheets"
        );

        Ok(writer)
    }

    /// Returns a currently valid access token for the spreadsheets scope
    async fn access_token(&self) -> Result<String, String> {
        let token = self
            .auth
            .token(&[SHEETS_SCOPE])
            .await
            .map_err(|e| e.to_string())?;
        token
            .token()
            .map(str::to_string)
            .ok_or_else(|| "authenticator returned an empty token".to_string())
    }

    /// Maps a non-success Sheets API response into a [`RenderError`]
    async fn api_error(response: reqwest::Response) -> RenderError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        RenderError::Api(format!("HTTP {}: {}", status, body))
    }
}

#[async_trait]
impl SheetWriter for GoogleSheetsWriter {
    async fn clear(&self) -> Result<(), RenderError> {
        let token = self.access_token().await.map_err(RenderError::Token)?;
        let url = format!(
            "{}/{}/values/{}:clear",
            SHEETS_API_URL, self.spreadsheet_key, SHEET_RANGE
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&json!({}))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(())
    }

    async fn append_row(&self, cells: &Row) -> Result<(), RenderError> {
        let token = self.access_token().await.map_err(RenderError::Token)?;
        let url = format!(
            "{}/{}/values/{}:append?valueInputOption=USER_ENTERED&insertDataOption=INSERT_ROWS",
            SHEETS_API_URL, self.spreadsheet_key, SHEET_RANGE
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&json!({ "values": [cells] }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(())
    }
}
