//! Remote State Client
//!
//! Implements `StateStore` over HTTP. Every request carries the Victor
//! `User-Agent`, and basic authentication when both halves of the
//! credentials are configured.

use std::time::Duration;

use reqwest::blocking::{Client, Request};
use reqwest::header::USER_AGENT;
use reqwest::{Method, StatusCode};
use tracing::{debug, info, warn, Span};

use crate::domain::entities::Snapshot;
use crate::domain::ports::{FetchOutcome, RemoteStateError, StateStore};
use crate::domain::value_objects::{Credentials, StateLocation, UserAgent};

/// HTTP client for the remote snapshot
pub struct RemoteStateClient {
    http: Client,
    credentials: Credentials,
    user_agent: UserAgent,
    span: Span,
}

impl RemoteStateClient {
    /// Build a client logging under `span`
    ///
    /// Only the connection is bounded in time: snapshots of large stacks may
    /// take a while to transfer.
    pub fn new(
        credentials: Credentials,
        user_agent: UserAgent,
        span: Span,
    ) -> Result<Self, RemoteStateError> {
        if let Some(missing) = credentials.missing_half() {
            span.in_scope(|| {
                warn!(
                    missing,
                    "only one of username/password is set, requests are sent without authentication"
                )
            });
        }

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(15))
            .timeout(None::<Duration>)
            .build()
            .map_err(|error| RemoteStateError::Transport {
                method: "build",
                location: String::new(),
                message: error.to_string(),
            })?;

        Ok(Self {
            http,
            credentials,
            user_agent,
            span,
        })
    }

    /// Prepare a request with the identity and authentication headers
    pub fn build_request(
        &self,
        method: Method,
        location: &StateLocation,
    ) -> Result<Request, RemoteStateError> {
        let mut builder = self
            .http
            .request(method, location.as_str())
            .header(USER_AGENT, self.user_agent.as_str());
        if let Some((username, password)) = self.credentials.basic_auth() {
            builder = builder.basic_auth(username, Some(password));
        }
        builder
            .build()
            .map_err(|error| RemoteStateError::InvalidLocation {
                location: location.to_string(),
                reason: error.to_string(),
            })
    }

    fn transport(
        method: &'static str,
        location: &StateLocation,
        error: reqwest::Error,
    ) -> RemoteStateError {
        RemoteStateError::Transport {
            method,
            location: location.to_string(),
            message: error.to_string(),
        }
    }
}

impl StateStore for RemoteStateClient {
    fn fetch(&self, location: &StateLocation) -> Result<FetchOutcome, RemoteStateError> {
        let _entered = self.span.enter();
        debug!(location = %location, "fetching remote state");

        let request = self.build_request(Method::GET, location)?;
        let response = self
            .http
            .execute(request)
            .map_err(|error| Self::transport("GET", location, error))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            info!(location = %location, "remote state not found");
            return Ok(FetchOutcome::NotFound);
        }
        if !status.is_success() {
            return Err(RemoteStateError::Status {
                method: "GET",
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .map_err(|error| Self::transport("GET", location, error))?;
        let snapshot = Snapshot::from_bytes(body.to_vec());
        info!(
            location = %location,
            bytes = snapshot.len(),
            digest = %snapshot.digest(),
            "fetched remote state"
        );
        Ok(FetchOutcome::Found(snapshot))
    }

    fn push(&self, location: &StateLocation, snapshot: &Snapshot) -> Result<(), RemoteStateError> {
        let _entered = self.span.enter();
        debug!(location = %location, bytes = snapshot.len(), "pushing remote state");

        let mut request = self.build_request(Method::PUT, location)?;
        *request.body_mut() = Some(snapshot.as_bytes().to_vec().into());
        let response = self
            .http
            .execute(request)
            .map_err(|error| Self::transport("PUT", location, error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteStateError::Status {
                method: "PUT",
                location: location.to_string(),
                status: status.as_u16(),
            });
        }
        info!(
            location = %location,
            bytes = snapshot.len(),
            digest = %snapshot.digest(),
            "pushed remote state"
        );
        Ok(())
    }
}
