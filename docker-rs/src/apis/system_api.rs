// Copyright (c) Microsoft. All rights reserved.

use http::Method;

use super::client::Query;
use super::{DockerApiClient, Error, Transport};
use crate::models::{
    AuthConfig, EventMessage, SystemAuthResponse, SystemDataUsageResponse, SystemInfo,
    SystemVersion,
};
use crate::utils::Filters;

#[async_trait::async_trait]
pub trait SystemApi: Send + Sync {
    /// Returns the daemon's plain text answer, `OK` when it is healthy.
    async fn system_ping(&self) -> Result<String, Error>;

    async fn system_info(&self) -> Result<SystemInfo, Error>;

    async fn system_version(&self) -> Result<SystemVersion, Error>;

    async fn system_data_usage(&self) -> Result<SystemDataUsageResponse, Error>;

    async fn system_auth(&self, auth_config: &AuthConfig) -> Result<SystemAuthResponse, Error>;

    /// Events between `since` and `until`. The daemon closes the stream once
    /// `until` has passed, so the whole window arrives in one response.
    async fn system_events(
        &self,
        since: Option<&str>,
        until: &str,
        filters: Option<&Filters>,
    ) -> Result<Vec<EventMessage>, Error>;
}

#[async_trait::async_trait]
impl<T> SystemApi for DockerApiClient<T>
where
    T: Transport,
{
    async fn system_ping(&self) -> Result<String, Error> {
        self.call_text(Method::GET, "/_ping", Query::new()).await
    }

    async fn system_info(&self) -> Result<SystemInfo, Error> {
        self.call(Method::GET, "/info", Query::new()).await
    }

    async fn system_version(&self) -> Result<SystemVersion, Error> {
        self.call(Method::GET, "/version", Query::new()).await
    }

    async fn system_data_usage(&self) -> Result<SystemDataUsageResponse, Error> {
        self.call(Method::GET, "/system/df", Query::new()).await
    }

    async fn system_auth(&self, auth_config: &AuthConfig) -> Result<SystemAuthResponse, Error> {
        self.call_with_body(Method::POST, "/auth", Query::new(), auth_config)
            .await
    }

    async fn system_events(
        &self,
        since: Option<&str>,
        until: &str,
        filters: Option<&Filters>,
    ) -> Result<Vec<EventMessage>, Error> {
        let query = Query::new()
            .append_opt("since", since)
            .append("until", until)
            .append_filters(filters)?;
        self.call_stream(Method::GET, "/events", query).await
    }
}
