// Copyright (c) Microsoft. All rights reserved.

use http::Method;

use super::client::{encode_path, Query};
use super::{DockerApiClient, Error, Transport};
use crate::models::{
    Network, NetworkConnectRequest, NetworkCreateRequest, NetworkCreateResponse,
    NetworkDisconnectRequest, NetworkPruneResponse,
};
use crate::utils::Filters;

#[async_trait::async_trait]
pub trait NetworkApi: Send + Sync {
    async fn network_list(&self, filters: Option<&Filters>) -> Result<Vec<Network>, Error>;

    async fn network_inspect(
        &self,
        id: &str,
        verbose: bool,
        scope: Option<&str>,
    ) -> Result<Network, Error>;

    async fn network_create(
        &self,
        body: &NetworkCreateRequest,
    ) -> Result<NetworkCreateResponse, Error>;

    async fn network_connect(&self, id: &str, body: &NetworkConnectRequest) -> Result<(), Error>;

    async fn network_disconnect(
        &self,
        id: &str,
        body: &NetworkDisconnectRequest,
    ) -> Result<(), Error>;

    async fn network_delete(&self, id: &str) -> Result<(), Error>;

    async fn network_prune(&self, filters: Option<&Filters>)
        -> Result<NetworkPruneResponse, Error>;
}

#[async_trait::async_trait]
impl<T> NetworkApi for DockerApiClient<T>
where
    T: Transport,
{
    async fn network_list(&self, filters: Option<&Filters>) -> Result<Vec<Network>, Error> {
        let query = Query::new().append_filters(filters)?;
        self.call(Method::GET, "/networks", query).await
    }

    async fn network_inspect(
        &self,
        id: &str,
        verbose: bool,
        scope: Option<&str>,
    ) -> Result<Network, Error> {
        let path = format!("/networks/{}", encode_path(id));
        let query = Query::new()
            .append("verbose", verbose)
            .append_opt("scope", scope);
        self.call(Method::GET, &path, query).await
    }

    async fn network_create(
        &self,
        body: &NetworkCreateRequest,
    ) -> Result<NetworkCreateResponse, Error> {
        self.call_with_body(Method::POST, "/networks/create", Query::new(), body)
            .await
    }

    async fn network_connect(&self, id: &str, body: &NetworkConnectRequest) -> Result<(), Error> {
        let path = format!("/networks/{}/connect", encode_path(id));
        self.call_with_body_no_content(Method::POST, &path, Query::new(), body)
            .await
    }

    async fn network_disconnect(
        &self,
        id: &str,
        body: &NetworkDisconnectRequest,
    ) -> Result<(), Error> {
        let path = format!("/networks/{}/disconnect", encode_path(id));
        self.call_with_body_no_content(Method::POST, &path, Query::new(), body)
            .await
    }

    async fn network_delete(&self, id: &str) -> Result<(), Error> {
        let path = format!("/networks/{}", encode_path(id));
        self.call_no_content(Method::DELETE, &path, Query::new())
            .await
    }

    async fn network_prune(
        &self,
        filters: Option<&Filters>,
    ) -> Result<NetworkPruneResponse, Error> {
        let query = Query::new().append_filters(filters)?;
        self.call(Method::POST, "/networks/prune", query).await
    }
}
