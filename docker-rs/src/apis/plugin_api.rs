// Copyright (c) Microsoft. All rights reserved.

use http::Method;

use super::client::{encode_path, Query};
use super::{DockerApiClient, Error, Transport};
use crate::models::{Plugin, PluginPrivilege};
use crate::utils::Filters;

#[async_trait::async_trait]
pub trait PluginApi: Send + Sync {
    async fn plugin_list(&self, filters: Option<&Filters>) -> Result<Vec<Plugin>, Error>;

    async fn plugin_inspect(&self, name: &str) -> Result<Plugin, Error>;

    /// Privileges a plugin from the registry would be granted on install.
    async fn plugin_privileges(&self, remote: &str) -> Result<Vec<PluginPrivilege>, Error>;
}

#[async_trait::async_trait]
impl<T> PluginApi for DockerApiClient<T>
where
    T: Transport,
{
    async fn plugin_list(&self, filters: Option<&Filters>) -> Result<Vec<Plugin>, Error> {
        let query = Query::new().append_filters(filters)?;
        self.call(Method::GET, "/plugins", query).await
    }

    async fn plugin_inspect(&self, name: &str) -> Result<Plugin, Error> {
        let path = format!("/plugins/{}/json", encode_path(name));
        self.call(Method::GET, &path, Query::new()).await
    }

    async fn plugin_privileges(&self, remote: &str) -> Result<Vec<PluginPrivilege>, Error> {
        let query = Query::new().append("remote", remote);
        self.call(Method::GET, "/plugins/privileges", query).await
    }
}
