// Copyright (c) Microsoft. All rights reserved.

use http::Method;

use super::client::{encode_path, Query};
use super::{DockerApiClient, Error, Transport};
use crate::models::{Volume, VolumeCreateBody, VolumeListResponse, VolumePruneResponse};
use crate::utils::Filters;

#[async_trait::async_trait]
pub trait VolumeApi: Send + Sync {
    async fn volume_list(&self, filters: Option<&Filters>) -> Result<VolumeListResponse, Error>;

    async fn volume_create(&self, body: &VolumeCreateBody) -> Result<Volume, Error>;

    async fn volume_inspect(&self, name: &str) -> Result<Volume, Error>;

    async fn volume_delete(&self, name: &str, force: bool) -> Result<(), Error>;

    async fn volume_prune(&self, filters: Option<&Filters>) -> Result<VolumePruneResponse, Error>;
}

#[async_trait::async_trait]
impl<T> VolumeApi for DockerApiClient<T>
where
    T: Transport,
{
    async fn volume_list(&self, filters: Option<&Filters>) -> Result<VolumeListResponse, Error> {
        let query = Query::new().append_filters(filters)?;
        self.call(Method::GET, "/volumes", query).await
    }

    async fn volume_create(&self, body: &VolumeCreateBody) -> Result<Volume, Error> {
        self.call_with_body(Method::POST, "/volumes/create", Query::new(), body)
            .await
    }

    async fn volume_inspect(&self, name: &str) -> Result<Volume, Error> {
        let path = format!("/volumes/{}", encode_path(name));
        self.call(Method::GET, &path, Query::new()).await
    }

    async fn volume_delete(&self, name: &str, force: bool) -> Result<(), Error> {
        let path = format!("/volumes/{}", encode_path(name));
        let query = Query::new().append("force", force);
        self.call_no_content(Method::DELETE, &path, query).await
    }

    async fn volume_prune(&self, filters: Option<&Filters>) -> Result<VolumePruneResponse, Error> {
        let query = Query::new().append_filters(filters)?;
        self.call(Method::POST, "/volumes/prune", query).await
    }
}
