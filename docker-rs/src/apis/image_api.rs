// Copyright (c) Microsoft. All rights reserved.

use http::Method;

use super::client::{encode_path, Query};
use super::{DockerApiClient, Error, Transport};
use crate::models::{
    HistoryResponseItem, ImageDeleteResponseItem, ImageInspect, ImagePruneResponse, ImageSummary,
};
use crate::utils::Filters;

#[async_trait::async_trait]
pub trait ImageApi: Send + Sync {
    async fn image_list(
        &self,
        all: bool,
        filters: Option<&Filters>,
        digests: bool,
    ) -> Result<Vec<ImageSummary>, Error>;

    async fn image_inspect(&self, name: &str) -> Result<ImageInspect, Error>;

    async fn image_history(&self, name: &str) -> Result<Vec<HistoryResponseItem>, Error>;

    async fn image_tag(&self, name: &str, repo: &str, tag: Option<&str>) -> Result<(), Error>;

    async fn image_delete(
        &self,
        name: &str,
        force: bool,
        noprune: bool,
    ) -> Result<Vec<ImageDeleteResponseItem>, Error>;

    async fn image_prune(&self, filters: Option<&Filters>) -> Result<ImagePruneResponse, Error>;
}

#[async_trait::async_trait]
impl<T> ImageApi for DockerApiClient<T>
where
    T: Transport,
{
    async fn image_list(
        &self,
        all: bool,
        filters: Option<&Filters>,
        digests: bool,
    ) -> Result<Vec<ImageSummary>, Error> {
        let query = Query::new()
            .append("all", all)
            .append_filters(filters)?
            .append("digests", digests);
        self.call(Method::GET, "/images/json", query).await
    }

    async fn image_inspect(&self, name: &str) -> Result<ImageInspect, Error> {
        let path = format!("/images/{}/json", encode_path(name));
        self.call(Method::GET, &path, Query::new()).await
    }

    async fn image_history(&self, name: &str) -> Result<Vec<HistoryResponseItem>, Error> {
        let path = format!("/images/{}/history", encode_path(name));
        self.call(Method::GET, &path, Query::new()).await
    }

    async fn image_tag(&self, name: &str, repo: &str, tag: Option<&str>) -> Result<(), Error> {
        let path = format!("/images/{}/tag", encode_path(name));
        let query = Query::new().append("repo", repo).append_opt("tag", tag);
        self.call_no_content(Method::POST, &path, query).await
    }

    async fn image_delete(
        &self,
        name: &str,
        force: bool,
        noprune: bool,
    ) -> Result<Vec<ImageDeleteResponseItem>, Error> {
        let path = format!("/images/{}", encode_path(name));
        let query = Query::new()
            .append("force", force)
            .append("noprune", noprune);
        self.call(Method::DELETE, &path, query).await
    }

    async fn image_prune(&self, filters: Option<&Filters>) -> Result<ImagePruneResponse, Error> {
        let query = Query::new().append_filters(filters)?;
        self.call(Method::POST, "/images/prune", query).await
    }
}
