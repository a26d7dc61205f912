// Copyright (c) Microsoft. All rights reserved.

use http::Method;

use super::client::Query;
use super::{DockerApiClient, Error, Transport};
use crate::models::BuildPruneResponse;
use crate::utils::Filters;

#[async_trait::async_trait]
pub trait BuildApi: Send + Sync {
    /// Deletes builder cache. `keep_storage` is the amount of disk space in
    /// bytes to keep for cache.
    async fn build_prune(
        &self,
        keep_storage: Option<i64>,
        all: bool,
        filters: Option<&Filters>,
    ) -> Result<BuildPruneResponse, Error>;
}

#[async_trait::async_trait]
impl<T> BuildApi for DockerApiClient<T>
where
    T: Transport,
{
    async fn build_prune(
        &self,
        keep_storage: Option<i64>,
        all: bool,
        filters: Option<&Filters>,
    ) -> Result<BuildPruneResponse, Error> {
        let query = Query::new()
            .append_opt("keep-storage", keep_storage)
            .append("all", all)
            .append_filters(filters)?;
        self.call(Method::POST, "/build/prune", query).await
    }
}
