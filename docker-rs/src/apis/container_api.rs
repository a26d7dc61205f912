// Copyright (c) Microsoft. All rights reserved.

use http::Method;

use super::client::{encode_path, Query};
use super::{DockerApiClient, Error, Transport};
use crate::models::{
    ContainerCreateBody, ContainerCreateResponse, ContainerInspectResponse, ContainerPruneResponse,
    ContainerSummary, ContainerTopResponse, ContainerUpdateBody, ContainerUpdateResponse,
    ContainerWaitResponse,
};
use crate::utils::Filters;

#[async_trait::async_trait]
pub trait ContainerApi: Send + Sync {
    async fn container_list(
        &self,
        all: bool,
        limit: Option<i32>,
        size: bool,
        filters: Option<&Filters>,
    ) -> Result<Vec<ContainerSummary>, Error>;

    async fn container_create(
        &self,
        name: Option<&str>,
        platform: Option<&str>,
        body: &ContainerCreateBody,
    ) -> Result<ContainerCreateResponse, Error>;

    async fn container_inspect(
        &self,
        id: &str,
        size: bool,
    ) -> Result<ContainerInspectResponse, Error>;

    /// Starting a container that is already running succeeds.
    async fn container_start(&self, id: &str) -> Result<(), Error>;

    /// `t` is the number of seconds to wait before killing the container.
    async fn container_stop(&self, id: &str, t: Option<i32>) -> Result<(), Error>;

    async fn container_restart(&self, id: &str, t: Option<i32>) -> Result<(), Error>;

    async fn container_delete(
        &self,
        id: &str,
        remove_volumes: bool,
        force: bool,
        link: bool,
    ) -> Result<(), Error>;

    async fn container_update(
        &self,
        id: &str,
        body: &ContainerUpdateBody,
    ) -> Result<ContainerUpdateResponse, Error>;

    /// Blocks until the container reaches `condition` (`not-running`,
    /// `next-exit` or `removed`).
    async fn container_wait(
        &self,
        id: &str,
        condition: Option<&str>,
    ) -> Result<ContainerWaitResponse, Error>;

    async fn container_top(
        &self,
        id: &str,
        ps_args: Option<&str>,
    ) -> Result<ContainerTopResponse, Error>;

    async fn container_prune(
        &self,
        filters: Option<&Filters>,
    ) -> Result<ContainerPruneResponse, Error>;
}

#[async_trait::async_trait]
impl<T> ContainerApi for DockerApiClient<T>
where
    T: Transport,
{
    async fn container_list(
        &self,
        all: bool,
        limit: Option<i32>,
        size: bool,
        filters: Option<&Filters>,
    ) -> Result<Vec<ContainerSummary>, Error> {
        let query = Query::new()
            .append("all", all)
            .append_opt("limit", limit)
            .append("size", size)
            .append_filters(filters)?;
        self.call(Method::GET, "/containers/json", query).await
    }

    async fn container_create(
        &self,
        name: Option<&str>,
        platform: Option<&str>,
        body: &ContainerCreateBody,
    ) -> Result<ContainerCreateResponse, Error> {
        let query = Query::new()
            .append_opt("name", name)
            .append_opt("platform", platform);
        self.call_with_body(Method::POST, "/containers/create", query, body)
            .await
    }

    async fn container_inspect(
        &self,
        id: &str,
        size: bool,
    ) -> Result<ContainerInspectResponse, Error> {
        let path = format!("/containers/{}/json", encode_path(id));
        let query = Query::new().append("size", size);
        self.call(Method::GET, &path, query).await
    }

    async fn container_start(&self, id: &str) -> Result<(), Error> {
        let path = format!("/containers/{}/start", encode_path(id));
        match self.call_no_content(Method::POST, &path, Query::new()).await {
            Err(err) if err.is_not_modified() => Ok(()),
            result => result,
        }
    }

    async fn container_stop(&self, id: &str, t: Option<i32>) -> Result<(), Error> {
        let path = format!("/containers/{}/stop", encode_path(id));
        let query = Query::new().append_opt("t", t);
        match self.call_no_content(Method::POST, &path, query).await {
            Err(err) if err.is_not_modified() => Ok(()),
            result => result,
        }
    }

    async fn container_restart(&self, id: &str, t: Option<i32>) -> Result<(), Error> {
        let path = format!("/containers/{}/restart", encode_path(id));
        let query = Query::new().append_opt("t", t);
        self.call_no_content(Method::POST, &path, query).await
    }

    async fn container_delete(
        &self,
        id: &str,
        remove_volumes: bool,
        force: bool,
        link: bool,
    ) -> Result<(), Error> {
        let path = format!("/containers/{}", encode_path(id));
        let query = Query::new()
            .append("v", remove_volumes)
            .append("force", force)
            .append("link", link);
        self.call_no_content(Method::DELETE, &path, query).await
    }

    async fn container_update(
        &self,
        id: &str,
        body: &ContainerUpdateBody,
    ) -> Result<ContainerUpdateResponse, Error> {
        let path = format!("/containers/{}/update", encode_path(id));
        self.call_with_body(Method::POST, &path, Query::new(), body)
            .await
    }

    async fn container_wait(
        &self,
        id: &str,
        condition: Option<&str>,
    ) -> Result<ContainerWaitResponse, Error> {
        let path = format!("/containers/{}/wait", encode_path(id));
        let query = Query::new().append_opt("condition", condition);
        self.call(Method::POST, &path, query).await
    }

    async fn container_top(
        &self,
        id: &str,
        ps_args: Option<&str>,
    ) -> Result<ContainerTopResponse, Error> {
        let path = format!("/containers/{}/top", encode_path(id));
        let query = Query::new().append_opt("ps_args", ps_args);
        self.call(Method::GET, &path, query).await
    }

    async fn container_prune(
        &self,
        filters: Option<&Filters>,
    ) -> Result<ContainerPruneResponse, Error> {
        let query = Query::new().append_filters(filters)?;
        self.call(Method::POST, "/containers/prune", query).await
    }
}
