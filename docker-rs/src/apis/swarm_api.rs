// Copyright (c) Microsoft. All rights reserved.

use http::Method;

use super::client::{encode_path, Query};
use super::{DockerApiClient, Error, Transport};
use crate::models::{
    Config, ConfigSpec, IdResponse, Node, Secret, SecretSpec, Service, ServiceCreateResponse,
    ServiceSpec, ServiceUpdateResponse, Swarm, SwarmInitRequest, SwarmJoinRequest,
    SwarmUnlockRequest, Task, UnlockKeyResponse,
};
use crate::utils::Filters;

/// Swarm mode endpoints: the cluster itself and the nodes, services, tasks,
/// secrets and configs it manages.
#[async_trait::async_trait]
pub trait SwarmApi: Send + Sync {
    async fn swarm_inspect(&self) -> Result<Swarm, Error>;

    /// Returns the ID of the node that initialized the swarm.
    async fn swarm_init(&self, body: &SwarmInitRequest) -> Result<String, Error>;

    async fn swarm_join(&self, body: &SwarmJoinRequest) -> Result<(), Error>;

    async fn swarm_leave(&self, force: bool) -> Result<(), Error>;

    async fn swarm_unlockkey(&self) -> Result<UnlockKeyResponse, Error>;

    async fn swarm_unlock(&self, body: &SwarmUnlockRequest) -> Result<(), Error>;

    async fn node_list(&self, filters: Option<&Filters>) -> Result<Vec<Node>, Error>;

    async fn node_inspect(&self, id: &str) -> Result<Node, Error>;

    async fn service_list(
        &self,
        filters: Option<&Filters>,
        status: bool,
    ) -> Result<Vec<Service>, Error>;

    async fn service_inspect(&self, id: &str, insert_defaults: bool) -> Result<Service, Error>;

    async fn service_create(&self, body: &ServiceSpec) -> Result<ServiceCreateResponse, Error>;

    /// `version` must be the current `Version.Index` of the service, to
    /// guard against conflicting writes.
    async fn service_update(
        &self,
        id: &str,
        version: u64,
        body: &ServiceSpec,
    ) -> Result<ServiceUpdateResponse, Error>;

    async fn service_delete(&self, id: &str) -> Result<(), Error>;

    async fn task_list(&self, filters: Option<&Filters>) -> Result<Vec<Task>, Error>;

    async fn task_inspect(&self, id: &str) -> Result<Task, Error>;

    async fn secret_list(&self, filters: Option<&Filters>) -> Result<Vec<Secret>, Error>;

    async fn secret_create(&self, body: &SecretSpec) -> Result<IdResponse, Error>;

    async fn secret_delete(&self, id: &str) -> Result<(), Error>;

    async fn config_list(&self, filters: Option<&Filters>) -> Result<Vec<Config>, Error>;

    async fn config_create(&self, body: &ConfigSpec) -> Result<IdResponse, Error>;

    async fn config_delete(&self, id: &str) -> Result<(), Error>;
}

#[async_trait::async_trait]
impl<T> SwarmApi for DockerApiClient<T>
where
    T: Transport,
{
    async fn swarm_inspect(&self) -> Result<Swarm, Error> {
        self.call(Method::GET, "/swarm", Query::new()).await
    }

    async fn swarm_init(&self, body: &SwarmInitRequest) -> Result<String, Error> {
        self.call_with_body(Method::POST, "/swarm/init", Query::new(), body)
            .await
    }

    async fn swarm_join(&self, body: &SwarmJoinRequest) -> Result<(), Error> {
        self.call_with_body_no_content(Method::POST, "/swarm/join", Query::new(), body)
            .await
    }

    async fn swarm_leave(&self, force: bool) -> Result<(), Error> {
        let query = Query::new().append("force", force);
        self.call_no_content(Method::POST, "/swarm/leave", query)
            .await
    }

    async fn swarm_unlockkey(&self) -> Result<UnlockKeyResponse, Error> {
        self.call(Method::GET, "/swarm/unlockkey", Query::new())
            .await
    }

    async fn swarm_unlock(&self, body: &SwarmUnlockRequest) -> Result<(), Error> {
        self.call_with_body_no_content(Method::POST, "/swarm/unlock", Query::new(), body)
            .await
    }

    async fn node_list(&self, filters: Option<&Filters>) -> Result<Vec<Node>, Error> {
        let query = Query::new().append_filters(filters)?;
        self.call(Method::GET, "/nodes", query).await
    }

    async fn node_inspect(&self, id: &str) -> Result<Node, Error> {
        let path = format!("/nodes/{}", encode_path(id));
        self.call(Method::GET, &path, Query::new()).await
    }

    async fn service_list(
        &self,
        filters: Option<&Filters>,
        status: bool,
    ) -> Result<Vec<Service>, Error> {
        let query = Query::new()
            .append_filters(filters)?
            .append("status", status);
        self.call(Method::GET, "/services", query).await
    }

    async fn service_inspect(&self, id: &str, insert_defaults: bool) -> Result<Service, Error> {
        let path = format!("/services/{}", encode_path(id));
        let query = Query::new().append("insertDefaults", insert_defaults);
        self.call(Method::GET, &path, query).await
    }

    async fn service_create(&self, body: &ServiceSpec) -> Result<ServiceCreateResponse, Error> {
        self.call_with_body(Method::POST, "/services/create", Query::new(), body)
            .await
    }

    async fn service_update(
        &self,
        id: &str,
        version: u64,
        body: &ServiceSpec,
    ) -> Result<ServiceUpdateResponse, Error> {
        let path = format!("/services/{}/update", encode_path(id));
        let query = Query::new().append("version", version);
        self.call_with_body(Method::POST, &path, query, body).await
    }

    async fn service_delete(&self, id: &str) -> Result<(), Error> {
        let path = format!("/services/{}", encode_path(id));
        self.call_no_content(Method::DELETE, &path, Query::new())
            .await
    }

    async fn task_list(&self, filters: Option<&Filters>) -> Result<Vec<Task>, Error> {
        let query = Query::new().append_filters(filters)?;
        self.call(Method::GET, "/tasks", query).await
    }

    async fn task_inspect(&self, id: &str) -> Result<Task, Error> {
        let path = format!("/tasks/{}", encode_path(id));
        self.call(Method::GET, &path, Query::new()).await
    }

    async fn secret_list(&self, filters: Option<&Filters>) -> Result<Vec<Secret>, Error> {
        let query = Query::new().append_filters(filters)?;
        self.call(Method::GET, "/secrets", query).await
    }

    async fn secret_create(&self, body: &SecretSpec) -> Result<IdResponse, Error> {
        self.call_with_body(Method::POST, "/secrets/create", Query::new(), body)
            .await
    }

    async fn secret_delete(&self, id: &str) -> Result<(), Error> {
        let path = format!("/secrets/{}", encode_path(id));
        self.call_no_content(Method::DELETE, &path, Query::new())
            .await
    }

    async fn config_list(&self, filters: Option<&Filters>) -> Result<Vec<Config>, Error> {
        let query = Query::new().append_filters(filters)?;
        self.call(Method::GET, "/configs", query).await
    }

    async fn config_create(&self, body: &ConfigSpec) -> Result<IdResponse, Error> {
        self.call_with_body(Method::POST, "/configs/create", Query::new(), body)
            .await
    }

    async fn config_delete(&self, id: &str) -> Result<(), Error> {
        let path = format!("/configs/{}", encode_path(id));
        self.call_no_content(Method::DELETE, &path, Query::new())
            .await
    }
}
