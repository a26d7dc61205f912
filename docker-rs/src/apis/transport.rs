// Copyright (c) Microsoft. All rights reserved.

use std::sync::Arc;

/// Sends one fully-buffered HTTP request to the daemon.
///
/// Connection management (Unix socket, named pipe, TCP and TLS) lives behind
/// this trait; the endpoint clients only build requests and interpret
/// responses.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> anyhow::Result<http::Response<Vec<u8>>>;
}

#[async_trait::async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn send(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> anyhow::Result<http::Response<Vec<u8>>> {
        (**self).send(request).await
    }
}
