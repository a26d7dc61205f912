// Copyright (c) Microsoft. All rights reserved.

use std::sync::Arc;

use http::header::{CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};
use http::Method;
use log::{debug, Level};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::configuration::Configuration;
use super::transport::Transport;
use super::Error;
use crate::codec;
use crate::models::ErrorResponse;
use crate::presence::FieldType;
use crate::utils::{log_failure, Filters};

// Image references keep their `/`, `:` and `@` separators; the daemon routes
// on the full reference.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/')
    .remove(b':')
    .remove(b'@');

pub(crate) fn encode_path(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Query string parameters of one request, serialized with
/// `application/x-www-form-urlencoded` rules.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Query::default()
    }

    pub(crate) fn append(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub(crate) fn append_opt<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.append(key, value),
            None => self,
        }
    }

    pub(crate) fn append_filters(self, filters: Option<&Filters>) -> Result<Self, Error> {
        let encoded = match filters {
            Some(filters) => filters.encode().map_err(Error::Encode)?,
            None => None,
        };
        Ok(self.append_opt("filters", encoded))
    }

    fn finish(&self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }

        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        Some(serializer.finish())
    }
}

/// Client for every Engine API endpoint group, generic over the HTTP
/// transport that carries the requests.
#[derive(Clone)]
pub struct DockerApiClient<T> {
    transport: T,
    configuration: Arc<Configuration>,
}

impl<T> DockerApiClient<T> {
    pub fn new(transport: T) -> Self {
        DockerApiClient {
            transport,
            configuration: Arc::new(Configuration::default()),
        }
    }

    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = Arc::new(configuration);
        self
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn uri(&self, path: &str, query: &Query) -> String {
        let base_path = self.configuration.base_path.trim_end_matches('/');
        match query.finish() {
            Some(query) => format!("{}{}?{}", base_path, path, query),
            None => format!("{}{}", base_path, path),
        }
    }

    fn request(
        &self,
        method: &Method,
        uri: &str,
        body: Option<Vec<u8>>,
    ) -> Result<http::Request<Vec<u8>>, Error> {
        let mut builder = http::Request::builder().method(method.clone()).uri(uri);
        if let Some(user_agent) = &self.configuration.user_agent {
            builder = builder.header(USER_AGENT, user_agent.as_str());
        }

        let body = match body {
            Some(body) => {
                builder = builder
                    .header(CONTENT_TYPE, "application/json")
                    .header(CONTENT_LENGTH, body.len());
                body
            }
            None => Vec::new(),
        };

        builder.body(body).map_err(|err| Error::InvalidRequest {
            method: method.clone(),
            uri: uri.to_owned(),
            message: err.to_string(),
        })
    }

    fn decode<R>(&self, method: Method, uri: String, body: &[u8]) -> Result<R, Error>
    where
        R: DeserializeOwned + FieldType,
    {
        codec::decode(body, self.configuration.unknown_fields).map_err(|source| {
            debug!("could not decode response of {} {}: {}", method, uri, source);
            Error::Decode {
                method,
                uri,
                source,
            }
        })
    }
}

impl<T> DockerApiClient<T>
where
    T: Transport,
{
    pub(crate) async fn call<R>(&self, method: Method, path: &str, query: Query) -> Result<R, Error>
    where
        R: DeserializeOwned + FieldType,
    {
        let (uri, body) = self.execute(method.clone(), path, &query, None).await?;
        self.decode(method, uri, &body)
    }

    pub(crate) async fn call_with_body<B, R>(
        &self,
        method: Method,
        path: &str,
        query: Query,
        body: &B,
    ) -> Result<R, Error>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned + FieldType,
    {
        let body = codec::to_vec(body).map_err(Error::Encode)?;
        let (uri, body) = self.execute(method.clone(), path, &query, Some(body)).await?;
        self.decode(method, uri, &body)
    }

    pub(crate) async fn call_no_content(
        &self,
        method: Method,
        path: &str,
        query: Query,
    ) -> Result<(), Error> {
        self.execute(method, path, &query, None).await?;
        Ok(())
    }

    pub(crate) async fn call_with_body_no_content<B>(
        &self,
        method: Method,
        path: &str,
        query: Query,
        body: &B,
    ) -> Result<(), Error>
    where
        B: Serialize + Sync + ?Sized,
    {
        let body = codec::to_vec(body).map_err(Error::Encode)?;
        self.execute(method, path, &query, Some(body)).await?;
        Ok(())
    }

    /// Calls an endpoint that answers with plain text rather than JSON.
    pub(crate) async fn call_text(
        &self,
        method: Method,
        path: &str,
        query: Query,
    ) -> Result<String, Error> {
        let (_, body) = self.execute(method, path, &query, None).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Calls an endpoint that answers with a sequence of JSON documents.
    pub(crate) async fn call_stream<R>(
        &self,
        method: Method,
        path: &str,
        query: Query,
    ) -> Result<Vec<R>, Error>
    where
        R: DeserializeOwned + FieldType,
    {
        let (uri, body) = self.execute(method.clone(), path, &query, None).await?;
        codec::decode_stream(&body, self.configuration.unknown_fields).map_err(|source| {
            debug!("could not decode response of {} {}: {}", method, uri, source);
            Error::Decode {
                method,
                uri,
                source,
            }
        })
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<Vec<u8>>,
    ) -> Result<(String, Vec<u8>), Error> {
        let uri = self.uri(path, query);
        let request = self.request(&method, &uri, body)?;

        debug!("{} {}", method, uri);
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(source) => {
                let err = Error::Transport {
                    method,
                    uri,
                    source,
                };
                log_failure(Level::Warn, &err);
                return Err(err);
            }
        };

        let (parts, body) = response.into_parts();
        let status = parts.status;
        if status.is_success() {
            return Ok((uri, body));
        }

        let err = Error::Api {
            message: error_message(&body),
            method,
            uri,
            status,
        };
        if status.is_client_error() || status.is_server_error() {
            log_failure(Level::Warn, &err);
        } else {
            debug!("{}", err);
        }
        Err(err)
    }
}

fn error_message(body: &[u8]) -> String {
    codec::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|response| response.message().map(ToOwned::to_owned))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_owned())
}
