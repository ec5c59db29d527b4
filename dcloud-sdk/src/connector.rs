//! # Connection Providers
//!
//! Clients never own a connection. Each call asks its [`Connector`] for one, which keeps
//! dialing, pooling and auth entirely in the hands of whoever builds the connector.
//!
//! A connector wraps any async function returning a tonic service `S`:
//!
//! * In production `S` is a [`Channel`], built from a [`ChannelConfig`] with
//!   [`Connector::lazy`] or [`Connector::cached`].
//! * In tests `S` can be a generated server (e.g. `VersionServiceServer::new(fake)`),
//!   handed out with [`Connector::from_service`], so calls never touch the network.
use crate::error::ConnectError;
use futures_util::{FutureExt, future::BoxFuture};
use std::{fmt, future::Future, sync::Arc, time::Duration};
use tokio::sync::OnceCell;
use tonic::transport::{Channel, Endpoint};

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings used to build a [`Channel`].
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// The server URI (e.g., `https://api.double.cloud`).
    pub address: String,
    /// Maximum time spent establishing the connection.
    pub connect_timeout: Option<Duration>,
    /// Deadline applied to every request sent through the channel.
    pub timeout: Option<Duration>,
    /// Interval of HTTP/2 keep-alive pings.
    pub keep_alive_interval: Option<Duration>,
}

impl ChannelConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
            timeout: None,
            keep_alive_interval: None,
        }
    }

    fn endpoint(&self) -> Result<Endpoint, ConnectError> {
        let mut endpoint = Endpoint::new(self.address.clone())
            .map_err(|e| ConnectError::InvalidUrl(self.address.clone(), e))?;

        if let Some(timeout) = self.connect_timeout {
            endpoint = endpoint.connect_timeout(timeout);
        }
        if let Some(timeout) = self.timeout {
            endpoint = endpoint.timeout(timeout);
        }
        if let Some(interval) = self.keep_alive_interval {
            endpoint = endpoint.http2_keep_alive_interval(interval);
        }

        Ok(endpoint)
    }
}

type ConnectFuture<S> = BoxFuture<'static, Result<S, ConnectError>>;

/// Resolves a connection of type `S` on demand.
pub struct Connector<S = Channel> {
    resolve: Arc<dyn Fn() -> ConnectFuture<S> + Send + Sync>,
}

impl<S> Clone for Connector<S> {
    fn clone(&self) -> Self {
        Self {
            resolve: Arc::clone(&self.resolve),
        }
    }
}

impl<S> fmt::Debug for Connector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connector").finish_non_exhaustive()
    }
}

impl<S: 'static> Connector<S> {
    /// Builds a connector from an async function.
    ///
    /// The function is invoked once per client call.
    pub fn new<F, Fut>(resolve: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<S, ConnectError>> + Send + 'static,
    {
        Self {
            resolve: Arc::new(move || resolve().boxed()),
        }
    }

    /// Hands out clones of an already built service.
    pub fn from_service(service: S) -> Self
    where
        S: Clone + Send + Sync,
    {
        Self::new(move || {
            let service = service.clone();
            async move { Ok(service) }
        })
    }

    /// Resolves a connection.
    pub async fn connect(&self) -> Result<S, ConnectError> {
        (self.resolve)()
            .await
            .inspect_err(|err| tracing::debug!(error = %err, "connection resolution failed"))
    }
}

impl Connector<Channel> {
    /// Validates the address and returns a connector sharing a single lazily connected
    /// channel. The first call dials; tonic reconnects transparently afterwards.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn lazy(config: ChannelConfig) -> Result<Self, ConnectError> {
        let channel = config.endpoint()?.connect_lazy();
        Ok(Self::from_service(channel))
    }

    /// Validates the address and returns a connector that dials on first use and caches
    /// the resulting channel.
    ///
    /// A failed dial surfaces as [`ConnectError::ConnectionFailed`] and is attempted
    /// again on the next resolution.
    pub fn cached(config: ChannelConfig) -> Result<Self, ConnectError> {
        let endpoint = config.endpoint()?;
        let cell = Arc::new(OnceCell::<Channel>::new());

        Ok(Self::new(move || {
            let endpoint = endpoint.clone();
            let cell = Arc::clone(&cell);
            async move {
                let channel = cell
                    .get_or_try_init(|| async {
                        tracing::debug!(uri = %endpoint.uri(), "dialing");
                        endpoint.connect().await.map_err(|e| {
                            ConnectError::ConnectionFailed(endpoint.uri().to_string(), e)
                        })
                    })
                    .await?;
                Ok(channel.clone())
            }
        }))
    }
}
