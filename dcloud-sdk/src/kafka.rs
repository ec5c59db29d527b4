//! # Kafka
//!
//! Client for `doublecloud.kafka.v1.VersionService`.
use crate::{
    BoxError,
    connector::Connector,
    error::{CallError, trace_status},
    options::CallOptions,
    paging::{ListPages, PageIterator},
};
use dcloud_proto::kafka::{
    ListVersionsRequest, ListVersionsResponse, Version,
    version_service_client::VersionServiceClient as VersionServiceStub,
};
use http_body::Body as HttpBody;
use tonic::{client::GrpcService, transport::Channel};

/// Iterator over the versions returned by [`VersionServiceClient::list`].
pub type VersionIterator<S = Channel> = PageIterator<VersionServiceClient<S>>;

/// A `VersionService` client resolving its connection on every call.
pub struct VersionServiceClient<S = Channel> {
    connector: Connector<S>,
}

impl<S> Clone for VersionServiceClient<S> {
    fn clone(&self) -> Self {
        Self {
            connector: self.connector.clone(),
        }
    }
}

impl<S> VersionServiceClient<S> {
    pub fn new(connector: Connector<S>) -> Self {
        Self { connector }
    }
}

impl<S> VersionServiceClient<S>
where
    S: GrpcService<tonic::body::Body> + 'static,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Lists the Kafka versions available to the project.
    pub async fn list(
        &self,
        request: ListVersionsRequest,
        options: CallOptions,
    ) -> Result<ListVersionsResponse, CallError> {
        let conn = self.connector.connect().await?;
        let response = VersionServiceStub::new(conn)
            .list(options.into_request(request))
            .await
            .inspect_err(|status| trace_status("VersionService.List", status))?;

        Ok(response.into_inner())
    }

    /// Returns an iterator over the versions of a single `List` call.
    ///
    /// No request is sent until the iterator is first advanced.
    pub fn version_iterator(
        &self,
        request: ListVersionsRequest,
        options: CallOptions,
    ) -> VersionIterator<S> {
        PageIterator::new(self.clone(), request, options)
    }
}

impl<S> ListPages for VersionServiceClient<S>
where
    S: GrpcService<tonic::body::Body> + 'static,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    type Request = ListVersionsRequest;
    type Item = Version;

    async fn list_page(
        &self,
        request: ListVersionsRequest,
        options: CallOptions,
    ) -> Result<Vec<Version>, CallError> {
        Ok(self.list(request, options).await?.versions)
    }
}
