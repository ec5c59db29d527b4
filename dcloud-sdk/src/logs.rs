//! # Logs
//!
//! Client for `doublecloud.logs.v1.LogExportService`, managing exports of cluster logs.
//!
//! `create` and `delete` return the [`Operation`] tracking the change on the server side;
//! this client does not wait for it to complete.
use crate::{
    BoxError,
    connector::Connector,
    error::{CallError, trace_status},
    options::CallOptions,
    paging::{ListPages, PageIterator},
};
use dcloud_proto::{
    Operation,
    logs::{
        CreateExportRequest, DeleteExportRequest, GetExportRequest, ListExportRequest,
        ListExportResponse, LogsExport,
        log_export_service_client::LogExportServiceClient as LogExportServiceStub,
    },
};
use http_body::Body as HttpBody;
use tonic::{client::GrpcService, transport::Channel};

/// Iterator over the exports returned by [`ExportServiceClient::list`].
pub type ExportIterator<S = Channel> = PageIterator<ExportServiceClient<S>>;

/// A `LogExportService` client resolving its connection on every call.
pub struct ExportServiceClient<S = Channel> {
    connector: Connector<S>,
}

impl<S> Clone for ExportServiceClient<S> {
    fn clone(&self) -> Self {
        Self {
            connector: self.connector.clone(),
        }
    }
}

impl<S> ExportServiceClient<S> {
    pub fn new(connector: Connector<S>) -> Self {
        Self { connector }
    }
}

impl<S> ExportServiceClient<S>
where
    S: GrpcService<tonic::body::Body> + 'static,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    async fn stub(&self) -> Result<LogExportServiceStub<S>, CallError> {
        let conn = self.connector.connect().await?;
        Ok(LogExportServiceStub::new(conn))
    }

    pub async fn create(
        &self,
        request: CreateExportRequest,
        options: CallOptions,
    ) -> Result<Operation, CallError> {
        let response = self
            .stub()
            .await?
            .create(options.into_request(request))
            .await
            .inspect_err(|status| trace_status("LogExportService.Create", status))?;

        Ok(response.into_inner())
    }

    pub async fn delete(
        &self,
        request: DeleteExportRequest,
        options: CallOptions,
    ) -> Result<Operation, CallError> {
        let response = self
            .stub()
            .await?
            .delete(options.into_request(request))
            .await
            .inspect_err(|status| trace_status("LogExportService.Delete", status))?;

        Ok(response.into_inner())
    }

    pub async fn get(
        &self,
        request: GetExportRequest,
        options: CallOptions,
    ) -> Result<LogsExport, CallError> {
        let response = self
            .stub()
            .await?
            .get(options.into_request(request))
            .await
            .inspect_err(|status| trace_status("LogExportService.Get", status))?;

        Ok(response.into_inner())
    }

    pub async fn list(
        &self,
        request: ListExportRequest,
        options: CallOptions,
    ) -> Result<ListExportResponse, CallError> {
        let response = self
            .stub()
            .await?
            .list(options.into_request(request))
            .await
            .inspect_err(|status| trace_status("LogExportService.List", status))?;

        Ok(response.into_inner())
    }

    /// Returns an iterator over the exports of a single `List` call.
    ///
    /// No request is sent until the iterator is first advanced.
    pub fn export_iterator(
        &self,
        request: ListExportRequest,
        options: CallOptions,
    ) -> ExportIterator<S> {
        PageIterator::new(self.clone(), request, options)
    }
}

impl<S> ListPages for ExportServiceClient<S>
where
    S: GrpcService<tonic::body::Body> + 'static,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    type Request = ListExportRequest;
    type Item = LogsExport;

    async fn list_page(
        &self,
        request: ListExportRequest,
        options: CallOptions,
    ) -> Result<Vec<LogsExport>, CallError> {
        Ok(self.list(request, options).await?.exports)
    }
}
