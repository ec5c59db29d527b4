#![allow(dead_code)]

use dcloud_proto::{
    Operation,
    doublecloud::v1::operation::Status as OperationStatus,
    kafka::{ListVersionsRequest, ListVersionsResponse, Version, version_service_server},
    logs::{
        CreateExportRequest, DeleteExportRequest, GetExportRequest, ListExportRequest,
        ListExportResponse, LogsExport, log_export_service_server,
    },
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tonic::{Request, Response, Status};

pub use dcloud_proto::kafka::version_service_server::VersionServiceServer;
pub use dcloud_proto::logs::log_export_service_server::LogExportServiceServer;

/// Counts the calls reaching a fake service and remembers the last request metadata.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<AtomicUsize>,
    last_request_id: Arc<Mutex<Option<String>>>,
}

impl Recorder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request_id(&self) -> Option<String> {
        self.last_request_id.lock().unwrap().clone()
    }

    fn record<T>(&self, request: &Request<T>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let request_id = request
            .metadata()
            .get("x-request-id")
            .map(|v| v.to_str().unwrap().to_string());
        *self.last_request_id.lock().unwrap() = request_id;
    }
}

pub fn version(id: &str) -> Version {
    Version {
        id: id.to_string(),
        deprecated: false,
    }
}

pub struct FakeVersionService {
    pub versions: Vec<Version>,
    pub failure: Option<Status>,
    pub recorder: Recorder,
}

impl FakeVersionService {
    pub fn with_versions(ids: &[&str], recorder: Recorder) -> Self {
        Self {
            versions: ids.iter().map(|id| version(id)).collect(),
            failure: None,
            recorder,
        }
    }

    pub fn failing(status: Status, recorder: Recorder) -> Self {
        Self {
            versions: vec![],
            failure: Some(status),
            recorder,
        }
    }
}

#[tonic::async_trait]
impl version_service_server::VersionService for FakeVersionService {
    async fn list(
        &self,
        request: Request<ListVersionsRequest>,
    ) -> Result<Response<ListVersionsResponse>, Status> {
        self.recorder.record(&request);

        if let Some(status) = &self.failure {
            return Err(status.clone());
        }

        Ok(Response::new(ListVersionsResponse {
            versions: self.versions.clone(),
        }))
    }
}

/// An in-memory log export store, keyed by export id.
#[derive(Default)]
pub struct FakeLogExportService {
    pub exports: Mutex<Vec<LogsExport>>,
    pub recorder: Recorder,
}

impl FakeLogExportService {
    pub fn new(recorder: Recorder) -> Self {
        Self {
            exports: Mutex::default(),
            recorder,
        }
    }
}

fn operation(resource_id: &str, project_id: &str, description: &str) -> Operation {
    Operation {
        id: format!("op-{resource_id}"),
        project_id: project_id.to_string(),
        description: description.to_string(),
        status: OperationStatus::Done as i32,
        resource_id: resource_id.to_string(),
        ..Default::default()
    }
}

#[tonic::async_trait]
impl log_export_service_server::LogExportService for FakeLogExportService {
    async fn create(
        &self,
        request: Request<CreateExportRequest>,
    ) -> Result<Response<Operation>, Status> {
        self.recorder.record(&request);
        let req = request.into_inner();

        if req.name.is_empty() {
            return Err(Status::invalid_argument("name is required"));
        }

        let mut exports = self.exports.lock().unwrap();
        let id = format!("export-{}", exports.len() + 1);
        exports.push(LogsExport {
            id: id.clone(),
            project_id: req.project_id.clone(),
            name: req.name,
            description: req.description,
            sources: req.sources,
            sink: req.sink,
            ..Default::default()
        });

        Ok(Response::new(operation(
            &id,
            &req.project_id,
            "create logs export",
        )))
    }

    async fn delete(
        &self,
        request: Request<DeleteExportRequest>,
    ) -> Result<Response<Operation>, Status> {
        self.recorder.record(&request);
        let req = request.into_inner();

        let mut exports = self.exports.lock().unwrap();
        let Some(pos) = exports.iter().position(|e| e.id == req.export_id) else {
            return Err(Status::not_found(format!(
                "export '{}' not found",
                req.export_id
            )));
        };
        let removed = exports.remove(pos);

        Ok(Response::new(operation(
            &removed.id,
            &removed.project_id,
            "delete logs export",
        )))
    }

    async fn get(
        &self,
        request: Request<GetExportRequest>,
    ) -> Result<Response<LogsExport>, Status> {
        self.recorder.record(&request);
        let req = request.into_inner();

        self.exports
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == req.export_id)
            .cloned()
            .map(Response::new)
            .ok_or_else(|| Status::not_found(format!("export '{}' not found", req.export_id)))
    }

    async fn list(
        &self,
        request: Request<ListExportRequest>,
    ) -> Result<Response<ListExportResponse>, Status> {
        self.recorder.record(&request);
        let req = request.into_inner();

        let exports = self
            .exports
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.project_id == req.project_id)
            .cloned()
            .collect();

        Ok(Response::new(ListExportResponse { exports }))
    }
}
