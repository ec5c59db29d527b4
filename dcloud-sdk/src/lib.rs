//! # DoubleCloud SDK
//!
//! `dcloud-sdk` wraps the generated gRPC stubs of the DoubleCloud API with clients that
//! resolve their connection lazily, on every call, through an injected [`Connector`].
//!
//! ## Key Components
//!
//! * **[`Connector`]:** The connection provider. Any async function returning a tonic
//!   service can be used, which makes it trivial to plug in auth, pooling or test doubles.
//! * **[`kafka::VersionServiceClient`] & [`logs::ExportServiceClient`]:** One client per
//!   resource family, forwarding each call to the generated stub.
//! * **[`PageIterator`]:** A pull-based cursor over the items returned by a `List` call.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dcloud_sdk::{CallOptions, ChannelConfig, Connector, kafka::VersionServiceClient};
//! use dcloud_sdk::proto::kafka::ListVersionsRequest;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let connector = Connector::lazy(ChannelConfig::new("https://api.double.cloud"))?;
//! let client = VersionServiceClient::new(connector);
//!
//! let request = ListVersionsRequest { project_id: "my-project".into() };
//! let versions = client
//!     .version_iterator(request, CallOptions::new())
//!     .take_all()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports `dcloud-proto` (as [`proto`]), `prost` and `tonic` to ensure that
//! consumers use compatible versions of these underlying dependencies.
pub mod connector;
pub mod error;
pub mod kafka;
pub mod logs;
pub mod options;
pub mod paging;

pub use connector::{ChannelConfig, Connector};
pub use error::{CallError, ConnectError};
pub use options::{CallOptions, CallOptionsError};
pub use paging::{ListPages, PageIterator};

// Re-exports
pub use dcloud_proto as proto;
pub use prost;
pub use tonic;

/// Type alias for the standard boxed error used in generic bounds.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
