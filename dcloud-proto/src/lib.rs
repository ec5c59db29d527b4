//! # DoubleCloud Protocol
//!
//! Protobuf messages and gRPC stubs generated at build time from the `.proto` files under
//! `proto/`. Both client and server halves are emitted: the clients back `dcloud-sdk`,
//! the servers let tests stand up in-process fakes.
//!
//! The module tree mirrors the Protobuf packages so that cross-package references in the
//! generated code (e.g. `doublecloud.logs.v1` returning `doublecloud.v1.Operation`) resolve.

pub mod doublecloud {
    pub mod v1 {
        include!(concat!(env!("OUT_DIR"), "/doublecloud.v1.rs"));
    }

    pub mod kafka {
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/doublecloud.kafka.v1.rs"));
        }
    }

    pub mod logs {
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/doublecloud.logs.v1.rs"));
        }
    }
}

pub use doublecloud::kafka::v1 as kafka;
pub use doublecloud::logs::v1 as logs;
pub use doublecloud::v1::Operation;
