#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # copybench-core
//!
//! Workload generation, the container wrappers the benchmarks copy and alias,
//! and the error types shared across the workspace.

pub mod error;
pub mod object;
pub mod result;
pub mod workload;

pub use error::Error;
pub use object::{
    OwnedObject, SharedObject, WorkloadView, create_owned_object, create_shared_object,
};
pub use result::{Result, ResultExt};
pub use workload::{DEFAULT_WORKLOAD_LEN, Element, SENTINEL};
