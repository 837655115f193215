//! API 层

pub mod grpc;
pub mod proto;
