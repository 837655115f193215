//! gRPC API 实现

mod catalog_service;
mod health_service;
mod interceptor;

pub use catalog_service::ProductCatalogServiceImpl;
pub use health_service::HealthServiceImpl;
pub use interceptor::{TraceInfo, tracing_interceptor};
