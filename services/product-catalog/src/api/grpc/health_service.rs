//! Health gRPC 服务实现
//!
//! Check 无条件返回 SERVING：存活只表示进程在运行，按约定不探测
//! 商品存储的可达性（已知局限，由周边基础设施另行监控依赖）。

use boutique_errors::AppError;
use futures::stream::BoxStream;
use tonic::{Request, Response, Status};

use crate::api::proto::health::health_check_response::ServingStatus;
use crate::api::proto::health::health_server::Health;
use crate::api::proto::health::{HealthCheckRequest, HealthCheckResponse};

/// Health gRPC 服务实现
#[derive(Debug, Default)]
pub struct HealthServiceImpl {}

impl HealthServiceImpl {
    pub fn new() -> Self {
        Self {}
    }
}

#[tonic::async_trait]
impl Health for HealthServiceImpl {
    async fn check(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        Ok(Response::new(HealthCheckResponse {
            status: ServingStatus::Serving as i32,
        }))
    }

    type WatchStream = BoxStream<'static, Result<HealthCheckResponse, Status>>;

    async fn watch(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        Err(AppError::unimplemented("health check via Watch not implemented").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_reports_serving() {
        let service = HealthServiceImpl::new();

        let response = service
            .check(Request::new(HealthCheckRequest::default()))
            .await
            .expect("check should succeed");

        assert_eq!(response.get_ref().status, ServingStatus::Serving as i32);
    }

    #[tokio::test]
    async fn test_watch_is_unimplemented() {
        let service = HealthServiceImpl::new();

        let status = service
            .watch(Request::new(HealthCheckRequest::default()))
            .await
            .err()
            .expect("watch should fail");

        assert_eq!(status.code(), tonic::Code::Unimplemented);
    }
}
