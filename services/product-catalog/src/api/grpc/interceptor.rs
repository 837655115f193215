//! gRPC 追踪拦截器
//!
//! 从请求元数据中提取追踪 ID 注入请求扩展，供各处理函数记录日志。

use tonic::{Request, Status};
use uuid::Uuid;

/// 按优先级尝试的追踪元数据键
const TRACE_ID_KEYS: [&str; 3] = ["x-trace-id", "x-request-id", "x-correlation-id"];

/// 追踪信息
#[derive(Debug, Clone)]
pub struct TraceInfo {
    pub trace_id: String,
}

/// gRPC 拦截器：提取追踪 ID，缺失时生成一个
pub fn tracing_interceptor(mut req: Request<()>) -> Result<Request<()>, Status> {
    let trace_id = TRACE_ID_KEYS
        .iter()
        .find_map(|key| {
            req.metadata()
                .get(*key)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| Uuid::now_v7().to_string());

    req.extensions_mut().insert(TraceInfo { trace_id });

    Ok(req)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_id_taken_from_metadata() {
        let mut req = Request::new(());
        req.metadata_mut()
            .insert("x-request-id", "req-42".parse().unwrap());

        let req = tracing_interceptor(req).expect("interceptor should pass");
        let info = req.extensions().get::<TraceInfo>().expect("trace info set");

        assert_eq!(info.trace_id, "req-42");
    }

    #[test]
    fn test_trace_id_generated_when_absent() {
        let req = tracing_interceptor(Request::new(())).expect("interceptor should pass");
        let info = req.extensions().get::<TraceInfo>().expect("trace info set");

        assert!(!info.trace_id.is_empty());
    }
}
