//! gRPC 生成代码引入
//!
//! 生成代码随仓库提交（定义见 proto/ 目录），构建不依赖 protoc。

pub mod catalog {
    include!("grpc/boutique.catalog.v1.rs");
}

pub mod health {
    include!("grpc/grpc.health.v1.rs");
}
