//! Product Catalog Service Library
//!
//! 模块化架构：
//! - `domain`: 商品记录与存储接口
//! - `infrastructure`: DynamoDB 存储实现
//! - `api`: gRPC 服务实现与生成代码

pub mod api;
pub mod domain;
pub mod infrastructure;
