//! boutique-adapter-dynamodb - DynamoDB 适配器
//!
//! 负责从配置构建共享的 DynamoDB 客户端。客户端内部自带连接池，
//! 可在并发调用间安全克隆复用。

mod client;

pub use client::create_client;
