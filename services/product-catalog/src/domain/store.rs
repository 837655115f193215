//! 商品存储接口

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use boutique_errors::AppResult;

/// 单条记录在存储中的原生属性形态
pub type RecordAttributes = HashMap<String, AttributeValue>;

/// 商品存储接口
///
/// 实现方负责并发安全；服务在并发调用间共享同一个实例。
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 全表扫描，按存储的迭代顺序返回全部记录
    async fn scan(&self) -> AppResult<Vec<RecordAttributes>>;

    /// 按主键读取单条记录，不存在时返回 None
    async fn get_by_key(&self, id: &str) -> AppResult<Option<RecordAttributes>>;
}
