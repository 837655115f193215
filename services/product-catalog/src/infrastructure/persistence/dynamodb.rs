//! DynamoDB 商品存储实现

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use boutique_errors::{AppError, AppResult};

use crate::domain::{ProductStore, RecordAttributes};

/// 基于 DynamoDB 的商品存储
///
/// 每个操作只发起一次存储往返，失败时不重试。
pub struct DynamoProductStore {
    client: Client,
    table_name: String,
}

impl DynamoProductStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ProductStore for DynamoProductStore {
    async fn scan(&self) -> AppResult<Vec<RecordAttributes>> {
        // 目录量级小，全表 Scan 一次取回；索引化检索是独立子系统的职责
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| {
                AppError::database(format!(
                    "failed to scan table {}: {}",
                    self.table_name,
                    DisplayErrorContext(e)
                ))
            })?;

        Ok(output.items.unwrap_or_default())
    }

    async fn get_by_key(&self, id: &str) -> AppResult<Option<RecordAttributes>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| {
                AppError::database(format!(
                    "failed to read product {}: {}",
                    id,
                    DisplayErrorContext(e)
                ))
            })?;

        Ok(output.item)
    }
}
