//! 商品记录
//!
//! 与存储中的属性形态逐字段对应，属性名为 camelCase。

use serde::{Deserialize, Serialize};

/// 持久化的商品记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub picture: String,
    pub price_usd: PriceRecord,
    pub categories: Vec<String>,
}

/// 定点金额（units 与 nanos 同号）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub currency_code: String,
    pub units: i64,
    pub nanos: i32,
}
