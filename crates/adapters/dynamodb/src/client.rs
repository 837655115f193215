//! DynamoDB 客户端构建

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use boutique_config::StoreConfig;
use tracing::info;

/// 区域链兜底值
const FALLBACK_REGION: &str = "us-east-1";

/// 创建 DynamoDB 客户端
///
/// 凭证由 AWS 凭证链从环境解析，配置只提供区域与可选端点。
pub async fn create_client(config: &StoreConfig) -> Client {
    let region_provider = RegionProviderChain::first_try(config.region.clone().map(Region::new))
        .or_default_provider()
        .or_else(Region::new(FALLBACK_REGION));

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
    if let Some(endpoint) = &config.endpoint_url {
        info!(%endpoint, "Using DynamoDB endpoint override");
        builder = builder.endpoint_url(endpoint);
    }

    let client = Client::from_conf(builder.build());
    info!(table = %config.table_name, "DynamoDB client initialized");

    client
}
