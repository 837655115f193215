//! Product Catalog Service - 商品目录服务入口

use std::sync::Arc;
use std::time::Duration;

use boutique_adapter_dynamodb::create_client;
use boutique_bootstrap::{init_runtime, shutdown_signal};
use boutique_config::AppConfig;
use tonic::transport::Server;
use tracing::info;

use product_catalog::api::grpc::{
    HealthServiceImpl, ProductCatalogServiceImpl, tracing_interceptor,
};
use product_catalog::api::proto::catalog::product_catalog_service_server::ProductCatalogServiceServer;
use product_catalog::api::proto::health::health_server::HealthServer;
use product_catalog::infrastructure::persistence::DynamoProductStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化运行时
    init_runtime(&config);

    info!("Starting Product Catalog Service");

    // 创建存储客户端与商品存储
    let client = create_client(&config.store).await;
    let store = Arc::new(DynamoProductStore::new(
        client,
        config.store.table_name.clone(),
    ));

    let extra_latency = config.server.extra_latency_ms.map(Duration::from_millis);
    if let Some(latency) = extra_latency {
        info!(?latency, "extra latency enabled");
    }

    // 创建 gRPC 服务
    let catalog_service = ProductCatalogServiceImpl::new(store, extra_latency);
    let health_service = HealthServiceImpl::new();

    let addr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!(%addr, "gRPC server starting");

    // 启动 gRPC 服务器，收到关闭信号后优雅退出
    Server::builder()
        .add_service(ProductCatalogServiceServer::with_interceptor(
            catalog_service,
            tracing_interceptor,
        ))
        .add_service(HealthServer::new(health_service))
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}
