//! ProductCatalog gRPC 服务实现

use std::sync::Arc;
use std::time::Duration;

use boutique_errors::{AppError, AppResult};
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, from_items};
use tonic::{Request, Response, Status};
use tracing::debug;

use crate::api::grpc::TraceInfo;
use crate::api::proto::catalog::product_catalog_service_server::ProductCatalogService;
use crate::api::proto::catalog::{
    Empty, GetProductRequest, ListProductsResponse, Money, Product, SearchProductsRequest,
    SearchProductsResponse,
};
use crate::domain::{ProductRecord, ProductStore};

/// ProductCatalog gRPC 服务实现
///
/// 每次调用都重新读取存储，不在服务内持有任何目录状态。
pub struct ProductCatalogServiceImpl<S>
where
    S: ProductStore + 'static,
{
    store: Arc<S>,
    extra_latency: Option<Duration>,
}

impl<S> ProductCatalogServiceImpl<S>
where
    S: ProductStore + 'static,
{
    pub fn new(store: Arc<S>, extra_latency: Option<Duration>) -> Self {
        Self {
            store,
            extra_latency,
        }
    }

    /// 配置了人工延迟时，处理前先挂起
    async fn pause(&self) {
        if let Some(latency) = self.extra_latency {
            tokio::time::sleep(latency).await;
        }
    }

    /// 全量读取目录并转换为响应实体，保持存储的扫描顺序
    ///
    /// 任一记录解码失败则整次调用失败，不返回部分列表。
    async fn load_catalog(&self) -> AppResult<Vec<Product>> {
        let items = self.store.scan().await?;
        let records: Vec<ProductRecord> = from_items(items)
            .map_err(|e| AppError::internal(format!("failed to decode product records: {}", e)))?;

        Ok(records.into_iter().map(record_to_proto).collect())
    }
}

/// 拦截器注入的追踪 ID，未经过拦截器时为空
fn trace_id_of<T>(request: &Request<T>) -> String {
    request
        .extensions()
        .get::<TraceInfo>()
        .map(|t| t.trace_id.clone())
        .unwrap_or_default()
}

/// 记录到响应实体的逐字段转换
fn record_to_proto(record: ProductRecord) -> Product {
    Product {
        id: record.id,
        name: record.name,
        description: record.description,
        picture: record.picture,
        price_usd: Some(Money {
            currency_code: record.price_usd.currency_code,
            units: record.price_usd.units,
            nanos: record.price_usd.nanos,
        }),
        categories: record.categories,
    }
}

#[tonic::async_trait]
impl<S> ProductCatalogService for ProductCatalogServiceImpl<S>
where
    S: ProductStore + 'static,
{
    async fn list_products(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<ListProductsResponse>, Status> {
        self.pause().await;

        let trace_id = trace_id_of(&request);
        let products = self.load_catalog().await.map_err(Status::from)?;
        debug!(%trace_id, count = products.len(), "ListProducts");

        Ok(Response::new(ListProductsResponse { products }))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<Product>, Status> {
        self.pause().await;

        let trace_id = trace_id_of(&request);
        let req = request.into_inner();
        if req.id.is_empty() {
            return Err(AppError::validation("product id is required").into());
        }

        let item = self
            .store
            .get_by_key(&req.id)
            .await
            .map_err(Status::from)?
            .ok_or_else(|| AppError::not_found(format!("no product with ID {}", req.id)))?;

        let record: ProductRecord = from_item(item)
            .map_err(|e| AppError::internal(format!("failed to decode product record: {}", e)))?;
        debug!(%trace_id, id = %record.id, "GetProduct");

        Ok(Response::new(record_to_proto(record)))
    }

    async fn search_products(
        &self,
        request: Request<SearchProductsRequest>,
    ) -> Result<Response<SearchProductsResponse>, Status> {
        self.pause().await;

        let trace_id = trace_id_of(&request);
        let req = request.into_inner();
        // 无索引的线性检索：加载全量目录后在内存中过滤；
        // 空查询串命中全部记录，结果保持扫描顺序
        let catalog = self.load_catalog().await.map_err(Status::from)?;

        let query = req.query.to_lowercase();
        let results: Vec<Product> = catalog
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .collect();
        debug!(%trace_id, query = %req.query, count = results.len(), "SearchProducts");

        Ok(Response::new(SearchProductsResponse { results }))
    }
}
