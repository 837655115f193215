//! 商品目录服务集成测试
//!
//! 通过内存假存储直接驱动 gRPC 服务实现，不经过网络。

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use boutique_errors::{AppError, AppResult};
use serde_dynamo::aws_sdk_dynamodb_1::to_item;
use tonic::{Code, Request};

use product_catalog::api::grpc::ProductCatalogServiceImpl;
use product_catalog::api::proto::catalog::product_catalog_service_server::ProductCatalogService;
use product_catalog::api::proto::catalog::{Empty, GetProductRequest, SearchProductsRequest};
use product_catalog::domain::{PriceRecord, ProductRecord, ProductStore, RecordAttributes};

/// 内存假存储，scan 按插入顺序返回
#[derive(Default)]
struct InMemoryProductStore {
    items: Vec<RecordAttributes>,
}

impl InMemoryProductStore {
    fn with_records(records: &[ProductRecord]) -> Self {
        let items = records
            .iter()
            .map(|r| to_item(r).expect("record should serialize"))
            .collect();
        Self { items }
    }

    fn with_items(items: Vec<RecordAttributes>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn scan(&self) -> AppResult<Vec<RecordAttributes>> {
        Ok(self.items.clone())
    }

    async fn get_by_key(&self, id: &str) -> AppResult<Option<RecordAttributes>> {
        Ok(self
            .items
            .iter()
            .find(|item| matches!(item.get("id"), Some(AttributeValue::S(s)) if s == id))
            .cloned())
    }
}

/// 所有读取都失败的存储
struct FailingProductStore;

#[async_trait]
impl ProductStore for FailingProductStore {
    async fn scan(&self) -> AppResult<Vec<RecordAttributes>> {
        Err(AppError::database("connection refused"))
    }

    async fn get_by_key(&self, _id: &str) -> AppResult<Option<RecordAttributes>> {
        Err(AppError::database("connection refused"))
    }
}

fn record(id: &str, name: &str, description: &str, categories: &[&str]) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        picture: format!("/img/products/{}.jpg", id),
        price_usd: PriceRecord {
            currency_code: "USD".to_string(),
            units: 19,
            nanos: 990_000_000,
        },
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

/// 只含一台老式打字机的目录
fn typewriter_catalog() -> Vec<ProductRecord> {
    vec![ProductRecord {
        id: "1".to_string(),
        name: "Vintage Typewriter".to_string(),
        description: "A classic writing machine".to_string(),
        picture: "/img/products/typewriter.jpg".to_string(),
        price_usd: PriceRecord {
            currency_code: "USD".to_string(),
            units: 67,
            nanos: 990_000_000,
        },
        categories: vec!["vintage".to_string(), "office".to_string()],
    }]
}

fn service_with(
    records: &[ProductRecord],
) -> ProductCatalogServiceImpl<InMemoryProductStore> {
    ProductCatalogServiceImpl::new(Arc::new(InMemoryProductStore::with_records(records)), None)
}

#[tokio::test]
async fn test_list_products_returns_whole_catalog() {
    let records = vec![
        record("1", "Sunglasses", "Stylish shades", &["accessories"]),
        record("2", "Tank Top", "Casual cotton tank top", &["clothing", "tops"]),
        record("3", "Watch", "Gold-tone wristwatch", &["accessories"]),
    ];
    let service = service_with(&records);

    let response = service
        .list_products(Request::new(Empty {}))
        .await
        .expect("list should succeed");
    let products = &response.get_ref().products;

    assert_eq!(products.len(), 3);
    // 扫描顺序原样保留
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_list_products_preserves_every_field() {
    let service = service_with(&typewriter_catalog());

    let response = service
        .list_products(Request::new(Empty {}))
        .await
        .expect("list should succeed");
    let product = &response.get_ref().products[0];

    assert_eq!(product.id, "1");
    assert_eq!(product.name, "Vintage Typewriter");
    assert_eq!(product.description, "A classic writing machine");
    assert_eq!(product.picture, "/img/products/typewriter.jpg");

    let price = product.price_usd.as_ref().expect("price should be present");
    assert_eq!(price.currency_code, "USD");
    assert_eq!(price.units, 67);
    assert_eq!(price.nanos, 990_000_000);

    // 类目顺序与存储一致
    assert_eq!(product.categories, vec!["vintage", "office"]);
}

#[tokio::test]
async fn test_list_products_store_failure_is_internal() {
    let service = ProductCatalogServiceImpl::new(Arc::new(FailingProductStore), None);

    let status = service
        .list_products(Request::new(Empty {}))
        .await
        .err()
        .expect("list should fail");

    assert_eq!(status.code(), Code::Internal);
    assert!(status.message().contains("connection refused"));
}

#[tokio::test]
async fn test_list_products_malformed_record_fails_whole_call() {
    let good = to_item(&typewriter_catalog()[0]).expect("record should serialize");
    // priceUsd 形态错误的记录
    let bad: RecordAttributes = HashMap::from([
        ("id".to_string(), AttributeValue::S("2".to_string())),
        ("name".to_string(), AttributeValue::S("Mug".to_string())),
        (
            "description".to_string(),
            AttributeValue::S("Ceramic mug".to_string()),
        ),
        ("picture".to_string(), AttributeValue::S("/img/mug.jpg".to_string())),
        ("priceUsd".to_string(), AttributeValue::S("8.99".to_string())),
        ("categories".to_string(), AttributeValue::L(vec![])),
    ]);
    let store = InMemoryProductStore::with_items(vec![good, bad]);
    let service = ProductCatalogServiceImpl::new(Arc::new(store), None);

    let status = service
        .list_products(Request::new(Empty {}))
        .await
        .err()
        .expect("list should fail");

    // 单条记录解码失败导致整次调用失败，不返回部分列表
    assert_eq!(status.code(), Code::Internal);
}

#[tokio::test]
async fn test_get_product_returns_record_fields() {
    let service = service_with(&typewriter_catalog());

    let response = service
        .get_product(Request::new(GetProductRequest {
            id: "1".to_string(),
        }))
        .await
        .expect("get should succeed");
    let product = response.get_ref();

    assert_eq!(product.id, "1");
    assert_eq!(product.name, "Vintage Typewriter");
    let price = product.price_usd.as_ref().expect("price should be present");
    assert_eq!((price.units, price.nanos), (67, 990_000_000));
}

#[tokio::test]
async fn test_get_product_unknown_id_is_not_found() {
    let service = service_with(&typewriter_catalog());

    let status = service
        .get_product(Request::new(GetProductRequest {
            id: "2".to_string(),
        }))
        .await
        .err()
        .expect("get should fail");

    assert_eq!(status.code(), Code::NotFound);
    assert!(status.message().contains("no product with ID 2"));
}

#[tokio::test]
async fn test_get_product_empty_id_is_invalid_argument() {
    let service = service_with(&typewriter_catalog());

    let status = service
        .get_product(Request::new(GetProductRequest { id: String::new() }))
        .await
        .err()
        .expect("get should fail");

    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_get_product_store_failure_is_internal() {
    let service = ProductCatalogServiceImpl::new(Arc::new(FailingProductStore), None);

    let status = service
        .get_product(Request::new(GetProductRequest {
            id: "1".to_string(),
        }))
        .await
        .err()
        .expect("get should fail");

    assert_eq!(status.code(), Code::Internal);
}

#[tokio::test]
async fn test_search_is_case_insensitive_on_name() {
    let service = service_with(&typewriter_catalog());

    let response = service
        .search_products(Request::new(SearchProductsRequest {
            query: "TYPE".to_string(),
        }))
        .await
        .expect("search should succeed");
    let results = &response.get_ref().results;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "1");
}

#[tokio::test]
async fn test_search_matches_description() {
    let service = service_with(&typewriter_catalog());

    let response = service
        .search_products(Request::new(SearchProductsRequest {
            query: "writing machine".to_string(),
        }))
        .await
        .expect("search should succeed");

    assert_eq!(response.get_ref().results.len(), 1);
}

#[tokio::test]
async fn test_search_empty_query_matches_everything() {
    let records = vec![
        record("1", "Sunglasses", "Stylish shades", &["accessories"]),
        record("2", "Tank Top", "Casual cotton tank top", &["clothing"]),
    ];
    let service = service_with(&records);

    let response = service
        .search_products(Request::new(SearchProductsRequest {
            query: String::new(),
        }))
        .await
        .expect("search should succeed");

    assert_eq!(response.get_ref().results.len(), 2);
}

#[tokio::test]
async fn test_search_no_match_is_empty_success() {
    let service = service_with(&typewriter_catalog());

    let response = service
        .search_products(Request::new(SearchProductsRequest {
            query: "spaceship".to_string(),
        }))
        .await
        .expect("search should succeed");

    assert!(response.get_ref().results.is_empty());
}

#[tokio::test]
async fn test_search_keeps_scan_order() {
    let records = vec![
        record("10", "Red Loafers", "Leather loafers", &["footwear"]),
        record("11", "Candle Holder", "Brass candle holder", &["decor"]),
        record("12", "Loafer Socks", "Socks for loafers", &["footwear"]),
    ];
    let service = service_with(&records);

    let response = service
        .search_products(Request::new(SearchProductsRequest {
            query: "loafer".to_string(),
        }))
        .await
        .expect("search should succeed");
    let ids: Vec<&str> = response
        .get_ref()
        .results
        .iter()
        .map(|p| p.id.as_str())
        .collect();

    // 命中顺序与全量列表中的出现顺序一致，不做相关性重排
    assert_eq!(ids, vec!["10", "12"]);
}

#[tokio::test(start_paused = true)]
async fn test_extra_latency_delays_the_call() {
    let store = Arc::new(InMemoryProductStore::with_records(&typewriter_catalog()));
    let service = ProductCatalogServiceImpl::new(store, Some(Duration::from_millis(200)));

    let start = tokio::time::Instant::now();
    let response = service
        .list_products(Request::new(Empty {}))
        .await
        .expect("list should succeed");

    assert!(start.elapsed() >= Duration::from_millis(200));
    assert_eq!(response.get_ref().products.len(), 1);
}

#[tokio::test]
async fn test_search_store_failure_propagates_like_list() {
    let service = ProductCatalogServiceImpl::new(Arc::new(FailingProductStore), None);

    let status = service
        .search_products(Request::new(SearchProductsRequest {
            query: String::new(),
        }))
        .await
        .err()
        .expect("search should fail");

    assert_eq!(status.code(), Code::Internal);
    assert!(status.message().contains("connection refused"));
}
