//! In-process fake storefront backend for integration tests
//!
//! An axum `Router` over shared in-memory state, driven either through
//! `OneshotHttpClient` or served on a loopback socket for the network client.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Multipart, Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::{Value, json};

use shared::models::{
    AdminSummary, AuditLog, Category, ContentBlock, Coupon, CouponCreate, CouponUpdate,
    LowStockItem, Order, OrderStatus, OrderStatusUpdate, Product, ProductAuditEntry, ProductImage,
    ProductStatus, ProductVariant, ProductWrite, TagRef, User,
};
use shared::{Page, PaginationMeta};
use storefront_client::{OneshotHttpClient, StorefrontClient};

pub type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;

/// Backend state shared by all handlers
#[derive(Debug, Default)]
pub struct Backend {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub orders: Vec<Order>,
    pub users: Vec<User>,
    pub coupons: Vec<Coupon>,
    pub content: Vec<ContentBlock>,
    pub audit: AuditLog,
    /// Route keys forced to answer 500, e.g. `"coupons.update"`
    pub failing: HashSet<String>,
    /// `METHOD path[?query]` of every request received
    pub requests: Vec<String>,
    pub revoked: Vec<String>,
    pub last_authorization: Option<String>,
    next_id: u32,
}

#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<Backend>>,
}

impl FakeBackend {
    /// Backend seeded with the catalog fixture
    pub fn seeded() -> Self {
        let backend = Self::default();
        {
            let mut s = backend.lock();
            s.categories = vec![
                category("cat-kitchen", "kitchen", "Kitchen"),
                category("cat-living", "living", "Living room"),
            ];
            s.products = vec![
                product("p1", "stoneware-mug", "Stoneware Mug", 18, "cat-kitchen", &["handmade", "sale"]),
                product("p2", "oak-board", "Oak Board", 45, "cat-kitchen", &["oak"]),
                product("p3", "linen-throw", "Linen Throw", 89, "cat-living", &["linen", "sale"]),
                product("p4", "clay-vase", "Clay Vase", 32, "cat-living", &["handmade"]),
                product("p5", "tea-towel", "Tea Towel", 12, "cat-kitchen", &[]),
            ];
            s.products[0].variants = vec![
                ProductVariant {
                    id: "v-small".into(),
                    name: "Small".into(),
                    additional_price_delta: Decimal::ZERO,
                    stock_quantity: 4,
                },
                ProductVariant {
                    id: "v-large".into(),
                    name: "Large".into(),
                    additional_price_delta: Decimal::new(6, 0),
                    stock_quantity: 2,
                },
            ];
            s.products[0].images = vec![image("img-1"), image("img-2")];
            s.orders = vec![
                order("o1", OrderStatus::Pending, 36),
                order("o2", OrderStatus::Paid, 89),
                order("o3", OrderStatus::Pending, 12),
            ];
            s.users = vec![
                User {
                    id: "u1".into(),
                    email: "ana@example.com".into(),
                    name: Some("Ana".into()),
                    role: Some("customer".into()),
                },
                User {
                    id: "u2".into(),
                    email: "staff@example.com".into(),
                    name: None,
                    role: Some("admin".into()),
                },
            ];
            s.coupons = vec![
                coupon("c1", "WELCOME10", true),
                coupon("c2", "SUMMER", false),
            ];
            s.content = vec![ContentBlock {
                id: "b1".into(),
                key: "home.hero".into(),
                title: "Hand-made goods".into(),
                version: 3,
            }];
            s.audit = AuditLog {
                products: vec![ProductAuditEntry {
                    id: "a1".into(),
                    product_id: "p1".into(),
                    action: "update".into(),
                    created_at: Utc.with_ymd_and_hms(2026, 1, 2, 9, 0, 0).unwrap(),
                }],
                content: Vec::new(),
            };
        }
        backend
    }

    pub fn lock(&self) -> MutexGuard<'_, Backend> {
        self.state.lock().unwrap()
    }

    pub fn fail(&self, key: &str) {
        self.lock().failing.insert(key.to_string());
    }

    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self, prefix: &str) -> usize {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.starts_with(prefix))
            .count()
    }

    pub fn router(&self) -> Router {
        let api = Router::new()
            .route("/health", get(health))
            .route("/catalog/products", get(list_products).post(create_product))
            .route(
                "/catalog/products/{slug}",
                get(get_product).patch(update_product).delete(delete_product),
            )
            .route("/catalog/products/{slug}/images", post(upload_image))
            .route(
                "/catalog/products/{slug}/images/{image_id}",
                delete(delete_image),
            )
            .route("/catalog/categories", get(list_categories))
            .route("/orders", get(list_orders))
            .route("/orders/{id}", patch(update_order))
            .route("/users", get(list_users))
            .route("/users/{id}/revoke-sessions", post(revoke_sessions))
            .route("/coupons", get(list_coupons).post(create_coupon))
            .route("/coupons/{id}", patch(update_coupon))
            .route("/content", get(list_content))
            .route("/audit", get(list_audit))
            .route("/admin/summary", get(summary))
            .route("/admin/low-stock", get(low_stock))
            .with_state(self.state.clone());

        Router::new().nest("/api/v1", api)
    }

    pub fn client(&self) -> StorefrontClient<OneshotHttpClient> {
        StorefrontClient::new(OneshotHttpClient::new(self.router()))
    }

    /// Serve on a loopback port; returns the base URL
    pub async fn serve(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = self.router();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

// ========== Fixtures ==========

pub fn category(id: &str, slug: &str, name: &str) -> Category {
    Category {
        id: id.into(),
        slug: slug.into(),
        name: name.into(),
        description: None,
    }
}

pub fn product(id: &str, slug: &str, name: &str, price: i64, category_id: &str, tags: &[&str]) -> Product {
    Product {
        id: id.into(),
        slug: slug.into(),
        name: name.into(),
        price: Decimal::new(price, 0),
        currency: "USD".into(),
        status: ProductStatus::Published,
        category_id: Some(category_id.into()),
        sku: None,
        short_description: None,
        long_description: None,
        stock_quantity: 10,
        tags: tags
            .iter()
            .enumerate()
            .map(|(i, t)| {
                // mix both tag forms
                if i % 2 == 0 {
                    TagRef::from(*t)
                } else {
                    TagRef::Object {
                        name: t.to_string(),
                        slug: Some(t.to_string()),
                    }
                }
            })
            .collect(),
        images: Vec::new(),
        variants: Vec::new(),
    }
}

pub fn image(id: &str) -> ProductImage {
    ProductImage {
        id: id.into(),
        url: format!("https://cdn.example.com/{}.png", id),
        alt_text: None,
        sort_order: 0,
    }
}

pub fn order(id: &str, status: OrderStatus, total: i64) -> Order {
    Order {
        id: id.into(),
        customer: Some("ana@example.com".into()),
        status,
        total_amount: Decimal::new(total, 0),
        currency: Some("USD".into()),
        created_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
    }
}

pub fn coupon(id: &str, code: &str, active: bool) -> Coupon {
    Coupon {
        id: id.into(),
        code: code.into(),
        percentage_off: Some(Decimal::new(10, 0)),
        amount_off: None,
        currency: Some("USD".into()),
        active,
    }
}

// ========== Handlers ==========

type Shared = State<Arc<Mutex<Backend>>>;

fn reject(status: StatusCode, detail: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": detail })))
}

/// Record the request and apply failure injection for `key`
fn enter<'a>(
    state: &'a Arc<Mutex<Backend>>,
    key: &str,
    line: String,
) -> Result<MutexGuard<'a, Backend>, (StatusCode, Json<Value>)> {
    let mut s = state.lock().unwrap();
    s.requests.push(line);
    if s.failing.contains(key) {
        return Err(reject(StatusCode::INTERNAL_SERVER_ERROR, "Service unavailable"));
    }
    Ok(s)
}

fn parse_query(raw: Option<&str>) -> Vec<(String, String)> {
    raw.unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            let decode = |s: &str| {
                urlencoding::decode(&s.replace('+', " "))
                    .map(|c| c.into_owned())
                    .unwrap_or_default()
            };
            (decode(k), decode(v))
        })
        .collect()
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_products(
    State(state): Shared,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> ApiResult<Page<Product>> {
    let line = match &raw {
        Some(q) => format!("GET /catalog/products?{}", q),
        None => "GET /catalog/products".to_string(),
    };
    let mut s = enter(&state, "products.list", line)?;
    s.last_authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let params = parse_query(raw.as_deref());
    let first = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    };
    let tags: Vec<&str> = params
        .iter()
        .filter(|(k, _)| k == "tags")
        .map(|(_, v)| v.as_str())
        .collect();

    let search = first("search").map(|s| s.to_lowercase());
    let category_id = first("category_slug").and_then(|slug| {
        s.categories
            .iter()
            .find(|c| c.slug == slug)
            .map(|c| c.id.clone())
    });
    let min = first("min_price").and_then(|p| p.parse::<Decimal>().ok());
    let max = first("max_price").and_then(|p| p.parse::<Decimal>().ok());

    let mut items: Vec<Product> = s
        .products
        .iter()
        .filter(|p| search.as_ref().is_none_or(|q| p.name.to_lowercase().contains(q)))
        .filter(|p| {
            first("category_slug").is_none() || p.category_id.is_some() && p.category_id == category_id
        })
        .filter(|p| min.is_none_or(|m| p.price >= m))
        .filter(|p| max.is_none_or(|m| p.price <= m))
        .filter(|p| tags.iter().all(|t| p.tag_labels().any(|l| l == *t)))
        .cloned()
        .collect();

    match first("sort").as_deref() {
        Some("price_asc") => items.sort_by(|a, b| a.price.cmp(&b.price)),
        Some("price_desc") => items.sort_by(|a, b| b.price.cmp(&a.price)),
        Some("name_asc") => items.sort_by(|a, b| a.name.cmp(&b.name)),
        Some("name_desc") => items.sort_by(|a, b| b.name.cmp(&a.name)),
        _ => {}
    }

    let limit = first("limit")
        .and_then(|l| l.parse::<u32>().ok())
        .unwrap_or(12)
        .max(1);
    let requested = first("page")
        .and_then(|p| p.parse::<u32>().ok())
        .unwrap_or(1);
    let meta = PaginationMeta::new(requested, items.len() as u64, limit).clamped();
    let start = ((meta.page - 1) * limit) as usize;
    let page_items = items.into_iter().skip(start).take(limit as usize).collect();

    Ok(Json(Page::new(page_items, meta)))
}

fn find_product<'a>(s: &'a mut Backend, slug: &str) -> Result<&'a mut Product, (StatusCode, Json<Value>)> {
    s.products
        .iter_mut()
        .find(|p| p.slug == slug)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Product not found"))
}

async fn get_product(State(state): Shared, Path(slug): Path<String>) -> ApiResult<Product> {
    let mut s = enter(&state, "products.get", format!("GET /catalog/products/{}", slug))?;
    Ok(Json(find_product(&mut s, &slug)?.clone()))
}

async fn create_product(State(state): Shared, Json(payload): Json<ProductWrite>) -> ApiResult<Product> {
    let mut s = enter(&state, "products.create", "POST /catalog/products".into())?;
    let slug = payload.slug.clone().unwrap_or_default();
    if s.products.iter().any(|p| p.slug == slug) {
        return Err(reject(StatusCode::CONFLICT, "Slug already exists"));
    }
    s.next_id += 1;
    let mut created = product(
        &format!("new-{}", s.next_id),
        &slug,
        payload.name.as_deref().unwrap_or_default(),
        0,
        payload.category_id.as_deref().unwrap_or_default(),
        &[],
    );
    apply_write(&mut created, payload);
    s.products.insert(0, created.clone());
    Ok(Json(created))
}

fn apply_write(product: &mut Product, payload: ProductWrite) {
    if let Some(name) = payload.name {
        product.name = name;
    }
    if let Some(slug) = payload.slug {
        product.slug = slug;
    }
    if payload.category_id.is_some() {
        product.category_id = payload.category_id;
    }
    if let Some(price) = payload.base_price {
        product.price = price;
    }
    if let Some(stock) = payload.stock_quantity {
        product.stock_quantity = stock;
    }
    if let Some(status) = payload.status {
        product.status = status;
    }
    product.sku = payload.sku.or(product.sku.take());
    product.long_description = payload.long_description.or(product.long_description.take());
}

async fn update_product(
    State(state): Shared,
    Path(slug): Path<String>,
    Json(payload): Json<ProductWrite>,
) -> ApiResult<Product> {
    let mut s = enter(&state, "products.update", format!("PATCH /catalog/products/{}", slug))?;
    let product = find_product(&mut s, &slug)?;
    apply_write(product, payload);
    Ok(Json(product.clone()))
}

async fn delete_product(
    State(state): Shared,
    Path(slug): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    let mut s = enter(&state, "products.delete", format!("DELETE /catalog/products/{}", slug))?;
    if s.failing.contains(&format!("products.delete:{}", slug)) {
        return Err(reject(StatusCode::CONFLICT, "Product has open orders"));
    }
    let before = s.products.len();
    s.products.retain(|p| p.slug != slug);
    if s.products.len() == before {
        return Err(reject(StatusCode::NOT_FOUND, "Product not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn upload_image(
    State(state): Shared,
    Path(slug): Path<String>,
    mut multipart: Multipart,
) -> ApiResult<Product> {
    let mut file_name = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            file_name = field.file_name().map(str::to_string);
            let _ = field.bytes().await;
        }
    }
    let Some(file_name) = file_name else {
        return Err(reject(StatusCode::UNPROCESSABLE_ENTITY, "file is required"));
    };

    let mut s = enter(&state, "images.upload", format!("POST /catalog/products/{}/images", slug))?;
    s.next_id += 1;
    let id = format!("img-new-{}", s.next_id);
    let product = find_product(&mut s, &slug)?;
    let mut img = image(&id);
    img.alt_text = Some(file_name);
    product.images.push(img);
    Ok(Json(product.clone()))
}

async fn delete_image(
    State(state): Shared,
    Path((slug, image_id)): Path<(String, String)>,
) -> ApiResult<Product> {
    let mut s = enter(
        &state,
        "images.delete",
        format!("DELETE /catalog/products/{}/images/{}", slug, image_id),
    )?;
    let product = find_product(&mut s, &slug)?;
    product.images.retain(|i| i.id != image_id);
    Ok(Json(product.clone()))
}

async fn list_categories(State(state): Shared) -> ApiResult<Vec<Category>> {
    let s = enter(&state, "categories.list", "GET /catalog/categories".into())?;
    Ok(Json(s.categories.clone()))
}

async fn list_orders(State(state): Shared) -> ApiResult<Vec<Order>> {
    let s = enter(&state, "orders.list", "GET /orders".into())?;
    Ok(Json(s.orders.clone()))
}

async fn update_order(
    State(state): Shared,
    Path(id): Path<String>,
    Json(update): Json<OrderStatusUpdate>,
) -> ApiResult<Order> {
    let mut s = enter(&state, "orders.update", format!("PATCH /orders/{}", id))?;
    let order = s
        .orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Order not found"))?;
    order.status = update.status;
    Ok(Json(order.clone()))
}

async fn list_users(State(state): Shared) -> ApiResult<Vec<User>> {
    let s = enter(&state, "users.list", "GET /users".into())?;
    Ok(Json(s.users.clone()))
}

async fn revoke_sessions(
    State(state): Shared,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut s = enter(&state, "users.revoke", format!("POST /users/{}/revoke-sessions", id))?;
    s.revoked.push(id);
    Ok(Json(json!({ "revoked": true })))
}

async fn list_coupons(State(state): Shared) -> ApiResult<Vec<Coupon>> {
    let s = enter(&state, "coupons.list", "GET /coupons".into())?;
    Ok(Json(s.coupons.clone()))
}

async fn create_coupon(State(state): Shared, Json(payload): Json<CouponCreate>) -> ApiResult<Coupon> {
    let mut s = enter(&state, "coupons.create", "POST /coupons".into())?;
    if s.coupons.iter().any(|c| c.code == payload.code) {
        return Err(reject(StatusCode::CONFLICT, "Coupon code already exists"));
    }
    s.next_id += 1;
    let created = Coupon {
        id: format!("c-new-{}", s.next_id),
        code: payload.code,
        percentage_off: payload.percentage_off,
        amount_off: payload.amount_off,
        currency: payload.currency,
        active: payload.active,
    };
    s.coupons.insert(0, created.clone());
    Ok(Json(created))
}

async fn update_coupon(
    State(state): Shared,
    Path(id): Path<String>,
    Json(patch): Json<CouponUpdate>,
) -> ApiResult<Coupon> {
    let mut s = enter(&state, "coupons.update", format!("PATCH /coupons/{}", id))?;
    let coupon = s
        .coupons
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Coupon not found"))?;
    if let Some(active) = patch.active {
        coupon.active = active;
    }
    if patch.percentage_off.is_some() {
        coupon.percentage_off = patch.percentage_off;
    }
    if patch.amount_off.is_some() {
        coupon.amount_off = patch.amount_off;
    }
    Ok(Json(coupon.clone()))
}

async fn list_content(State(state): Shared) -> ApiResult<Vec<ContentBlock>> {
    let s = enter(&state, "content.list", "GET /content".into())?;
    Ok(Json(s.content.clone()))
}

async fn list_audit(State(state): Shared) -> ApiResult<AuditLog> {
    let s = enter(&state, "audit.list", "GET /audit".into())?;
    Ok(Json(s.audit.clone()))
}

async fn summary(State(state): Shared) -> ApiResult<AdminSummary> {
    let s = enter(&state, "summary", "GET /admin/summary".into())?;
    Ok(Json(AdminSummary {
        products: s.products.len() as u64,
        orders: s.orders.len() as u64,
        users: s.users.len() as u64,
        low_stock: 0,
        sales_30d: s.orders.iter().map(|o| o.total_amount).sum(),
        orders_30d: s.orders.len() as u64,
    }))
}

async fn low_stock(State(state): Shared) -> ApiResult<Vec<LowStockItem>> {
    let s = enter(&state, "low_stock", "GET /admin/low-stock".into())?;
    Ok(Json(
        s.products
            .iter()
            .filter(|p| p.stock_quantity < 5)
            .map(|p| LowStockItem {
                id: p.id.clone(),
                name: p.name.clone(),
                slug: p.slug.clone(),
                sku: p.sku.clone(),
                stock_quantity: p.stock_quantity,
            })
            .collect(),
    ))
}
