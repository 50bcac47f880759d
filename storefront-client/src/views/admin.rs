// storefront-client/src/views/admin.rs
// 管理后台视图 - 商品、订单、用户、优惠券
//
// 所有变更遵循“先确认后应用”：只有服务端确认的实体才会写入缓存。

use rust_decimal::Decimal;
use shared::models::{
    AdminSummary, Category, ContentAuditEntry, ContentBlock, Coupon, CouponCreate, CouponUpdate,
    LowStockItem, Order, OrderStatus, Product, ProductAuditEntry, ProductImage, ProductStatus,
    ProductWrite, User,
};

use crate::api::StorefrontClient;
use crate::error::{ClientError, ClientResult, ErrorKind};
use crate::http::{FileUpload, HttpClient};
use crate::notice::Notifier;
use crate::query::{QueryState, build_request};
use crate::selection::SelectionSet;
use crate::store::{MutationState, ResourceStore, StorePatch};
use crate::validation::{MAX_NAME_LEN, MAX_SLUG_LEN, validate_required_text};

/// Products shown in the admin table
pub const ADMIN_PRODUCT_LIMIT: u32 = 100;

/// Product editor form
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub slug: String,
    pub category_id: Option<String>,
    pub price: Decimal,
    pub stock: i64,
    pub status: ProductStatus,
    pub sku: String,
    pub description: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            category_id: None,
            price: Decimal::ZERO,
            stock: 0,
            status: ProductStatus::Draft,
            sku: String::new(),
            description: String::new(),
        }
    }
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            slug: product.slug.clone(),
            category_id: product.category_id.clone(),
            price: product.price,
            stock: product.stock_quantity,
            status: product.status,
            sku: product.sku.clone().unwrap_or_default(),
            description: product.long_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> ClientResult<()> {
        validate_required_text(&self.name, "Product name", MAX_NAME_LEN)?;
        validate_required_text(&self.slug, "Product slug", MAX_SLUG_LEN)?;
        if self.price.is_sign_negative() {
            return Err(ClientError::validation("Price must not be negative"));
        }
        Ok(())
    }

    /// Create/update payload; the description fills both description fields
    pub fn to_payload(&self) -> ProductWrite {
        let non_empty = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        ProductWrite {
            name: Some(self.name.trim().to_string()),
            slug: Some(self.slug.trim().to_string()),
            category_id: self.category_id.as_deref().and_then(non_empty),
            base_price: Some(self.price),
            stock_quantity: Some(self.stock),
            status: Some(self.status),
            sku: non_empty(&self.sku),
            short_description: non_empty(&self.description),
            long_description: non_empty(&self.description),
        }
    }
}

/// Notice text for a failed mutation
fn failure_message(context: &str, err: &ClientError) -> String {
    match err.kind() {
        ErrorKind::Validation => err.user_message(),
        _ => format!("{context}: {}", err.user_message()),
    }
}

/// Admin dashboard state
///
/// Sections load independently; every mutation reports its outcome exactly
/// once through the [`Notifier`].
pub struct AdminDashboard<C: HttpClient> {
    client: StorefrontClient<C>,
    notifier: Notifier,
    loading: bool,

    summary: Option<AdminSummary>,
    low_stock: Vec<LowStockItem>,
    categories: Vec<Category>,

    // Products
    products: ResourceStore<Product>,
    selection: SelectionSet<String>,
    form: ProductForm,
    editing: Option<Product>,
    product_images: Vec<ProductImage>,

    // Orders
    orders: ResourceStore<Order>,
    order_filter: Option<OrderStatus>,
    active_order: Option<Order>,

    // Users
    users: ResourceStore<User>,
    selected_user: Option<String>,

    // Coupons & content
    coupons: ResourceStore<Coupon>,
    new_coupon: CouponCreate,
    content: ResourceStore<ContentBlock>,
    product_audit: Vec<ProductAuditEntry>,
    content_audit: Vec<ContentAuditEntry>,
}

impl<C: HttpClient> AdminDashboard<C> {
    pub fn new(client: StorefrontClient<C>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            loading: false,
            summary: None,
            low_stock: Vec::new(),
            categories: Vec::new(),
            products: ResourceStore::new(),
            selection: SelectionSet::new(),
            form: ProductForm::default(),
            editing: None,
            product_images: Vec::new(),
            orders: ResourceStore::new(),
            order_filter: None,
            active_order: None,
            users: ResourceStore::new(),
            selected_user: None,
            coupons: ResourceStore::new(),
            new_coupon: CouponCreate::default(),
            content: ResourceStore::new(),
            product_audit: Vec::new(),
            content_audit: Vec::new(),
        }
    }

    pub fn client(&self) -> &StorefrontClient<C> {
        &self.client
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn summary(&self) -> Option<&AdminSummary> {
        self.summary.as_ref()
    }

    pub fn low_stock(&self) -> &[LowStockItem] {
        &self.low_stock
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &ResourceStore<Product> {
        &self.products
    }

    pub fn orders(&self) -> &ResourceStore<Order> {
        &self.orders
    }

    pub fn users(&self) -> &ResourceStore<User> {
        &self.users
    }

    pub fn coupons(&self) -> &ResourceStore<Coupon> {
        &self.coupons
    }

    pub fn content(&self) -> &ResourceStore<ContentBlock> {
        &self.content
    }

    pub fn product_audit(&self) -> &[ProductAuditEntry] {
        &self.product_audit
    }

    pub fn content_audit(&self) -> &[ContentAuditEntry] {
        &self.content_audit
    }

    /// Load every section concurrently
    ///
    /// A failing section is left empty and reported; the others still load.
    /// Returns the number of failed sections.
    pub async fn load_all(&mut self) -> usize {
        self.loading = true;
        let params = build_request(&QueryState::new(ADMIN_PRODUCT_LIMIT));
        let client = &self.client;
        let (summary, products, orders, users, content, coupons, low_stock, audit, categories) = tokio::join!(
            client.admin_summary(),
            client.list_products(&params),
            client.list_orders(),
            client.list_users(),
            client.list_content(),
            client.list_coupons(),
            client.low_stock(),
            client.list_audit(),
            client.list_categories(),
        );

        let mut failed = 0;
        let mut report = |name: &str, err: ClientError| {
            failed += 1;
            tracing::warn!(section = name, error = %err, "Admin section failed to load");
            self.notifier
                .error(format!("Failed to load {name}: {}", err.user_message()));
        };

        self.summary = summary.map_err(|e| report("summary", e)).ok();
        let products = products
            .map(|page| page.items)
            .unwrap_or_else(|e| {
                report("products", e);
                Vec::new()
            });
        let orders = orders.unwrap_or_else(|e| {
            report("orders", e);
            Vec::new()
        });
        let users = users.unwrap_or_else(|e| {
            report("users", e);
            Vec::new()
        });
        let content = content.unwrap_or_else(|e| {
            report("content", e);
            Vec::new()
        });
        let coupons = coupons.unwrap_or_else(|e| {
            report("coupons", e);
            Vec::new()
        });
        self.low_stock = low_stock.unwrap_or_else(|e| {
            report("low stock", e);
            Vec::new()
        });
        let audit = audit.unwrap_or_else(|e| {
            report("audit log", e);
            Default::default()
        });
        self.categories = categories.unwrap_or_else(|e| {
            report("categories", e);
            Vec::new()
        });

        self.products.replace_all(products);
        self.selection.prune(self.products.ids());
        self.orders.replace_all(orders);
        self.active_order = self.orders.items().first().cloned();
        self.users.replace_all(users);
        if let Some(id) = &self.selected_user
            && !self.users.contains(id)
        {
            self.selected_user = None;
        }
        self.content.replace_all(content);
        self.coupons.replace_all(coupons);
        self.product_audit = audit.products;
        self.content_audit = audit.content;

        self.loading = false;
        failed
    }

    // ========== Product table selection ==========

    pub fn selection(&self) -> &SelectionSet<String> {
        &self.selection
    }

    pub fn toggle(&mut self, product_id: &str) -> bool {
        self.selection.toggle(&product_id.to_string())
    }

    pub fn toggle_all(&mut self, checked: bool) {
        self.selection.toggle_all(checked);
    }

    pub fn all_selected(&self) -> bool {
        self.selection.all_selected()
    }

    /// Delete every selected product by slug
    ///
    /// Each confirmed delete removes its row; failures leave the row and are
    /// reported per product. Returns the number of deleted products.
    pub async fn delete_selected(&mut self) -> usize {
        let ids = self.selection.selected_ids();
        let mut deleted = 0;

        for id in ids {
            let Some((slug, name)) = self.products.get(&id).map(|p| (p.slug.clone(), p.name.clone()))
            else {
                continue;
            };

            self.products.begin_mutation(&id);
            match self.client.delete_product(&slug).await {
                Ok(()) => {
                    self.products.settle_removal(&id, MutationState::Confirmed(()));
                    deleted += 1;
                    self.notifier.success(format!("Product deleted: {name}"));
                }
                Err(e) => {
                    let message = failure_message(&format!("Failed to delete {name}"), &e);
                    self.products
                        .settle_removal(&id, MutationState::Failed(e.user_message()));
                    self.notifier.error(message);
                }
            }
        }

        self.selection.prune(self.products.ids());
        deleted
    }

    // ========== Product editor ==========

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    /// Product currently under edit, if any
    pub fn editing(&self) -> Option<&Product> {
        self.editing.as_ref()
    }

    pub fn product_images(&self) -> &[ProductImage] {
        &self.product_images
    }

    /// Blank form defaulting to the first category
    pub fn start_new_product(&mut self) {
        self.editing = None;
        self.product_images.clear();
        self.form = ProductForm {
            category_id: self.categories.first().map(|c| c.id.clone()),
            ..ProductForm::default()
        };
    }

    /// Fill the editor from the backend's copy of `slug`
    pub async fn load_product(&mut self, slug: &str) -> bool {
        match self.client.get_product(slug).await {
            Ok(product) => {
                self.form = ProductForm::from_product(&product);
                self.product_images = product.images.clone();
                self.editing = Some(product);
                true
            }
            Err(e) => {
                self.notifier
                    .error(failure_message("Unable to load product", &e));
                false
            }
        }
    }

    /// Create (prepend) or update by slug (replace in place)
    pub async fn save_product(&mut self) -> bool {
        if let Err(e) = self.form.validate() {
            self.notifier.error(e.user_message());
            return false;
        }
        let payload = self.form.to_payload();

        let result = match &self.editing {
            Some(current) => {
                self.products.begin_mutation(&current.id);
                self.client.update_product(&current.slug, &payload).await
            }
            None => self.client.create_product(&payload).await,
        };

        match result {
            Ok(saved) => {
                match self.editing.as_ref().map(|p| p.id.clone()) {
                    Some(id) => {
                        self.products.settle(&id, MutationState::Confirmed(saved));
                    }
                    None => {
                        self.products.prepend(saved);
                    }
                }
                self.selection.prune(self.products.ids());
                self.notifier.success("Product saved");
                self.start_new_product();
                true
            }
            Err(e) => {
                if let Some(current) = &self.editing {
                    self.products
                        .settle(&current.id, MutationState::Failed(e.user_message()));
                }
                self.notifier
                    .error(failure_message("Failed to save product", &e));
                false
            }
        }
    }

    /// Upload an image for the product under edit
    pub async fn upload_image(&mut self, file: &FileUpload) -> bool {
        let Some(slug) = self.editing.as_ref().map(|p| p.slug.clone()) else {
            self.notifier.error("Save product before uploading images");
            return false;
        };
        let result = self.client.upload_product_image(&slug, file).await;
        self.settle_images(result, "Image uploaded", "Image upload failed")
    }

    /// Delete one image of the product under edit
    pub async fn delete_image(&mut self, image_id: &str) -> bool {
        let Some(slug) = self.editing.as_ref().map(|p| p.slug.clone()) else {
            self.notifier.error("Select a product before deleting images");
            return false;
        };
        let result = self.client.delete_product_image(&slug, image_id).await;
        self.settle_images(result, "Image deleted", "Failed to delete image")
    }

    fn settle_images(&mut self, result: ClientResult<Product>, success: &str, failure: &str) -> bool {
        match result {
            Ok(product) => {
                self.product_images = product.images.clone();
                if self.products.contains(&product.id) {
                    self.products.apply_optimistic(product.clone());
                }
                self.editing = Some(product);
                self.notifier.success(success);
                true
            }
            Err(e) => {
                self.notifier.error(failure_message(failure, &e));
                false
            }
        }
    }

    // ========== Orders ==========

    pub fn order_filter(&self) -> Option<OrderStatus> {
        self.order_filter
    }

    pub fn set_order_filter(&mut self, status: Option<OrderStatus>) {
        self.order_filter = status;
    }

    /// Orders matching the status filter, in load order
    pub fn filtered_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| self.order_filter.is_none_or(|status| o.status == status))
            .collect()
    }

    pub fn active_order(&self) -> Option<&Order> {
        self.active_order.as_ref()
    }

    pub fn select_order(&mut self, order_id: &str) -> bool {
        match self.orders.get(&order_id.to_string()) {
            Some(order) => {
                self.active_order = Some(order.clone());
                true
            }
            None => false,
        }
    }

    /// Change the active order's status
    pub async fn change_order_status(&mut self, status: OrderStatus) -> bool {
        let Some(id) = self.active_order.as_ref().map(|o| o.id.clone()) else {
            tracing::debug!("No active order to update");
            return false;
        };

        self.orders.begin_mutation(&id);
        let outcome = MutationState::from(self.client.update_order_status(&id, status).await);
        match outcome {
            MutationState::Confirmed(order) => {
                self.active_order = Some(order.clone());
                self.orders.settle(&id, MutationState::Confirmed(order));
                self.notifier.success("Order status updated");
                true
            }
            other => {
                if let MutationState::Failed(reason) = &other {
                    self.notifier
                        .error(format!("Failed to update order status: {reason}"));
                }
                self.orders.settle(&id, other);
                false
            }
        }
    }

    // ========== Users ==========

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.selected_user.as_ref()?)
    }

    pub fn select_user(&mut self, user_id: &str) -> bool {
        let id = user_id.to_string();
        if self.users.contains(&id) {
            self.selected_user = Some(id);
            true
        } else {
            false
        }
    }

    /// Revoke every session of the selected user
    pub async fn force_logout(&mut self) -> bool {
        let Some(id) = self.selected_user.clone() else {
            tracing::debug!("No user selected");
            return false;
        };
        match self.client.revoke_sessions(&id).await {
            Ok(()) => {
                self.notifier.success("Sessions revoked");
                true
            }
            Err(e) => {
                self.notifier
                    .error(failure_message("Failed to revoke sessions", &e));
                false
            }
        }
    }

    // ========== Coupons ==========

    pub fn new_coupon(&self) -> &CouponCreate {
        &self.new_coupon
    }

    pub fn new_coupon_mut(&mut self) -> &mut CouponCreate {
        &mut self.new_coupon
    }

    /// Create the coupon in the form; prepends on success
    pub async fn create_coupon(&mut self) -> bool {
        match self.client.create_coupon(&self.new_coupon).await {
            Ok(coupon) => {
                self.coupons.prepend(coupon);
                self.new_coupon = CouponCreate::default();
                self.notifier.success("Coupon created");
                true
            }
            Err(e) => {
                self.notifier
                    .error(failure_message("Failed to create coupon", &e));
                false
            }
        }
    }

    /// Flip a coupon's `active` flag
    pub async fn toggle_coupon(&mut self, coupon_id: &str) -> bool {
        let id = coupon_id.to_string();
        let Some(active) = self.coupons.get(&id).map(|c| c.active) else {
            return false;
        };

        self.coupons.begin_mutation(&id);
        let patch = CouponUpdate {
            active: Some(!active),
            ..CouponUpdate::default()
        };
        let outcome = MutationState::from(self.client.update_coupon(&id, &patch).await);
        let failure = match &outcome {
            MutationState::Failed(reason) => Some(format!("Failed to update coupon: {reason}")),
            _ => None,
        };

        let applied = self.coupons.settle(&id, outcome) != StorePatch::Unchanged;
        match failure {
            Some(message) => self.notifier.error(message),
            None => self.notifier.success("Coupon updated"),
        }
        applied
    }
}
