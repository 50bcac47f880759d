// storefront-client/src/api/admin.rs
// 管理后台 API

use shared::models::{
    AdminSummary, AuditLog, ContentBlock, Coupon, CouponCreate, CouponUpdate, LowStockItem, Order,
    OrderStatus, OrderStatusUpdate, User,
};

use super::StorefrontClient;
use crate::ClientResult;
use crate::http::{HttpClient, segment};
use crate::validation::{MAX_CODE_LEN, validate_path_key, validate_required_text};

impl<C: HttpClient> StorefrontClient<C> {
    /// `GET /admin/summary`
    pub async fn admin_summary(&self) -> ClientResult<AdminSummary> {
        self.http.get("admin/summary").await
    }

    /// `GET /admin/low-stock`
    pub async fn low_stock(&self) -> ClientResult<Vec<LowStockItem>> {
        self.http.get("admin/low-stock").await
    }

    /// `GET /orders`
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.http.get("orders").await
    }

    /// `PATCH /orders/{id}`
    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        validate_path_key(id, "Order id")?;
        self.http
            .patch(&format!("orders/{}", segment(id)), &OrderStatusUpdate { status })
            .await
    }

    /// `GET /users`
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.http.get("users").await
    }

    /// `POST /users/{id}/revoke-sessions`
    pub async fn revoke_sessions(&self, user_id: &str) -> ClientResult<()> {
        validate_path_key(user_id, "User id")?;
        self.http
            .post_empty(&format!("users/{}/revoke-sessions", segment(user_id)))
            .await
    }

    /// `GET /coupons`
    pub async fn list_coupons(&self) -> ClientResult<Vec<Coupon>> {
        self.http.get("coupons").await
    }

    /// `POST /coupons`
    pub async fn create_coupon(&self, payload: &CouponCreate) -> ClientResult<Coupon> {
        validate_required_text(&payload.code, "Coupon code", MAX_CODE_LEN)?;
        self.http.post("coupons", payload).await
    }

    /// `PATCH /coupons/{id}`
    pub async fn update_coupon(&self, id: &str, patch: &CouponUpdate) -> ClientResult<Coupon> {
        validate_path_key(id, "Coupon id")?;
        self.http
            .patch(&format!("coupons/{}", segment(id)), patch)
            .await
    }

    /// `GET /content`
    pub async fn list_content(&self) -> ClientResult<Vec<ContentBlock>> {
        self.http.get("content").await
    }

    /// `GET /audit`
    pub async fn list_audit(&self) -> ClientResult<AuditLog> {
        self.http.get("audit").await
    }
}
