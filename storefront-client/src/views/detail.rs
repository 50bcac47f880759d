// storefront-client/src/views/detail.rs
// 商品详情视图

use rust_decimal::Decimal;
use shared::models::{Product, ProductImage, ProductVariant};

use crate::api::StorefrontClient;
use crate::http::HttpClient;
use crate::notice::Notifier;
use crate::ClientResult;

/// Single product page: variant picker, image gallery, quantity
#[derive(Debug, Clone)]
pub struct ProductDetail {
    product: Option<Product>,
    selected_variant: Option<String>,
    image_index: usize,
    quantity: u32,
    loading: bool,
    last_error: Option<String>,
}

impl Default for ProductDetail {
    fn default() -> Self {
        Self {
            product: None,
            selected_variant: None,
            image_index: 0,
            quantity: 1,
            loading: false,
            last_error: None,
        }
    }
}

impl ProductDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Load a product by slug
    ///
    /// On success the first variant and the first image are selected. On
    /// failure the product is cleared.
    pub async fn load<C: HttpClient>(
        &mut self,
        client: &StorefrontClient<C>,
        slug: &str,
    ) -> ClientResult<()> {
        self.loading = true;
        let result = client.get_product(slug.trim()).await;
        self.loading = false;

        match result {
            Ok(product) => {
                self.selected_variant = product.variants.first().map(|v| v.id.clone());
                self.image_index = 0;
                self.quantity = 1;
                self.product = Some(product);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(slug = %slug, error = %e, "Failed to load product");
                self.product = None;
                self.selected_variant = None;
                self.image_index = 0;
                self.last_error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Select a variant of the loaded product; unknown ids are rejected
    pub fn select_variant(&mut self, variant_id: &str) -> bool {
        let known = self
            .product
            .as_ref()
            .is_some_and(|p| p.variant(variant_id).is_some());
        if known {
            self.selected_variant = Some(variant_id.to_string());
        }
        known
    }

    pub fn selected_variant(&self) -> Option<&ProductVariant> {
        let product = self.product.as_ref()?;
        product.variant(self.selected_variant.as_deref()?)
    }

    /// Select a gallery image; out-of-range indices are rejected
    pub fn select_image(&mut self, index: usize) -> bool {
        let in_range = self
            .product
            .as_ref()
            .is_some_and(|p| index < p.images.len());
        if in_range {
            self.image_index = index;
        }
        in_range
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn active_image(&self) -> Option<&ProductImage> {
        self.product.as_ref()?.images.get(self.image_index)
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    /// Base price plus the selected variant's delta
    pub fn unit_price(&self) -> Option<Decimal> {
        let product = self.product.as_ref()?;
        let delta = self
            .selected_variant()
            .map(|v| v.additional_price_delta)
            .unwrap_or_default();
        Some(product.price + delta)
    }

    /// Confirm the cart addition through the notice channel
    pub fn add_to_cart(&self, notifier: &Notifier) {
        let name = self.product.as_ref().map_or("item", |p| p.name.as_str());
        notifier.success(format!("Added to cart: {} × {}", self.quantity, name));
    }
}
