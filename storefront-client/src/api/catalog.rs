// storefront-client/src/api/catalog.rs
// 商品目录 API

use shared::models::{Category, Product, ProductWrite};
use shared::Page;

use super::StorefrontClient;
use crate::ClientResult;
use crate::http::{FileUpload, HttpClient, segment};
use crate::validation::validate_path_key;

impl<C: HttpClient> StorefrontClient<C> {
    /// `GET /catalog/products` with listing parameters
    pub async fn list_products(&self, params: &[(String, String)]) -> ClientResult<Page<Product>> {
        self.http.get_query("catalog/products", params).await
    }

    /// `GET /catalog/products/{slug}`
    pub async fn get_product(&self, slug: &str) -> ClientResult<Product> {
        validate_path_key(slug, "Product slug")?;
        self.http
            .get(&format!("catalog/products/{}", segment(slug)))
            .await
    }

    /// `GET /catalog/categories`
    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.http.get("catalog/categories").await
    }

    /// `POST /catalog/products`
    pub async fn create_product(&self, payload: &ProductWrite) -> ClientResult<Product> {
        self.http.post("catalog/products", payload).await
    }

    /// `PATCH /catalog/products/{slug}`
    pub async fn update_product(&self, slug: &str, payload: &ProductWrite) -> ClientResult<Product> {
        validate_path_key(slug, "Product slug")?;
        self.http
            .patch(&format!("catalog/products/{}", segment(slug)), payload)
            .await
    }

    /// `DELETE /catalog/products/{slug}`
    pub async fn delete_product(&self, slug: &str) -> ClientResult<()> {
        validate_path_key(slug, "Product slug")?;
        self.http
            .delete(&format!("catalog/products/{}", segment(slug)))
            .await
    }

    /// `POST /catalog/products/{slug}/images`, answers with the updated product
    pub async fn upload_product_image(&self, slug: &str, file: &FileUpload) -> ClientResult<Product> {
        validate_path_key(slug, "Product slug")?;
        self.http
            .post_file(&format!("catalog/products/{}/images", segment(slug)), file)
            .await
    }

    /// `DELETE /catalog/products/{slug}/images/{image_id}`, answers with the updated product
    pub async fn delete_product_image(&self, slug: &str, image_id: &str) -> ClientResult<Product> {
        validate_path_key(slug, "Product slug")?;
        validate_path_key(image_id, "Image id")?;
        self.http
            .delete_json(&format!(
                "catalog/products/{}/images/{}",
                segment(slug),
                segment(image_id)
            ))
            .await
    }
}
