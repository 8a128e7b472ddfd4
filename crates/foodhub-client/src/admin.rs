//! Admin panel: users, all orders, categories.

use reqwest::Method;
use tracing::info;

use foodhub_core::validation::{validate_category_slug, validate_meal_name};
use foodhub_core::{Category, CategoryInput, Order, Stats, User, UserStatus};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::provider::StatusBody;

impl ApiClient {
    pub async fn admin_stats(&self) -> ClientResult<Stats> {
        self.send_for(self.request(Method::GET, "/api/admin/stats"), "stats")
            .await
    }

    pub async fn admin_users(&self) -> ClientResult<Vec<User>> {
        self.send_for(self.request(Method::GET, "/api/admin/users"), "users")
            .await
    }

    /// Suspends or re-activates an account.
    pub async fn update_user_status(&self, id: &str, status: UserStatus) -> ClientResult<User> {
        let path = Self::path_with_id("/api/admin/users", id, "")?;
        let request = self
            .request(Method::PATCH, &path)
            .json(&StatusBody { status });
        let user: User = self.send_for(request, "user").await?;
        info!(user_id = %user.id, status = ?user.status, "User status updated");
        Ok(user)
    }

    pub async fn admin_orders(&self) -> ClientResult<Vec<Order>> {
        self.send_for(self.request(Method::GET, "/api/admin/orders"), "orders")
            .await
    }

    pub async fn add_category(&self, input: &CategoryInput) -> ClientResult<Category> {
        let input = CategoryInput {
            name: validate_meal_name(&input.name)?,
            slug: validate_category_slug(&input.slug)?,
        };
        let request = self.request(Method::POST, "/api/categories").json(&input);
        self.send_for(request, "category").await
    }

    pub async fn delete_category(&self, id: &str) -> ClientResult<()> {
        let path = Self::path_with_id("/api/categories", id, "")?;
        self.send_empty(self.request(Method::DELETE, &path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::*;
    use crate::error::ClientError;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_update_user_status() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/admin/users/u1"))
            .and(body_json(json!({ "status": "suspended" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {
                    "id": "u1", "name": "Rahim", "email": "rahim@example.com",
                    "role": "customer", "status": "suspended",
                    "createdAt": "2024-01-01T00:00:00Z"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server)
            .update_user_status("u1", UserStatus::Suspended)
            .await
            .unwrap();
        assert_eq!(user.status, UserStatus::Suspended);
    }

    #[tokio::test]
    async fn test_add_category_validates_slug() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/categories"))
            .and(body_json(json!({ "name": "Street Food", "slug": "street-food" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "category": { "id": "c9", "name": "Street Food", "slug": "street-food" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let category = client
            .add_category(&CategoryInput {
                name: " Street Food ".to_string(),
                slug: "street-food".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(category.id, "c9");

        let err = client
            .add_category(&CategoryInput {
                name: "Street Food".to_string(),
                slug: "Street Food".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_category_surfaces_conflict() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/categories/c1"))
            .respond_with(
                ResponseTemplate::new(409).set_body_json(json!({ "error": "Category has meals" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).delete_category("c1").await.unwrap_err();
        assert_eq!(err.user_message(), "Category has meals");
        assert_eq!(err.status(), Some(409));
    }
}
