//! Customer orders and reviews.

use reqwest::Method;
use tracing::info;

use foodhub_core::validation::{validate_rating, validate_review_comment};
use foodhub_core::{Order, PlaceOrderRequest, Review, ReviewRequest};

use crate::client::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// The signed-in customer's orders.
    pub async fn orders(&self) -> ClientResult<Vec<Order>> {
        self.send_for(self.request(Method::GET, "/api/orders"), "orders")
            .await
    }

    pub async fn order(&self, id: &str) -> ClientResult<Order> {
        let path = Self::path_with_id("/api/orders", id, "")?;
        self.send_for(self.request(Method::GET, &path), "order").await
    }

    /// Submits an order. Most callers want
    /// [`place_order_from_cart`](crate::checkout::place_order_from_cart).
    pub async fn place_order(&self, req: &PlaceOrderRequest) -> ClientResult<Order> {
        let request = self.request(Method::POST, "/api/orders").json(req);
        let order: Order = self.send_for(request, "order").await?;
        info!(order_id = %order.id, total = %order.total_amount, "Order placed");
        Ok(order)
    }

    /// Cancels an order. The server only allows this while it is `placed`.
    pub async fn cancel_order(&self, id: &str) -> ClientResult<Order> {
        let path = Self::path_with_id("/api/orders", id, "/cancel")?;
        self.send_for(self.request(Method::PATCH, &path), "order").await
    }

    /// Reviews a meal from one of the customer's orders.
    pub async fn leave_review(&self, req: &ReviewRequest) -> ClientResult<Review> {
        validate_rating(req.rating)?;
        let req = ReviewRequest {
            comment: validate_review_comment(req.comment.as_deref())?,
            ..req.clone()
        };
        let request = self.request(Method::POST, "/api/reviews").json(&req);
        self.send_for(request, "review").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::*;
    use crate::error::ClientError;
    use foodhub_core::{OrderLine, OrderStatus};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_place_order_posts_lines() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/orders"))
            .and(body_json(json!({
                "deliveryAddress": "Road 5",
                "items": [{ "mealId": "m1", "quantity": 2 }]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "order": order_json("ord-1", "placed")
            })))
            .expect(1)
            .mount(&server)
            .await;

        let req = PlaceOrderRequest {
            delivery_address: "Road 5".to_string(),
            notes: None,
            items: vec![OrderLine {
                meal_id: "m1".to_string(),
                quantity: 2,
            }],
        };
        let order = client_for(&server).place_order(&req).await.unwrap();
        assert_eq!(order.status, OrderStatus::Placed);
    }

    #[tokio::test]
    async fn test_cancel_order_patches_cancel_route() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/orders/ord-1/cancel"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "order": order_json("ord-1", "cancelled")
            })))
            .expect(1)
            .mount(&server)
            .await;

        let order = client_for(&server).cancel_order("ord-1").await.unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_review_validates_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/reviews"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let req = ReviewRequest {
            meal_id: "m1".to_string(),
            order_id: "ord-1".to_string(),
            rating: 9,
            comment: None,
        };
        let err = client_for(&server).leave_review(&req).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn test_review_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/reviews"))
            .and(body_json(json!({ "mealId": "m1", "orderId": "ord-1", "rating": 5 })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "review": {
                    "id": "r1", "customerId": "cust-1", "mealId": "m1", "orderId": "ord-1",
                    "rating": 5, "createdAt": "2024-05-02T10:00:00Z"
                }
            })))
            .mount(&server)
            .await;

        let req = ReviewRequest {
            meal_id: "m1".to_string(),
            order_id: "ord-1".to_string(),
            rating: 5,
            comment: Some("   ".to_string()),
        };
        let review = client_for(&server).leave_review(&req).await.unwrap();
        assert_eq!(review.rating, 5);
    }
}
