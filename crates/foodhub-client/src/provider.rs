//! Provider dashboard: menu editor, order board, stats.
//!
//! ## Order Board
//! ```text
//!  placed ──advance──► preparing ──advance──► ready ──advance──► delivered
//! ```
//! [`ApiClient::advance_order`] computes the next status locally and refuses
//! terminal orders before any request is sent.

use reqwest::Method;
use serde::Serialize;
use tracing::info;

use foodhub_core::{Meal, MealInput, Order, OrderStatus, Stats, ValidationError};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// `{ "status": ... }` body shared by the status-changing routes.
#[derive(Serialize)]
pub(crate) struct StatusBody<T: Serialize> {
    pub status: T,
}

impl ApiClient {
    pub async fn provider_meals(&self) -> ClientResult<Vec<Meal>> {
        self.send_for(self.request(Method::GET, "/api/provider/meals"), "meals")
            .await
    }

    pub async fn provider_orders(&self) -> ClientResult<Vec<Order>> {
        self.send_for(self.request(Method::GET, "/api/provider/orders"), "orders")
            .await
    }

    pub async fn provider_stats(&self) -> ClientResult<Stats> {
        self.send_for(self.request(Method::GET, "/api/provider/stats"), "stats")
            .await
    }

    /// Adds a meal to the provider's menu. Name and price are required.
    pub async fn add_meal(&self, input: &MealInput) -> ClientResult<Meal> {
        if input.name.is_none() {
            return Err(ValidationError::Required {
                field: "meal name".to_string(),
            }
            .into());
        }
        if input.price.is_none() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            }
            .into());
        }

        let request = self.request(Method::POST, "/api/provider/meals").json(input);
        let meal: Meal = self.send_for(request, "meal").await?;
        info!(meal_id = %meal.id, name = %meal.name, "Meal added");
        Ok(meal)
    }

    /// Partially updates a meal; only the `Some` fields are sent.
    pub async fn update_meal(&self, id: &str, input: &MealInput) -> ClientResult<Meal> {
        let path = Self::path_with_id("/api/provider/meals", id, "")?;
        let request = self.request(Method::PUT, &path).json(input);
        self.send_for(request, "meal").await
    }

    pub async fn delete_meal(&self, id: &str) -> ClientResult<()> {
        let path = Self::path_with_id("/api/provider/meals", id, "")?;
        self.send_empty(self.request(Method::DELETE, &path)).await?;
        info!(meal_id = id, "Meal deleted");
        Ok(())
    }

    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        let path = Self::path_with_id("/api/provider/orders", id, "")?;
        let request = self
            .request(Method::PATCH, &path)
            .json(&StatusBody { status });
        self.send_for(request, "order").await
    }

    /// Moves an order one step along the provider lifecycle.
    ///
    /// Delivered and cancelled orders fail with
    /// `CoreError::InvalidTransition` and nothing is sent.
    pub async fn advance_order(&self, order: &Order) -> ClientResult<Order> {
        let next = order.next_status()?;
        info!(order_id = %order.id, from = %order.status, to = %next, "Advancing order");
        self.update_order_status(&order.id, next).await
    }
}
