//! # Checkout
//!
//! The two places where the local cart meets the API.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         place_order_from_cart                           │
//! │                                                                         │
//! │  cart empty? ──────────────────────► CoreError::EmptyCart              │
//! │       │                                                                 │
//! │  validate address / notes ─────────► ValidationError                   │
//! │       │                                                                 │
//! │  { deliveryAddress, notes?, items: [{ mealId, quantity }] }            │
//! │       │                                                                 │
//! │  POST /api/orders                                                      │
//! │       ├── error ──► cart untouched, error returned                     │
//! │       └── 201   ──► cart cleared, Order returned                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};

use foodhub_core::validation::{validate_delivery_address, validate_notes};
use foodhub_core::{CoreError, Meal, Order, PlaceOrderRequest};
use foodhub_store::{CartStore, Storage};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Fetches a meal and adds one of it to the cart.
///
/// Unavailable meals and meals from closed restaurants are refused with
/// `CoreError::MealUnavailable`; the cart is not touched.
pub async fn add_meal_to_cart<S: Storage>(
    client: &ApiClient,
    store: &mut CartStore<S>,
    meal_id: &str,
) -> ClientResult<Meal> {
    let meal = client.meal(meal_id).await?;
    meal.ensure_orderable()?;
    store.add_item(&meal);
    Ok(meal)
}

/// Builds the order request from the cart's current lines.
pub fn build_order_request<S: Storage>(
    store: &CartStore<S>,
    delivery_address: &str,
    notes: Option<&str>,
) -> ClientResult<PlaceOrderRequest> {
    if store.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    Ok(PlaceOrderRequest {
        delivery_address: validate_delivery_address(delivery_address)?,
        notes: validate_notes(notes)?,
        items: store.order_lines(),
    })
}

/// Places an order for everything in the cart and clears the cart once the
/// API has accepted it.
pub async fn place_order_from_cart<S: Storage>(
    client: &ApiClient,
    store: &mut CartStore<S>,
    delivery_address: &str,
    notes: Option<&str>,
) -> ClientResult<Order> {
    let request = build_order_request(store, delivery_address, notes)?;

    let providers = store.provider_ids();
    if providers.len() > 1 {
        warn!(
            providers = ?providers,
            "Cart holds meals from more than one restaurant"
        );
    }

    let order = client.place_order(&request).await?;
    store.clear();
    info!(order_id = %order.id, lines = request.items.len(), "Checkout complete, cart cleared");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::*;
    use crate::error::ClientError;
    use foodhub_core::Money;
    use foodhub_store::MemoryStorage;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn meal(id: &str, price: &str) -> Meal {
        serde_json::from_value(meal_json(id, price)).unwrap()
    }

    fn filled_store() -> (MemoryStorage, CartStore<MemoryStorage>) {
        let storage = MemoryStorage::new();
        let mut store = CartStore::load(storage.clone());
        store.add_item(&meal("a", "100.00"));
        store.add_item(&meal("b", "50.00"));
        store.add_item(&meal("b", "50.00"));
        (storage, store)
    }

    #[tokio::test]
    async fn test_checkout_clears_cart_after_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/orders"))
            .and(body_json(json!({
                "deliveryAddress": "House 12, Road 5",
                "notes": "Ring twice",
                "items": [
                    { "mealId": "a", "quantity": 1 },
                    { "mealId": "b", "quantity": 2 }
                ]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "order": order_json("ord-1", "placed")
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (storage, mut store) = filled_store();
        assert_eq!(store.total(), Money::from_major(200));

        let order = place_order_from_cart(
            &client_for(&server),
            &mut store,
            "  House 12, Road 5 ",
            Some("Ring twice"),
        )
        .await
        .unwrap();

        assert_eq!(order.id, "ord-1");
        assert!(store.is_empty());
        assert!(CartStore::load(storage).is_empty());
    }

    #[tokio::test]
    async fn test_checkout_failure_keeps_cart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/orders"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({ "error": "Restaurant is closed" })),
            )
            .mount(&server)
            .await;

        let (storage, mut store) = filled_store();
        let err = place_order_from_cart(&client_for(&server), &mut store, "Road 5", None)
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Restaurant is closed");
        assert_eq!(store.count(), 3);
        assert_eq!(CartStore::load(storage).count(), 3);
    }

    #[tokio::test]
    async fn test_checkout_rejects_empty_cart_and_blank_address() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;
        let client = client_for(&server);

        let mut empty = CartStore::load(MemoryStorage::new());
        assert!(matches!(
            place_order_from_cart(&client, &mut empty, "Road 5", None).await,
            Err(ClientError::Core(CoreError::EmptyCart))
        ));

        let (_, mut store) = filled_store();
        assert!(matches!(
            place_order_from_cart(&client, &mut store, "   ", None).await,
            Err(ClientError::Validation(_))
        ));
        assert_eq!(store.count(), 3);
    }

    #[tokio::test]
    async fn test_add_meal_to_cart_refuses_unavailable() {
        let server = MockServer::start().await;
        let mut sold_out = meal_json("gone", "10.00");
        sold_out["isAvailable"] = json!(false);
        Mock::given(method("GET"))
            .and(path("/api/meals/gone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meal": sold_out })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/meals/a"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "meal": meal_json("a", "10.00") })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut store = CartStore::load(MemoryStorage::new());

        assert!(matches!(
            add_meal_to_cart(&client, &mut store, "gone").await,
            Err(ClientError::Core(CoreError::MealUnavailable(_)))
        ));
        assert!(store.is_empty());

        add_meal_to_cart(&client, &mut store, "a").await.unwrap();
        add_meal_to_cart(&client, &mut store, "a").await.unwrap();
        assert_eq!(store.quantity_of("a"), 2);
    }
}
