//! Public catalog: meals, providers, categories.

use reqwest::Method;

use foodhub_core::validation::validate_search_query;
use foodhub_core::{Category, Meal, ProviderProfile};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Query filters for `GET /api/meals`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealFilters {
    /// Category slug or id.
    pub category: Option<String>,
    pub search: Option<String>,
    pub vegetarian: bool,
    pub vegan: bool,
}

impl MealFilters {
    /// Query pairs in a stable order.
    pub fn to_query(&self) -> ClientResult<Vec<(&'static str, String)>> {
        let mut query = Vec::new();
        if let Some(category) = self.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            query.push(("category", category.to_string()));
        }
        if let Some(search) = &self.search {
            let search = validate_search_query(search)?;
            if !search.is_empty() {
                query.push(("search", search));
            }
        }
        if self.vegetarian {
            query.push(("isVegetarian", "true".to_string()));
        }
        if self.vegan {
            query.push(("isVegan", "true".to_string()));
        }
        Ok(query)
    }
}

impl ApiClient {
    pub async fn meals(&self, filters: &MealFilters) -> ClientResult<Vec<Meal>> {
        let query = filters.to_query()?;
        let request = self.request(Method::GET, "/api/meals").query(&query);
        self.send_for(request, "meals").await
    }

    pub async fn meal(&self, id: &str) -> ClientResult<Meal> {
        let path = Self::path_with_id("/api/meals", id, "")?;
        self.send_for(self.request(Method::GET, &path), "meal").await
    }

    pub async fn providers(&self) -> ClientResult<Vec<ProviderProfile>> {
        self.send_for(self.request(Method::GET, "/api/providers"), "providers")
            .await
    }

    /// A provider with its menu.
    pub async fn provider(&self, id: &str) -> ClientResult<ProviderProfile> {
        let path = Self::path_with_id("/api/providers", id, "")?;
        self.send_for(self.request(Method::GET, &path), "provider").await
    }

    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.send_for(self.request(Method::GET, "/api/categories"), "categories")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_filters_to_query() {
        let filters = MealFilters {
            category: Some("biryani".to_string()),
            search: Some("  kacchi ".to_string()),
            vegetarian: true,
            vegan: false,
        };
        assert_eq!(
            filters.to_query().unwrap(),
            vec![
                ("category", "biryani".to_string()),
                ("search", "kacchi".to_string()),
                ("isVegetarian", "true".to_string()),
            ]
        );
        assert!(MealFilters::default().to_query().unwrap().is_empty());
    }

    #[test]
    fn test_overlong_search_is_rejected() {
        let filters = MealFilters {
            search: Some("x".repeat(101)),
            ..Default::default()
        };
        assert!(filters.to_query().is_err());
    }

    #[tokio::test]
    async fn test_meals_sends_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/meals"))
            .and(query_param("category", "desserts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meals": [meal_json("m1", "80.00"), meal_json("m2", "120.50")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let filters = MealFilters {
            category: Some("desserts".to_string()),
            ..Default::default()
        };
        let meals = client_for(&server).meals(&filters).await.unwrap();

        assert_eq!(meals.len(), 2);
        assert_eq!(meals[1].unit_price().unwrap().minor_units(), 12050);
    }

    #[tokio::test]
    async fn test_meal_and_provider_envelopes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/meals/m1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "meal": meal_json("m1", "80.00") })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/providers/prov-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "provider": {
                    "id": "prov-1",
                    "userId": "u1",
                    "restaurantName": "Star Kabab",
                    "isOpen": true,
                    "meals": [meal_json("m1", "80.00")]
                }
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "categories": [{ "id": "c1", "name": "Desserts", "slug": "desserts" }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.meal("m1").await.unwrap().id, "m1");

        let provider = client.provider("prov-1").await.unwrap();
        assert_eq!(provider.restaurant_name, "Star Kabab");
        assert_eq!(provider.meals.map(|m| m.len()), Some(1));

        let categories = client.categories().await.unwrap();
        assert_eq!(categories[0].slug, "desserts");
    }
}
