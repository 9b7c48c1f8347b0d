//! Typed helpers for the `/api/v1` CRUD surface.
//!
//! One async function per endpoint; transport details (CSRF, casing, error
//! wrapping) live in [`crate::net::http`]. Create forms post through the
//! form engine instead, using the endpoint helpers here for their target
//! paths.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::form::schema::FormSchema;
use crate::net::http::{self, ApiResult};
use crate::net::types::{Envelope, Home, Ingredient, Plan, Product, Recipe, Unit, User};

pub fn products_endpoint() -> &'static str {
    "/api/v1/products"
}

pub fn product_endpoint(id: &str) -> String {
    format!("/api/v1/products/{id}")
}

pub fn recipes_endpoint() -> &'static str {
    "/api/v1/recipes"
}

pub fn recipe_endpoint(id: &str) -> String {
    format!("/api/v1/recipes/{id}")
}

pub fn ingredients_endpoint() -> &'static str {
    "/api/v1/ingredients"
}

pub fn ingredient_endpoint(id: &str) -> String {
    format!("/api/v1/ingredients/{id}")
}

pub fn units_endpoint() -> &'static str {
    "/api/v1/units"
}

pub fn unit_endpoint(id: &str) -> String {
    format!("/api/v1/units/{id}")
}

pub fn users_endpoint() -> &'static str {
    "/api/v1/users"
}

pub fn plans_endpoint() -> &'static str {
    "/api/v1/plans"
}

pub fn plan_endpoint(id: &str) -> String {
    format!("/api/v1/plans/{id}")
}

pub fn form_schema_endpoint(form_id: &str) -> String {
    format!("/api/v1/forms/{form_id}")
}

/// Fetch the currently authenticated user.
///
/// # Errors
///
/// Fails when the session is missing or the request cannot complete.
pub async fn fetch_current_user() -> ApiResult<User> {
    http::get_json("/api/v1/auth/me", &[]).await
}

/// Log in with email and password; returns the authenticated user.
///
/// # Errors
///
/// Fails on bad credentials or transport problems.
pub async fn login(email: &str, password: &str) -> ApiResult<User> {
    let body = serde_json::json!({ "email": email, "password": password });
    http::post_json("/api/v1/auth/login", &body).await
}

/// Log out the current user. Failures are ignored; the session cookie is
/// gone either way.
pub async fn logout() {
    let _ = http::post_json::<Envelope>("/api/v1/auth/logout", &serde_json::Value::Null).await;
}

/// Fetch the home the current user belongs to.
pub async fn fetch_current_home() -> ApiResult<Home> {
    http::get_json("/api/v1/homes/current", &[]).await
}

/// Update the current home (budget, resident count).
pub async fn update_home(home: &Home) -> ApiResult<Home> {
    let body = serde_json::to_value(home)
        .map_err(|e| http::ApiError::Decode(e.to_string()))?;
    http::put_json(&format!("/api/v1/homes/{}", home.id), &body).await
}

/// Fetch the form schema the server declares for `form_id`
/// (e.g. `product.create`).
pub async fn fetch_form_schema(form_id: &str) -> ApiResult<FormSchema> {
    http::get_json(&form_schema_endpoint(form_id), &[]).await
}

pub async fn list_products() -> ApiResult<Vec<Product>> {
    http::get_json(products_endpoint(), &[]).await
}

pub async fn fetch_product(id: &str) -> ApiResult<Product> {
    http::get_json(&product_endpoint(id), &[]).await
}

pub async fn delete_product(id: &str) -> ApiResult<Envelope> {
    http::delete(&product_endpoint(id)).await
}

pub async fn list_recipes() -> ApiResult<Vec<Recipe>> {
    http::get_json(recipes_endpoint(), &[]).await
}

pub async fn fetch_recipe(id: &str) -> ApiResult<Recipe> {
    http::get_json(&recipe_endpoint(id), &[]).await
}

/// Persist a full recipe edit, nested groups and steps included.
pub async fn update_recipe(recipe: &Recipe) -> ApiResult<Recipe> {
    let body = serde_json::to_value(recipe)
        .map_err(|e| http::ApiError::Decode(e.to_string()))?;
    http::put_json(&recipe_endpoint(&recipe.id), &body).await
}

pub async fn delete_recipe(id: &str) -> ApiResult<Envelope> {
    http::delete(&recipe_endpoint(id)).await
}

pub async fn list_ingredients() -> ApiResult<Vec<Ingredient>> {
    http::get_json(ingredients_endpoint(), &[]).await
}

pub async fn delete_ingredient(id: &str) -> ApiResult<Envelope> {
    http::delete(&ingredient_endpoint(id)).await
}

pub async fn list_units() -> ApiResult<Vec<Unit>> {
    http::get_json(units_endpoint(), &[]).await
}

pub async fn delete_unit(id: &str) -> ApiResult<Envelope> {
    http::delete(&unit_endpoint(id)).await
}

pub async fn list_users() -> ApiResult<Vec<User>> {
    http::get_json(users_endpoint(), &[]).await
}

/// List planned meals for a home; `home_id` travels as a snake_case query
/// parameter.
pub async fn list_plans(home_id: &str) -> ApiResult<Vec<Plan>> {
    http::get_json(plans_endpoint(), &[("homeId", home_id.to_owned())]).await
}

/// Schedule a recipe on a date for a home.
pub async fn create_plan(home_id: &str, recipe_id: &str, date: &str) -> ApiResult<Plan> {
    let body = serde_json::json!({
        "home_id": home_id,
        "recipe_id": recipe_id,
        "date": date,
    });
    http::post_json(plans_endpoint(), &body).await
}

pub async fn delete_plan(id: &str) -> ApiResult<Envelope> {
    http::delete(&plan_endpoint(id)).await
}
