use contracts::domain::a002_restaurant::{ManagedRestaurant, UpdateProfileDto, UserProfile};

use crate::shared::http::{ApiClient, ApiRequest, HttpError};
use crate::shared::query::QueryKey;

pub fn managed_restaurant_key() -> QueryKey {
    QueryKey::new("managed-restaurant")
}

pub fn profile_key() -> QueryKey {
    QueryKey::new("profile")
}

pub async fn get_managed_restaurant(api: ApiClient, _: ()) -> Result<ManagedRestaurant, HttpError> {
    api.fetch_json(ApiRequest::get("/managed-restaurant")).await
}

pub async fn get_profile(api: ApiClient, _: ()) -> Result<UserProfile, HttpError> {
    api.fetch_json(ApiRequest::get("/me")).await
}

pub async fn update_profile(api: ApiClient, profile: UpdateProfileDto) -> Result<(), HttpError> {
    api.execute(ApiRequest::put("/profile").with_json(&profile)?)
        .await
}
