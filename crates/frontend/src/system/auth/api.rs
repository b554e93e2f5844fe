use contracts::system::auth::{RegisterRestaurantRequest, SignInRequest};

use crate::shared::http::{ApiClient, ApiRequest, HttpError};

/// Request a magic sign-in link for `email`
pub async fn sign_in(api: ApiClient, request: SignInRequest) -> Result<(), HttpError> {
    api.execute(ApiRequest::post("/authenticate").with_json(&request)?)
        .await
}

/// Register a restaurant and its manager
pub async fn register_restaurant(
    api: ApiClient,
    request: RegisterRestaurantRequest,
) -> Result<(), HttpError> {
    api.execute(ApiRequest::post("/restaurants").with_json(&request)?)
        .await
}

/// Drop the session cookie
pub async fn sign_out(api: ApiClient, _: ()) -> Result<(), HttpError> {
    api.execute(ApiRequest::post("/sign-out")).await
}
