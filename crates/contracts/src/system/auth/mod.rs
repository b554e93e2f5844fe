use serde::{Deserialize, Serialize};

use crate::shared::validation::{email, max_chars, min_chars, FieldErrors};

/// Error code the backend sends with 401 when the session is gone
pub const UNAUTHORIZED_CODE: &str = "UNAUTHORIZED";

/// JSON body of backend error responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    pub fn is_unauthorized(&self) -> bool {
        self.code.as_deref() == Some(UNAUTHORIZED_CODE)
    }
}

/// Body of `POST /authenticate` (magic link)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
}

/// Body of `POST /restaurants`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRestaurantRequest {
    pub restaurant_name: String,
    pub manager_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<SignInRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("email", email(&self.email));
        errors.into_result(SignInRequest {
            email: self.email.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub restaurant_name: String,
    pub manager_name: String,
    pub email: String,
    pub phone: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<RegisterRestaurantRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("restaurant_name", min_chars(&self.restaurant_name, 3));
        errors.check("manager_name", min_chars(&self.manager_name, 3));
        errors.check("email", email(&self.email));
        errors.check(
            "phone",
            min_chars(&self.phone, 10).and_then(|_| max_chars(&self.phone, 11)),
        );

        errors.into_result(RegisterRestaurantRequest {
            restaurant_name: self.restaurant_name.trim().to_string(),
            manager_name: self.manager_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_code() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"code":"UNAUTHORIZED"}"#).unwrap();
        assert!(body.is_unauthorized());
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"code":"INVALID_TOKEN","message":"x"}"#).unwrap();
        assert!(!body.is_unauthorized());
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(!body.is_unauthorized());
    }

    #[test]
    fn test_sign_in_requires_valid_email() {
        assert!(SignInForm { email: "nope".into() }.validate().is_err());
        let request = SignInForm { email: " gerente@pizza.shop ".into() }
            .validate()
            .unwrap();
        assert_eq!(request.email, "gerente@pizza.shop");
    }

    #[test]
    fn test_sign_up_reports_every_invalid_field() {
        let form = SignUpForm {
            restaurant_name: "Pi".into(),
            manager_name: "Jo".into(),
            email: "x".into(),
            phone: "123".into(),
        };
        let errors = form.validate().unwrap_err();
        for field in ["restaurant_name", "manager_name", "email", "phone"] {
            assert!(errors.has(field), "missing error for {}", field);
        }
    }

    #[test]
    fn test_sign_up_phone_length() {
        let mut form = SignUpForm {
            restaurant_name: "Pizza Shop".into(),
            manager_name: "João".into(),
            email: "joao@pizza.shop".into(),
            phone: "11999998888".into(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.restaurant_name, "Pizza Shop");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["restaurantName"], "Pizza Shop");

        form.phone = "119999988887".into();
        assert!(form.validate().unwrap_err().has("phone"));
    }
}
