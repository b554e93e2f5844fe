use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::validation::{required, FieldErrors};

/// Restaurant managed by the signed-in user (`GET /managed-restaurant`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedRestaurant {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub manager_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ManagedRestaurant {
    /// Copy with only the editable profile fields replaced
    pub fn with_profile(&self, profile: &UpdateProfileDto) -> Self {
        Self {
            name: profile.name.clone(),
            description: profile.description.clone(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Manager,
    Customer,
}

/// Signed-in user (`GET /me`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

/// Body of `PUT /profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    pub name: String,
    pub description: Option<String>,
}

/// Store profile form as typed by the manager
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreProfileForm {
    pub name: String,
    pub description: String,
}

impl StoreProfileForm {
    pub fn from_restaurant(restaurant: &ManagedRestaurant) -> Self {
        Self {
            name: restaurant.name.clone(),
            description: restaurant.description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<UpdateProfileDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", required(&self.name, "O nome é obrigatório"));

        let description = self.description.trim();
        errors.into_result(UpdateProfileDto {
            name: self.name.trim().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant() -> ManagedRestaurant {
        ManagedRestaurant {
            id: "r-1".to_string(),
            name: "Pizza Shop".to_string(),
            description: Some("Forno a lenha".to_string()),
            manager_id: Some("u-1".to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_name_is_required() {
        let form = StoreProfileForm {
            name: "   ".to_string(),
            description: "x".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("O nome é obrigatório"));
    }

    #[test]
    fn test_empty_description_is_sent_as_none() {
        let form = StoreProfileForm {
            name: " Nova Pizza ".to_string(),
            description: String::new(),
        };
        let dto = form.validate().unwrap();
        assert_eq!(dto.name, "Nova Pizza");
        assert_eq!(dto.description, None);
    }

    #[test]
    fn test_with_profile_keeps_identity() {
        let original = restaurant();
        let patched = original.with_profile(&UpdateProfileDto {
            name: "Outra".to_string(),
            description: None,
        });
        assert_eq!(patched.id, original.id);
        assert_eq!(patched.manager_id, original.manager_id);
        assert_eq!(patched.name, "Outra");
        assert_eq!(patched.description, None);
    }

    #[test]
    fn test_form_round_trips_restaurant() {
        let form = StoreProfileForm::from_restaurant(&restaurant());
        assert_eq!(form.description, "Forno a lenha");
        let dto = form.validate().unwrap();
        assert_eq!(restaurant().with_profile(&dto), restaurant());
    }
}
