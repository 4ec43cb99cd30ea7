use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::profiles::models::UserRole;
use crate::shared::validation::{validate_not_blank, validate_tags, USERNAME_REGEX};

/// DTO for /auth/me response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeResponseDto {
    pub authenticated: bool,
    #[serde(rename = "hasProfile")]
    pub has_profile: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl MeResponseDto {
    pub fn new(role: Option<UserRole>) -> Self {
        Self {
            authenticated: true,
            has_profile: role.is_some(),
            role,
        }
    }
}

/// Roles a user may pick during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingRole {
    Brand,
    Creator,
}

impl From<OnboardingRole> for UserRole {
    fn from(role: OnboardingRole) -> Self {
        match role {
            OnboardingRole::Brand => UserRole::Brand,
            OnboardingRole::Creator => UserRole::Creator,
        }
    }
}

/// Request DTO for first-time onboarding
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OnboardingRequestDto {
    pub role: OnboardingRole,

    #[validate(
        length(max = 128, message = "Name must not exceed 128 characters"),
        custom(function = "validate_not_blank", message = "Name is required")
    )]
    pub name: String,

    /// Brand only
    #[validate(length(max = 128, message = "Industry must not exceed 128 characters"))]
    pub industry: Option<String>,

    /// Creator only
    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must start with letter or underscore and contain only alphanumeric characters and underscores"
        )
    )]
    pub username: Option<String>,

    /// Creator only
    #[validate(custom(function = "validate_tags"))]
    pub niche_tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::company::en::CompanyName;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn brand_request() -> OnboardingRequestDto {
        OnboardingRequestDto {
            role: OnboardingRole::Brand,
            name: CompanyName().fake(),
            industry: Some("Beverages".to_string()),
            username: None,
            niche_tags: None,
        }
    }

    #[test]
    fn test_me_response_shape() {
        let json = serde_json::to_value(MeResponseDto::new(None)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "authenticated": true, "hasProfile": false })
        );

        let json = serde_json::to_value(MeResponseDto::new(Some(UserRole::Creator))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "authenticated": true, "hasProfile": true, "role": "creator" })
        );
    }

    #[test]
    fn test_onboarding_validation() {
        assert!(brand_request().validate().is_ok());

        let creator = OnboardingRequestDto {
            role: OnboardingRole::Creator,
            name: Name().fake(),
            industry: None,
            username: Some("jane_doe".to_string()),
            niche_tags: Some(vec!["beauty".to_string(), "travel".to_string()]),
        };
        assert!(creator.validate().is_ok());

        let blank = OnboardingRequestDto {
            name: "   ".to_string(),
            ..brand_request()
        };
        assert!(blank.validate().is_err());

        let bad_username = OnboardingRequestDto {
            username: Some("has space".to_string()),
            ..creator
        };
        assert!(bad_username.validate().is_err());
    }

    #[test]
    fn test_onboarding_role_rejects_admin() {
        let body = serde_json::json!({ "role": "admin", "name": "Root" });
        assert!(serde_json::from_value::<OnboardingRequestDto>(body).is_err());

        let body = serde_json::json!({ "role": "brand", "name": "Acme" });
        let dto: OnboardingRequestDto = serde_json::from_value(body).unwrap();
        assert_eq!(UserRole::from(dto.role), UserRole::Brand);
    }
}
