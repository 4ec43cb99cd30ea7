use crate::core::error::{AppError, Result};
use crate::features::profiles::models::{Brand, Creator, Profile};

/// What a verified identity may act as, resolved from its profile.
#[derive(Debug, Clone)]
pub enum Actor {
    /// Verified identity without a profile (not yet onboarded)
    Anonymous,
    Brand(Brand),
    Creator(Creator),
    Admin(Profile),
}

impl Actor {
    /// Require a brand profile, failing with `Forbidden(message)` otherwise.
    pub fn require_brand(self, message: &str) -> Result<Brand> {
        match self {
            Actor::Brand(brand) => Ok(brand),
            _ => Err(AppError::Forbidden(message.to_string())),
        }
    }

    /// Require a creator profile, failing with `Forbidden(message)` otherwise.
    pub fn require_creator(self, message: &str) -> Result<Creator> {
        match self {
            Actor::Creator(creator) => Ok(creator),
            _ => Err(AppError::Forbidden(message.to_string())),
        }
    }

    pub fn require_admin(self) -> Result<Profile> {
        match self {
            Actor::Admin(profile) => Ok(profile),
            _ => Err(AppError::Forbidden(
                "Access denied. Admin only.".to_string(),
            )),
        }
    }
}
