use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::applications::{
    dtos as applications_dtos, handlers as applications_handlers,
    models as applications_models,
};
use crate::features::auth;
use crate::features::campaigns::{
    dtos as campaigns_dtos, handlers as campaigns_handlers, models as campaigns_models,
};
use crate::features::profiles::{
    dtos as profiles_dtos, handlers as profiles_handlers, models as profiles_models,
};
use crate::features::submissions::{
    dtos as submissions_dtos, handlers as submissions_handlers, models as submissions_models,
};
use crate::features::waitlist::{
    dtos as waitlist_dtos, handlers as waitlist_handlers, models as waitlist_models,
};
use crate::modules::storage::PresignedUpload;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::get_me,
        auth::handlers::onboarding,
        // Profiles
        profiles_handlers::get_my_profile,
        profiles_handlers::update_my_profile,
        // Campaigns
        campaigns_handlers::list_campaigns,
        campaigns_handlers::get_campaign,
        campaigns_handlers::create_campaign,
        campaigns_handlers::update_campaign,
        campaigns_handlers::list_my_campaigns,
        // Applications
        applications_handlers::apply_to_campaign,
        applications_handlers::list_campaign_applications,
        applications_handlers::accept_application,
        applications_handlers::reject_application,
        applications_handlers::list_my_applications,
        // Submissions
        submissions_handlers::create_submission,
        submissions_handlers::list_submissions,
        submissions_handlers::approve_submission,
        submissions_handlers::reject_submission,
        submissions_handlers::presign_upload,
        // Waitlist (public)
        waitlist_handlers::join_waitlist,
        // Admin
        admin_handlers::get_stats,
        admin_handlers::list_users,
        admin_handlers::list_campaigns,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            auth::dto::MeResponseDto,
            auth::dto::OnboardingRole,
            auth::dto::OnboardingRequestDto,
            ApiResponse<auth::dto::MeResponseDto>,
            // Profiles
            profiles_models::UserRole,
            profiles_dtos::BrandResponseDto,
            profiles_dtos::CreatorResponseDto,
            profiles_dtos::RoleProfileDto,
            profiles_dtos::ProfileResponseDto,
            profiles_dtos::UpdateProfileDto,
            ApiResponse<profiles_dtos::ProfileResponseDto>,
            // Campaigns
            campaigns_models::CampaignStatus,
            campaigns_models::ContentType,
            campaigns_dtos::CreateCampaignDto,
            campaigns_dtos::UpdateCampaignDto,
            campaigns_dtos::CampaignResponseDto,
            campaigns_dtos::BrandSummaryDto,
            campaigns_dtos::CampaignDetailDto,
            campaigns_dtos::MyCampaignDto,
            ApiResponse<campaigns_dtos::CampaignResponseDto>,
            ApiResponse<campaigns_dtos::CampaignDetailDto>,
            ApiResponse<Vec<campaigns_dtos::CampaignDetailDto>>,
            ApiResponse<Vec<campaigns_dtos::MyCampaignDto>>,
            // Applications
            applications_models::ApplicationStatus,
            applications_dtos::ApplyDto,
            applications_dtos::ApplicationResponseDto,
            applications_dtos::ApplicationCampaignDto,
            applications_dtos::MyApplicationDto,
            applications_dtos::ApplicantDto,
            applications_dtos::CampaignApplicationDto,
            ApiResponse<applications_dtos::ApplicationResponseDto>,
            ApiResponse<Vec<applications_dtos::MyApplicationDto>>,
            ApiResponse<Vec<applications_dtos::CampaignApplicationDto>>,
            // Submissions
            submissions_models::SubmissionStatus,
            submissions_dtos::CreateSubmissionDto,
            submissions_dtos::SubmissionResponseDto,
            submissions_dtos::SubmissionCampaignDto,
            submissions_dtos::SubmissionCreatorDto,
            submissions_dtos::SubmissionListItemDto,
            PresignedUpload,
            ApiResponse<submissions_dtos::SubmissionResponseDto>,
            ApiResponse<Vec<submissions_dtos::SubmissionListItemDto>>,
            ApiResponse<PresignedUpload>,
            // Waitlist
            waitlist_models::FormType,
            waitlist_dtos::JoinWaitlistDto,
            waitlist_dtos::WaitlistEntryDto,
            ApiResponse<waitlist_dtos::WaitlistEntryDto>,
            // Admin
            admin_dtos::AdminStatsDto,
            admin_dtos::AdminUserDto,
            ApiResponse<admin_dtos::AdminStatsDto>,
            ApiResponse<Vec<admin_dtos::AdminUserDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Current identity and onboarding"),
        (name = "profiles", description = "Own brand or creator profile"),
        (name = "campaigns", description = "Campaigns posted by brands"),
        (name = "applications", description = "Creator applications to campaigns"),
        (name = "submissions", description = "Deliverables and media uploads"),
        (name = "waitlist", description = "Waitlist intake (public)"),
        (name = "admin", description = "Admin endpoints (admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Collab Market API",
        version = "0.1.0",
        description = "API documentation for the brand and creator campaign marketplace",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route_group() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/auth/me",
            "/api/campaigns/{id}/apply",
            "/api/applications/{id}/accept",
            "/api/submissions/presign",
            "/api/waitlist",
            "/api/admin/stats",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {}",
                expected
            );
        }

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Staging".to_string(),
            version: "9.9.9".to_string(),
            description: "staging build".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Staging");
        assert_eq!(doc.info.description.as_deref(), Some("staging build"));
    }
}
