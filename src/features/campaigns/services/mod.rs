mod campaign_service;

pub(crate) use campaign_service::CAMPAIGN_WITH_BRAND;
pub use campaign_service::CampaignService;
