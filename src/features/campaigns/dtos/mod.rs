pub mod campaign_dto;

pub use campaign_dto::{
    BrandSummaryDto, CampaignDetailDto, CampaignQuery, CampaignResponseDto, CreateCampaignDto,
    MyCampaignDto, UpdateCampaignDto,
};
