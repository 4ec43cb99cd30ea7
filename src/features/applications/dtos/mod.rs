pub mod application_dto;

pub use application_dto::{
    ApplicantDto, ApplicationCampaignDto, ApplicationResponseDto, ApplyDto,
    CampaignApplicationDto, MyApplicationDto,
};
