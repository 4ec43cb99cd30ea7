pub mod submission_dto;

pub use submission_dto::{
    CreateSubmissionDto, PresignQuery, SubmissionCampaignDto, SubmissionCreatorDto,
    SubmissionListItemDto, SubmissionResponseDto,
};
