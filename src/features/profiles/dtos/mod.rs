pub mod profile_dto;

pub use profile_dto::{
    BrandResponseDto, CreatorResponseDto, ProfileResponseDto, RoleProfileDto, UpdateProfileDto,
};
