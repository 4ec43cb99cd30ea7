pub mod waitlist_dto;

pub use waitlist_dto::{JoinWaitlistDto, WaitlistEntryDto};
