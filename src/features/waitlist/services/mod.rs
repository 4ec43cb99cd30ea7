mod waitlist_service;

pub use waitlist_service::WaitlistService;
