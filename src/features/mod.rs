pub mod admin;
pub mod applications;
pub mod auth;
pub mod campaigns;
pub mod profiles;
pub mod submissions;
pub mod waitlist;

#[cfg(test)]
mod marketplace_flow_tests;
