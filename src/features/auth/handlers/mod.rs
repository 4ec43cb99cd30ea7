pub mod auth_handler;

pub use auth_handler::{__path_get_me, __path_onboarding, get_me, onboarding};
