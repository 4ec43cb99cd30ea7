pub mod waitlist_handler;

pub use waitlist_handler::{__path_join_waitlist, join_waitlist};
