pub mod profile_handler;

pub use profile_handler::{
    __path_get_my_profile, __path_update_my_profile, get_my_profile, update_my_profile,
};
