pub mod admin_handler;

pub use admin_handler::{
    __path_get_stats, __path_list_campaigns, __path_list_users, get_stats, list_campaigns,
    list_users,
};
