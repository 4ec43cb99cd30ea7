pub mod application_handler;

pub use application_handler::{
    __path_accept_application, __path_apply_to_campaign, __path_list_campaign_applications,
    __path_list_my_applications, __path_reject_application, accept_application,
    apply_to_campaign, list_campaign_applications, list_my_applications, reject_application,
};
