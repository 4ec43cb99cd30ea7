pub mod campaign_handler;

pub use campaign_handler::{
    __path_create_campaign, __path_get_campaign, __path_list_campaigns, __path_list_my_campaigns,
    __path_update_campaign, create_campaign, get_campaign, list_campaigns, list_my_campaigns,
    update_campaign,
};
