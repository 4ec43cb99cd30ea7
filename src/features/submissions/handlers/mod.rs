pub mod submission_handler;

pub use submission_handler::{
    __path_approve_submission, __path_create_submission, __path_list_submissions,
    __path_presign_upload, __path_reject_submission, approve_submission, create_submission,
    list_submissions, presign_upload, reject_submission,
};
