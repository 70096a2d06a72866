pub mod map;
pub mod on_error_resume_next;
pub mod on_error_return;

pub use map::MapOp;
pub use on_error_resume_next::ResumeNextOp;
pub use on_error_return::{OnErrorReturnItemOp, OnErrorReturnOp};
