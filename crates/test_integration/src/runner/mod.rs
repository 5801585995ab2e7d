pub mod context;
pub mod orchestration_utils;
