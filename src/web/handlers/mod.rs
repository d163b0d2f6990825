pub mod compute;
pub mod status;
