pub mod die;
pub mod engine;
pub mod notation;
pub mod outcome;
pub mod response;
pub mod roller;
