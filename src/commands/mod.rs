pub mod install;
pub mod link;
pub mod resolve;
pub mod switch;
