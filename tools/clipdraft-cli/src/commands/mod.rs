pub mod export;
pub mod info;
pub mod repair;
pub mod validate;
