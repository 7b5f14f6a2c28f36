pub mod factory;
pub mod finance;
pub mod repositories;
