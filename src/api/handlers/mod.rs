pub mod health;
pub mod member;
pub mod stats;
