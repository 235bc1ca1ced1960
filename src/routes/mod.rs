pub mod health;
pub mod heavy;
pub mod visits;
