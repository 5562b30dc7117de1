pub mod application;
pub mod bullet;
