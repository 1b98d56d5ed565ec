pub mod cart;
pub mod health;
pub mod notification;
pub mod tags;
