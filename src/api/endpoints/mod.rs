pub mod analysis;
pub mod health;
pub mod imaging;
pub mod knowledge;
pub mod patients;
pub mod progression;
pub mod realtime;
