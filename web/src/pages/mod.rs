pub mod dashboard;
pub mod diagnosis;
pub mod disease;
pub mod diseases;
pub mod help;
pub mod home;
pub mod results;
