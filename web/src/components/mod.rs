pub mod disease_card;
pub mod empty_state;
pub mod layout;
pub mod nav;
