pub mod fault_boundary;
pub mod footer;
pub mod game_card;
pub mod header;
