pub mod cards;
pub mod gameroom;
pub mod table;
