pub mod score;
pub mod time;
