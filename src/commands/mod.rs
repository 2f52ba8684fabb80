pub mod add;
pub mod conflicts;
pub mod delete;
pub mod list;
pub mod optimize;
pub mod resolve;
