pub mod add;
pub mod completed;
pub mod delete;
pub mod done;
pub mod edit;
pub mod health;
pub mod list;
pub mod overview;
pub mod weekend;
