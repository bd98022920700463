pub mod evaluate;
pub mod feeds;
pub mod optimize;
