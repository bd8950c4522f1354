pub mod consts;
pub mod interface;
pub mod scores;
