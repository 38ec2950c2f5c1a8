pub mod help;
pub mod prolong;
pub mod release;
pub mod show;
