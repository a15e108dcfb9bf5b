pub mod character;
pub mod identity;
pub mod membership;
pub mod pages;
pub mod report;
pub mod team;
