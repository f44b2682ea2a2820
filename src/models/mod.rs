pub mod achievement;
pub mod lab_info;
pub mod news;
pub mod pages;
pub mod partner;
pub mod shared;
pub mod team;
