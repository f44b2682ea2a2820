pub mod achievement;
pub mod api;
pub mod lab_info;
pub mod news;
pub mod pages;
pub mod partner;
pub mod team;
