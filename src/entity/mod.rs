pub mod achievement;
pub mod lab_info;
pub mod news;
pub mod partner;
pub mod team_member;
