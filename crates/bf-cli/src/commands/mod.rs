pub mod comment;
pub mod dispatch;
pub mod info;
pub mod issue;
pub mod member;
pub mod project;
pub mod report;
pub mod schema;
pub mod seed;
pub mod shared;
