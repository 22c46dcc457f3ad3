pub mod lookup;
pub mod parse;
pub mod response;
pub mod rules;
