pub mod markdown;
pub mod parse;
pub mod validate;
