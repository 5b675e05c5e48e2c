pub mod kebab;
pub mod output;
