pub mod http;
pub mod spinner;
pub mod text;
