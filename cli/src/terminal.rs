pub mod banner;
pub mod colors;
pub mod logging;
pub mod panels;
pub mod print;
pub mod spinner;
