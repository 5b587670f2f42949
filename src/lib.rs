pub mod counter;
pub mod driver;
pub mod error;
pub mod lexer;
pub mod limits;
pub mod logging;
pub mod options;
pub mod utils;
pub mod word_list;
