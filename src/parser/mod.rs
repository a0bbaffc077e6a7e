pub mod movie_list;

pub use movie_list::{MovieListParser, Parser};
