pub mod author;
pub mod book;
pub mod category;

pub use author::Author;
pub use book::{Book, BookDetail, CreateBook, FlatBookRow, UpdateBook};
pub use category::Category;
