pub mod movie;
pub mod search_record;

pub use movie::{Movie, MovieId};
pub use search_record::SearchRecord;
