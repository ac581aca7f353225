pub mod document;
pub mod keyword;
pub mod match_result;

pub use document::Document;
pub use keyword::{Keyword, KeywordSet};
pub use match_result::MatchResult;
