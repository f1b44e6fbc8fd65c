//! Raw Reel record as read from the CSV export.

/// Header names the loader requires.
pub const REEL_COL: &str = "Reel";
pub const VIEWS_COL: &str = "Views";
pub const LIKES_COL: &str = "Likes";
pub const COMMENTS_COL: &str = "Comments";

pub const REQUIRED_COLUMNS: [&str; 4] = [REEL_COL, VIEWS_COL, LIKES_COL, COMMENTS_COL];

/// One accepted CSV row, before any metric derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReel {
    /// 1-based position of the row in the data section of the file.
    pub id: usize,
    pub reel: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    /// Columns outside the required set, in header order.
    pub extra: Vec<(String, String)>,
}
