//! Fixed-display-width text wrapping with kinsoku shori.
//!
//! `jawrap` reflows free-form text that mixes single-width (ASCII) and
//! double-width (East Asian) characters into lines of a fixed display
//! width. Author-intended paragraph breaks survive, words and URLs are
//! never split, `<...>` spans stay on one line, and the Japanese
//! line-breaking prohibitions are enforced: closers and small kana never
//! open a line, openers never end one.
//!
//! The entry point is [`wrap`]:
//!
//! ```
//! let wrapped = jawrap::wrap("あいうえおあいうえお", "  ", 12);
//! assert_eq!(wrapped, "  あいうえお\n  あいうえお");
//! ```

pub mod io;
mod macros;
pub mod segment;
pub mod width;
pub mod wrap;

pub use wrap::wrap;
