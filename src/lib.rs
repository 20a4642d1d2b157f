// hrefs
//
// A small tool chain to extract, resolve and output all hyperlinks on a
// website: fetch a page, collect the raw `href` values of its anchors,
// classify URL depth, convert relative references to absolute form and
// compact link lists.

pub mod dedup;
pub mod depth;
pub mod error;
pub mod extract;
pub mod resolve;

// Re-export the main entry points for convenience
pub use dedup::unique;
pub use depth::{url_depth, UrlParts};
pub use error::LinkError;
pub use extract::{get_all_hrefs, DEFAULT_ENCODING};
pub use resolve::rel_to_abs;
