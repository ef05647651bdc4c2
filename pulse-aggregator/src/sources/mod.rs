pub mod arxiv;
pub mod blogs;
pub mod devto;
pub mod huggingface;
pub mod rss_feed;

pub use arxiv::ArxivSource;
pub use blogs::BlogFeedSource;
pub use devto::DevToSource;
pub use huggingface::HuggingFaceSource;
pub use rss_feed::RssFeedSource;
