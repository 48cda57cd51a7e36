/// Subscription feed constants shared across crates
pub const FEED_PAGE_SIZE: usize = 20;

/// Author name stamped on generated feed documents
pub const FEED_AUTHOR: &str = "EventStore";
