//! Dataset loading, caching and typed views.

pub mod cache;
pub mod error;
pub mod frame;
pub mod market;

pub use cache::DatasetCache;
pub use error::DatasetError;
pub use frame::{DatasetDetails, Frame, FramePage, DOWNLOAD_FILE_NAME};
pub use market::{parse_timestamp, DateRange, MarketData};
