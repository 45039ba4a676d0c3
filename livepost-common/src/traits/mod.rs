pub mod platform_traits;
pub mod repository_traits;

pub use platform_traits::{AnnouncementSink, StreamStatusSource};
pub use repository_traits::{RunStateRepository, StreamHistoryRepository};
