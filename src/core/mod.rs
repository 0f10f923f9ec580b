pub mod dispatch;
pub mod request;
pub mod scheduler;
pub mod timer;
pub mod worker;

pub use crate::domain::model::{PingOutcome, PingReport};
pub use crate::domain::ports::{ConfigProvider, ScheduleProvider};
pub use crate::utils::error::Result;
