pub mod charts;
pub mod dashboard;
pub mod filter;
pub mod layout;
pub mod table;

pub use crate::domain::model::{LaunchRecord, Outcome, PayloadRange, SiteSelection};
pub use crate::domain::ports::{ConfigProvider, DatasetSource, SliderSettings};
pub use crate::utils::error::Result;
