pub mod decode;
pub mod etl;
pub mod fetch;
pub mod pipeline;
pub mod present;
pub mod transform;

pub use crate::domain::model::{DisplaySummary, Owner, OwnerGenderAndCat, Pet};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Sink};
pub use crate::utils::error::Result;
