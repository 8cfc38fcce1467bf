pub mod etl;
pub mod source;
pub mod writer;

pub use crate::domain::model::{
    ChaosInventory, ChaosProgram, ChaosTarget, TrickestInventory, TrickestOutput, TrickestTarget,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
