pub mod controller;

pub use crate::domain::model::{ComparableSale, DetailedAnalysis, Language, ValuationResponse};
pub use crate::domain::ports::{ConfigProvider, ValuationService};
pub use crate::utils::error::Result;
pub use controller::{reduce, Controller, Event, Phase, ViewState};
