//! Pricing logic and the session state that feeds it.

pub mod appearance;
pub mod history;
pub mod inputs;
pub mod pricing;
pub mod session;

#[allow(unused_imports)]
pub use appearance::{Accent, Theme};
#[allow(unused_imports)]
pub use history::{History, HistoryEntry, HISTORY_CAP};
#[allow(unused_imports)]
pub use inputs::{InputField, InputTexts};
#[allow(unused_imports)]
pub use pricing::{compute, CalculationInputs, CalculationResult};
#[allow(unused_imports)]
pub use session::{Session, StorageKey};
