pub mod calculator;
pub mod history;

pub use calculator::CalculatorPage;
pub use history::HistoryPage;
