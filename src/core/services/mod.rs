pub mod loan_service;
pub mod summary_service;
pub mod transfer_service;

pub use loan_service::LoanService;
pub use summary_service::{AccountSummary, SummaryService};
pub use transfer_service::TransferService;
