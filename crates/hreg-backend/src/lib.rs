pub mod bank;
pub mod listing;
pub mod message;
pub mod toy;

pub use bank::Bank;
pub use listing::{parse, Assignment, Listing};
