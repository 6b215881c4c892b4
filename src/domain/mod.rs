pub mod common;
pub mod company;
pub mod expense;
pub mod farmer;
pub mod invoice;
pub mod item;
pub mod transaction;

pub use common::{Identifiable, NamedEntity, PaymentMethod};
