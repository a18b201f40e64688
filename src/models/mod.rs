mod address;
mod birth_date;
mod person;

pub use address::Address;
pub use birth_date::{BirthDate, INVALID_DATE};
pub use person::Person;
