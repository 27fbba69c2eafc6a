mod error;
pub use error::Latin1Error;

pub mod latin1;
pub mod logger;
pub mod report;

pub use latin1::{Unencodable, encode, find_unencodable, is_iso8859_1, is_latin1_char};
