pub mod error;
pub mod tag;

pub mod option;
pub mod result;
pub mod matcher;
pub mod nested;

pub mod prelude;
