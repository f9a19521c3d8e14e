pub mod error;
pub mod eval;
pub mod ids;
pub mod policy;
pub mod table;

#[cfg(test)]
mod tests;
