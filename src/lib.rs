pub mod analytics;
pub mod error;
pub mod models;
pub mod report;
pub mod sources;

#[cfg(test)]
mod test;
