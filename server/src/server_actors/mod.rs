pub mod services;
pub mod storage;

#[cfg(test)]
pub mod fixtures;
