// Re-export the case conversion functions used as template filters
pub use cruet::case::{kebab::to_kebab_case, snake::to_snake_case, train::to_train_case};
