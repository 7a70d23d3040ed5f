pub mod random_client;

pub use random_client::RandomOrgClient;
