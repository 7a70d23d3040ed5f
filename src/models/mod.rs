pub mod request;
pub mod response;

pub use request::{ProcessRequest, SortAlgorithm};
pub use response::{ErrorBody, ProcessResponse, INTERNAL_ERROR_MESSAGE};
