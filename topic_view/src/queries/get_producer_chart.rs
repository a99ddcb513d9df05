mod handler;
mod options;
mod request;
mod response;

pub use handler::*;
pub use options::*;
pub use request::*;
pub use response::*;
