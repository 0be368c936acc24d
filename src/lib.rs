pub mod comparator;
pub mod config;
pub mod exception;
pub mod fingerprint;
pub mod headers;
pub mod middleware;
pub mod param;
pub mod request;
pub mod response;
pub mod util;
pub mod validator;

pub use comparator::any_matches;
pub use config::{Config, ConfigSection, ValidationConfig};
pub use exception::Exception;
pub use fingerprint::{generate, Fingerprint};
pub use headers::HeaderMap;
pub use middleware::{ConditionalGet, Handler};
pub use param::{Algorithm, HttpRequestMethod, Strength};
pub use request::Request;
pub use response::Response;
pub use validator::{is_eligible, Outcome, Validator, ValidatorSet};
