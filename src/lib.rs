mod allow_list;
pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
mod options;
mod policy;
mod result;
pub mod settings;
pub mod shared;
mod util;

pub use allow_list::AllowList;
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::HeaderSet;
pub use options::{AllowedMethods, CorsOptions, CredentialMode, HeaderNames, ValidationError};
pub use policy::{PolicyDecision, evaluate};
pub use result::{ActualResponse, CorsDecision, PreflightResponse};
pub use settings::{Settings, SettingsError};
pub use shared::SharedCors;
