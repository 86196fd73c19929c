mod error;
mod http_mapping;
mod traits;

pub use error::{GatewayError, Result};
pub use http_mapping::{error_from_response, extract_detail, is_auth_failure, FALLBACK_ERROR_MESSAGE};
pub use traits::{
    ActionItemGateway, AuthGateway, CourseGateway, KnowledgePointGateway, ReviewLogGateway,
    TagGateway, TrackerGateway,
};
