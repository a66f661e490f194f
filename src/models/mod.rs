pub mod envelope;
pub mod session;
pub mod section;
pub mod customer;
pub mod notice;

pub use envelope::{ApiAction, ApiRequest, ApiResponse, Estado, LoginPayload, UNKNOWN_ERROR_MESSAGE};
pub use session::UserSession;
pub use section::{CustomerSection, Section, SectionRoute, UnknownSection};
pub use customer::{CustomerRecord, ValidationError};
pub use notice::{Notice, NoticeLevel};
