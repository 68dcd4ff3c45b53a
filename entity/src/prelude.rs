pub use super::applicant::Model as Applicant;
pub use super::application::Model as Application;
pub use super::assignment::Model as Assignment;
pub use super::instructor::Model as Instructor;
pub use super::kind::EntityKind;
pub use super::position::Model as Position;
pub use super::position_template::{AvailableTemplate, Model as PositionTemplate};
pub use super::preference::Model as Preference;
pub use super::reporting_tag::Model as ReportingTag;
pub use super::session::{Cursor as SessionCursor, Model as Session};
pub use super::store::{DanglingReference, Record, RecordStore};
pub use super::wage_chunk::Model as WageChunk;
