pub mod cursor;
pub mod ids;
pub mod time;

pub use cursor::{is_exhausted, next_cursor};
pub use ids::new_trace_id;
pub use self::time::now_unix;
