pub mod attendance;
pub mod roster;
pub mod student;

pub use attendance::AttendanceEvent;
pub use roster::Roster;
pub use student::Student;
