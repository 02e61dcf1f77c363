//! Grading domain module.
//!
//! Student records with grade banding, and the line-oriented report codec
//! (comma-delimited input, one formatted report line per student).

pub mod report;
pub mod student;

pub use report::{
    ReportError, parse_line, read_students, read_students_from_path, write_report,
    write_report_to_path,
};
pub use student::{Grade, Student};
