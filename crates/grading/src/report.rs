//! Line-oriented report codec.
//!
//! Input is comma-delimited `id,full name,score` lines; output is one
//! formatted report line per student. Malformed input is reported with the
//! offending raw line, never a panic.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::student::Student;

/// Report codec error.
///
/// The malformed-line variants carry the offending raw line verbatim so
/// callers can point at it when reporting.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A line did not split into exactly three fields.
    #[error("wrong number of fields in line: {line}")]
    FieldCount { line: String },

    /// The id field did not parse as an integer.
    #[error("invalid id in line: {line}")]
    InvalidId { line: String },

    /// The score field did not parse as an integer.
    #[error("invalid score in line: {line}")]
    InvalidScore { line: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parse one `id,full name,score` line into a student record.
pub fn parse_line(line: &str) -> Result<Student, ReportError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(ReportError::FieldCount {
            line: line.to_string(),
        });
    }

    let id: u32 = fields[0].trim().parse().map_err(|_| ReportError::InvalidId {
        line: line.to_string(),
    })?;
    let full_name = fields[1].trim().to_string();
    let score: u32 = fields[2]
        .trim()
        .parse()
        .map_err(|_| ReportError::InvalidScore {
            line: line.to_string(),
        })?;

    Ok(Student::new(id, full_name, score))
}

/// Read student records from comma-delimited lines.
///
/// Blank lines are skipped; the first malformed line aborts the read with
/// that line in the error.
pub fn read_students<R: BufRead>(reader: R) -> Result<Vec<Student>, ReportError> {
    let mut students = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        students.push(parse_line(&line)?);
    }
    Ok(students)
}

pub fn read_students_from_path(path: impl AsRef<Path>) -> Result<Vec<Student>, ReportError> {
    let file = File::open(path)?;
    read_students(BufReader::new(file))
}

/// Write one report line per student, in the given order.
pub fn write_report<W: Write>(students: &[Student], mut writer: W) -> io::Result<()> {
    for student in students {
        writeln!(
            writer,
            "{} (ID: {}): Score = {}, Grade = {}",
            student.full_name,
            student.id,
            student.score,
            student.grade()
        )?;
    }
    Ok(())
}

pub fn write_report_to_path(students: &[Student], path: impl AsRef<Path>) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_report(students, &mut writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_line() {
        let student = parse_line("12, Esi Quaye ,84").unwrap();
        assert_eq!(student, Student::new(12, "Esi Quaye", 84));
    }

    #[test]
    fn two_fields_is_malformed_and_references_the_line() {
        let err = parse_line("42,OnlyTwoFields").unwrap_err();
        match err {
            ReportError::FieldCount { line } => assert_eq!(line, "42,OnlyTwoFields"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn four_fields_is_malformed() {
        let err = parse_line("1,Esi Quaye,84,extra").unwrap_err();
        assert!(matches!(err, ReportError::FieldCount { .. }));
    }

    #[test]
    fn non_numeric_id_references_the_line() {
        let err = parse_line("abc,Esi Quaye,84").unwrap_err();
        match err {
            ReportError::InvalidId { line } => assert_eq!(line, "abc,Esi Quaye,84"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_score_references_the_line() {
        let err = parse_line("1,Esi Quaye,eighty").unwrap_err();
        match err {
            ReportError::InvalidScore { line } => assert_eq!(line, "1,Esi Quaye,eighty"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn read_skips_blank_lines() {
        let input = "1,Salim Saad,82\n\n2,Abanga Kwame,67\n   \n3,Esi Quaye,45\n";
        let students = read_students(input.as_bytes()).unwrap();

        assert_eq!(students.len(), 3);
        assert_eq!(students[1], Student::new(2, "Abanga Kwame", 67));
    }

    #[test]
    fn read_aborts_on_the_first_malformed_line() {
        let input = "1,Salim Saad,82\n42,OnlyTwoFields\n3,Esi Quaye,45\n";
        let err = read_students(input.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::FieldCount { line } if line == "42,OnlyTwoFields"));
    }

    #[test]
    fn missing_input_file_is_a_recoverable_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_students_from_path(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }

    #[test]
    fn report_lines_carry_name_id_score_and_grade() {
        let students = vec![
            Student::new(1, "Salim Saad", 82),
            Student::new(2, "Abanga Kwame", 67),
        ];

        let mut out = Vec::new();
        write_report(&students, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Salim Saad (ID: 1): Score = 82, Grade = A\n\
             Abanga Kwame (ID: 2): Score = 67, Grade = C\n"
        );
    }

    #[test]
    fn report_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("students.txt");
        let report_path = dir.path().join("report.txt");

        std::fs::write(&input_path, "1,Salim Saad,82\n2,Esi Quaye,45\n").unwrap();

        let students = read_students_from_path(&input_path).unwrap();
        write_report_to_path(&students, &report_path).unwrap();

        let report = std::fs::read_to_string(&report_path).unwrap();
        assert!(report.contains("Esi Quaye (ID: 2): Score = 45, Grade = F"));
    }
}
