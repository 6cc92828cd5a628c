//! Interactive menu-driven records shell
//!
//! The shell reads one answer per line. Engine errors are printed and the session
//! continues; end of input behaves like choosing Exit. Leaving the shell always
//! attempts an export of both registries.

use chrono::NaiveDate;
use std::fmt::Display;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, warn};

use campus_records::config::Config;
use campus_records::core::import::{self, ImportSummary, COURSES_FILE, DATE_FORMAT, STUDENTS_FILE};
use campus_records::core::models::{Course, Semester, Student};
use campus_records::core::{backup, export, Campus, RecordsError};

type Menu = [(&'static str, &'static str)];

const MAIN_MENU: &Menu = &[
    ("1", "Manage Students"),
    ("2", "Manage Courses"),
    ("3", "Enrollments & Grades"),
    ("4", "Import/Export & Backup"),
    ("5", "Reports"),
    ("0", "Exit"),
];

const STUDENT_MENU: &Menu = &[
    ("1", "Add student"),
    ("2", "List students"),
    ("3", "Deactivate student"),
    ("0", "Back"),
];

const COURSE_MENU: &Menu = &[
    ("1", "Add course"),
    ("2", "List courses"),
    ("3", "Filter by department"),
    ("4", "Filter by semester"),
    ("5", "Filter by instructor"),
    ("0", "Back"),
];

const ENROLLMENT_MENU: &Menu = &[
    ("1", "Enroll student"),
    ("2", "Unenroll"),
    ("3", "Record marks"),
    ("4", "List enrollments"),
    ("0", "Back"),
];

const IO_MENU: &Menu = &[
    ("1", "Import students"),
    ("2", "Import courses"),
    ("3", "Export data"),
    ("4", "Backup exports"),
    ("5", "List backups"),
    ("0", "Back"),
];

const REPORT_MENU: &Menu = &[
    ("1", "GPA for student"),
    ("2", "Grade distribution"),
    ("0", "Back"),
];

/// Run the shell on stdin/stdout against the configured data directory
///
/// # Errors
/// Returns a message if the records cannot be loaded or the terminal fails.
pub fn run(config: &Config, verbose: bool) -> Result<(), String> {
    let mut campus = super::load_campus(config, verbose)?;

    let export_dir = config.export_dir();
    fs::create_dir_all(&export_dir).map_err(|e| {
        format!(
            "✗ Failed to create export directory {}: {e}",
            export_dir.display()
        )
    })?;

    println!(
        "Campus Course & Records Manager v{}",
        campus_records::get_version()
    );
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut campus, config, stdin.lock(), stdout.lock())
        .run()
        .map_err(|e| format!("✗ Shell I/O error: {e}"))
}

/// Menu loop over any line source and sink
pub struct Shell<'a, R, W> {
    campus: &'a mut Campus,
    config: &'a Config,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell over `campus`, reading answers from `input` and writing to `out`
    pub fn new(campus: &'a mut Campus, config: &'a Config, input: R, out: W) -> Self {
        Self {
            campus,
            config,
            input,
            out,
        }
    }

    /// Run until Exit or end of input, then export.
    ///
    /// # Errors
    /// Returns any I/O error of the output sink or input source other than end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let session = self.main_menu();
        let exported = self.export_on_exit();
        match session {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => exported,
            Err(e) => Err(e),
            Ok(()) => exported,
        }
    }

    fn main_menu(&mut self) -> io::Result<()> {
        loop {
            match self.choose("Main Menu", MAIN_MENU)?.as_str() {
                "1" => self.students_menu()?,
                "2" => self.courses_menu()?,
                "3" => self.enrollments_menu()?,
                "4" => self.io_menu()?,
                "5" => self.reports_menu()?,
                "0" => return Ok(()),
                _ => self.invalid_choice()?,
            }
        }
    }

    fn students_menu(&mut self) -> io::Result<()> {
        loop {
            match self.choose("Students", STUDENT_MENU)?.as_str() {
                "1" => self.add_student()?,
                "2" => write_list(&mut self.out, self.campus.students.list(), "No students.")?,
                "3" => self.deactivate_student()?,
                "0" => return Ok(()),
                _ => self.invalid_choice()?,
            }
        }
    }

    fn courses_menu(&mut self) -> io::Result<()> {
        loop {
            match self.choose("Courses", COURSE_MENU)?.as_str() {
                "1" => self.add_course()?,
                "2" => write_list(&mut self.out, self.campus.courses.list(), "No courses.")?,
                "3" => {
                    let department = self.prompt("Department")?;
                    let found = self.campus.courses.filter_by_department(&department);
                    write_list(&mut self.out, found, "No matching courses.")?;
                }
                "4" => {
                    let semester = self.prompt("Semester (SPRING/SUMMER/FALL)")?;
                    let found = self.campus.courses.filter_by_semester(&semester);
                    write_list(&mut self.out, found, "No matching courses.")?;
                }
                "5" => {
                    let instructor = self.prompt("Instructor ID")?;
                    let found = self.campus.courses.filter_by_instructor(&instructor);
                    write_list(&mut self.out, found, "No matching courses.")?;
                }
                "0" => return Ok(()),
                _ => self.invalid_choice()?,
            }
        }
    }

    fn enrollments_menu(&mut self) -> io::Result<()> {
        loop {
            match self.choose("Enrollments & Grades", ENROLLMENT_MENU)?.as_str() {
                "1" => self.enroll()?,
                "2" => self.unenroll()?,
                "3" => self.record_marks()?,
                "4" => write_list(
                    &mut self.out,
                    self.campus.enrollments.list(),
                    "No enrollments.",
                )?,
                "0" => return Ok(()),
                _ => self.invalid_choice()?,
            }
        }
    }

    fn io_menu(&mut self) -> io::Result<()> {
        loop {
            match self.choose("Import/Export & Backup", IO_MENU)?.as_str() {
                "1" => self.import_students()?,
                "2" => self.import_courses()?,
                "3" => self.export()?,
                "4" => self.backup()?,
                "5" => self.list_backups()?,
                "0" => return Ok(()),
                _ => self.invalid_choice()?,
            }
        }
    }

    fn reports_menu(&mut self) -> io::Result<()> {
        loop {
            match self.choose("Reports", REPORT_MENU)?.as_str() {
                "1" => {
                    let student_id = self.prompt("Student ID")?;
                    let gpa = self.campus.gpa(&student_id);
                    writeln!(self.out, "GPA for {student_id}: {gpa:.3}")?;
                }
                "2" => self.grade_distribution()?,
                "0" => return Ok(()),
                _ => self.invalid_choice()?,
            }
        }
    }

    fn add_student(&mut self) -> io::Result<()> {
        let id = self.prompt("ID")?;
        let name = self.prompt("Full name")?;
        let email = self.prompt("Email")?;
        let dob = self.prompt("Date of birth (YYYY-MM-DD)")?;
        let reg_no = self.prompt("Registration number")?;
        let program = self.prompt("Program")?;

        let Ok(dob) = NaiveDate::parse_from_str(&dob, DATE_FORMAT) else {
            return writeln!(self.out, "Invalid date '{dob}', expected YYYY-MM-DD.");
        };

        match Student::new(id, name, email, dob, reg_no, program)
            .and_then(|student| self.campus.students.add(student))
        {
            Ok(()) => writeln!(self.out, "Student added."),
            Err(e) => writeln!(self.out, "Error: {e}"),
        }
    }

    fn deactivate_student(&mut self) -> io::Result<()> {
        let id = self.prompt("Student ID")?;
        if self.campus.students.deactivate(&id) {
            writeln!(self.out, "Student {id} deactivated.")
        } else {
            writeln!(self.out, "No student with id '{id}'.")
        }
    }

    fn add_course(&mut self) -> io::Result<()> {
        let code = self.prompt("Code")?;
        let title = self.prompt("Title")?;
        let credits = self.prompt("Credits")?;
        let department = self.prompt("Department")?;
        let semester = self.prompt("Semester (SPRING/SUMMER/FALL, blank for none)")?;
        let instructor = self.prompt("Instructor ID (blank for none)")?;

        let Ok(credits) = credits.parse::<u32>() else {
            return writeln!(self.out, "Credits must be a positive whole number.");
        };
        let semester = if semester.is_empty() {
            None
        } else {
            match semester.parse::<Semester>() {
                Ok(semester) => Some(semester),
                Err(e) => return writeln!(self.out, "{e}"),
            }
        };

        match Course::new(code, title, credits, department, semester, Some(instructor))
            .and_then(|course| self.campus.courses.add(course))
        {
            Ok(()) => writeln!(self.out, "Course added."),
            Err(e) => writeln!(self.out, "Error: {e}"),
        }
    }

    fn enroll(&mut self) -> io::Result<()> {
        let enrollment_id = self.prompt("Enrollment ID")?;
        let student_id = self.prompt("Student ID")?;
        let course_code = self.prompt("Course code")?;
        let semester = self.prompt("Semester (SPRING/SUMMER/FALL)")?;

        let semester = match semester.parse::<Semester>() {
            Ok(semester) => semester,
            Err(e) => return writeln!(self.out, "{e}"),
        };

        match self
            .campus
            .enroll(&enrollment_id, &student_id, &course_code, semester)
        {
            Ok(enrollment) => writeln!(self.out, "Enrolled: {enrollment}"),
            Err(
                e @ (RecordsError::DuplicateEnrollment { .. }
                | RecordsError::MaxCreditLimitExceeded { .. }),
            ) => writeln!(self.out, "Business rule: {e}"),
            Err(e) => writeln!(self.out, "Error: {e}"),
        }
    }

    fn unenroll(&mut self) -> io::Result<()> {
        let id = self.prompt("Enrollment ID")?;
        match self.campus.unenroll(&id) {
            Some(_) => writeln!(self.out, "Enrollment {id} removed."),
            None => writeln!(self.out, "No enrollment with id '{id}'; nothing removed."),
        }
    }

    fn record_marks(&mut self) -> io::Result<()> {
        let id = self.prompt("Enrollment ID")?;
        let marks = self.prompt("Marks (0-100)")?;

        let marks = match marks.parse::<f64>() {
            Ok(m) if (0.0..=100.0).contains(&m) => m,
            _ => return writeln!(self.out, "Marks must be a number between 0 and 100."),
        };

        match self.campus.record_marks(&id, marks) {
            Ok(grade) => writeln!(
                self.out,
                "Recorded grade {grade} ({} points).",
                grade.points()
            ),
            Err(e) => writeln!(self.out, "Error: {e}"),
        }
    }

    fn import_students(&mut self) -> io::Result<()> {
        let path = self.import_path(STUDENTS_FILE)?;
        let result = import::import_students(&path, &mut self.campus.students);
        self.report_import(result)
    }

    fn import_courses(&mut self) -> io::Result<()> {
        let path = self.import_path(COURSES_FILE)?;
        let result = import::import_courses(&path, &mut self.campus.courses);
        self.report_import(result)
    }

    fn import_path(&mut self, default_file: &str) -> io::Result<PathBuf> {
        let path = self.prompt(&format!("CSV path (blank for {default_file} in data dir)"))?;
        Ok(if path.is_empty() {
            self.config.data_dir().join(default_file)
        } else {
            PathBuf::from(path)
        })
    }

    fn report_import(
        &mut self,
        result: campus_records::core::Result<ImportSummary>,
    ) -> io::Result<()> {
        match result {
            Ok(summary) => writeln!(
                self.out,
                "Imported {} ({} duplicates, {} malformed rows skipped).",
                summary.imported, summary.duplicates, summary.malformed
            ),
            Err(e) => {
                error!("Import failed: {e}");
                writeln!(self.out, "Import failed: {e}")
            }
        }
    }

    fn export(&mut self) -> io::Result<()> {
        match export::export_all(self.config, self.campus) {
            Ok(paths) => writeln!(
                self.out,
                "Exported to: {} and {}",
                paths.students.display(),
                paths.courses.display()
            ),
            Err(e) => {
                error!("Export failed: {e}");
                writeln!(self.out, "Export failed: {e}")
            }
        }
    }

    fn backup(&mut self) -> io::Result<()> {
        let target = match backup::create_backup(self.config) {
            Ok(target) => target,
            Err(e) => {
                error!("Backup failed: {e}");
                return writeln!(self.out, "Backup failed: {e}");
            }
        };
        writeln!(self.out, "Backup created at: {}", target.display())?;
        match backup::directory_size(&target) {
            Ok(size) => writeln!(self.out, "Backup size (bytes): {size}"),
            Err(e) => writeln!(self.out, "Could not measure backup: {e}"),
        }
    }

    fn list_backups(&mut self) -> io::Result<()> {
        match backup::list_backups(self.config) {
            Ok(names) => write_list(&mut self.out, names, "No backups yet."),
            Err(e) => writeln!(self.out, "Failed to list backups: {e}"),
        }
    }

    fn grade_distribution(&mut self) -> io::Result<()> {
        let distribution = self.campus.grade_distribution();
        if distribution.is_empty() {
            return writeln!(self.out, "No grades recorded.");
        }
        for (grade, count) in distribution {
            writeln!(self.out, "{grade}: {count}")?;
        }
        Ok(())
    }

    /// Best-effort export when the session ends; failures are reported, not returned
    fn export_on_exit(&mut self) -> io::Result<()> {
        match export::export_all(self.config, self.campus) {
            Ok(_) => writeln!(self.out, "Data exported. Goodbye!"),
            Err(e) => {
                warn!("Export on exit failed: {e}");
                writeln!(self.out, "Export on exit failed: {e}. Goodbye!")
            }
        }
    }

    fn invalid_choice(&mut self) -> io::Result<()> {
        writeln!(self.out, "Invalid choice")
    }

    fn choose(&mut self, title: &str, menu: &Menu) -> io::Result<String> {
        writeln!(self.out, "\n=== {title} ===")?;
        for (key, label) in menu {
            writeln!(self.out, "{key}. {label}")?;
        }
        self.prompt("Choice")
    }

    /// Print `label`, then read one trimmed line; end of input is `UnexpectedEof`
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.out, "{label}: ")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}

fn write_list<T: Display>(
    out: &mut impl Write,
    items: impl IntoIterator<Item = T>,
    empty: &str,
) -> io::Result<()> {
    let mut any = false;
    for item in items {
        any = true;
        writeln!(out, "{item}")?;
    }
    if !any {
        writeln!(out, "{empty}")?;
    }
    Ok(())
}
