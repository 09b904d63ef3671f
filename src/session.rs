use crate::render;
use analytics::ReportEngine;
use configuration::Config;
use roster::Roster;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const MENU: &str = "\n--- Student Grade Analyzer ---
1. Add a new student
2. Add grades for a student
3. Generate a full report
4. Find the top student
5. Exit program";

/// A menu-driven console session over one roster.
///
/// Generic over its input and output so a scripted session can be driven
/// from memory in tests.
pub struct Session<R, W> {
    input: R,
    output: W,
    roster: Roster,
    engine: ReportEngine,
    precision: usize,
    done_keyword: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            roster: Roster::new(),
            engine: ReportEngine::new(),
            precision: config.display.precision,
            done_keyword: config.session.done_keyword.trim().to_string(),
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Interactive session started.");
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.add_new_student()?,
                "2" => self.add_grades_for_student()?,
                "3" => self.generate_full_report()?,
                "4" => self.find_top_student()?,
                "5" => {
                    writeln!(self.output, "Exiting program.")?;
                    break;
                }
                _ => writeln!(
                    self.output,
                    "Invalid choice! Please enter a number between 1-5."
                )?,
            }
        }
        info!(students = self.roster.len(), "Interactive session ended.");
        Ok(())
    }

    #[cfg(test)]
    fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Writes `text`, then reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed.");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_new_student(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter student name: ")? else {
            return Ok(());
        };
        if let Err(e) = self.roster.add_student(&name) {
            writeln!(self.output, "{}", render::error_message(&e))?;
        }
        Ok(())
    }

    fn add_grades_for_student(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter student name: ")? else {
            return Ok(());
        };
        if self.roster.find_student(&name).is_none() {
            writeln!(self.output, "Student '{name}' not found!")?;
            return Ok(());
        }

        let grade_prompt = format!("Enter a grade (or '{}' to finish): ", self.done_keyword);
        while let Some(token) = self.prompt(&grade_prompt)? {
            if token.to_lowercase() == self.done_keyword.to_lowercase() {
                break;
            }
            if let Err(e) = self.roster.append_grade(&name, &token) {
                writeln!(self.output, "{}", render::error_message(&e))?;
            }
        }
        Ok(())
    }

    fn generate_full_report(&mut self) -> io::Result<()> {
        let report = self.engine.full_report(self.roster.students());
        for line in render::report_lines(&report, self.precision) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn find_top_student(&mut self) -> io::Result<()> {
        let outcome = self.engine.top_student(self.roster.students());
        writeln!(
            self.output,
            "{}",
            render::top_student_line(&outcome, self.precision)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str, config: &Config) -> (String, usize) {
        let mut output = Vec::new();
        let mut session = Session::new(script.as_bytes(), &mut output, config);
        session.run().unwrap();
        let students = session.roster().len();
        drop(session);
        (String::from_utf8(output).unwrap(), students)
    }

    #[test]
    fn full_walkthrough_reports_and_ranks() {
        let script = "1\nAlice\n1\nBob\n1\nCarol\n\
                      2\nalice\n80\n90\ndone\n\
                      2\nCAROL\n100\nDONE\n\
                      3\n4\n5\n";
        let (out, students) = run_script(script, &Config::default());

        assert_eq!(students, 3);
        assert!(out.contains("--- Student Report ---"));
        assert!(out.contains("Alice's average grade is 85.0."));
        assert!(out.contains("Bob's average grade is N/A."));
        assert!(out.contains("Carol's average grade is 100.0."));
        assert!(out.contains("Max Average: 100.0"));
        assert!(out.contains("Min Average: 85.0"));
        assert!(out.contains("Overall Average: 92.5"));
        assert!(out.contains(
            "The student with the highest average is Carol with a grade of 100.0."
        ));
        assert!(out.ends_with("Exiting program.\n"));
    }

    #[test]
    fn duplicate_and_missing_students_are_reported() {
        let script = "1\nAlice\n1\nALICE\n2\nZed\n5\n";
        let (out, students) = run_script(script, &Config::default());
        assert_eq!(students, 1);
        assert!(out.contains("Student 'ALICE' already exists!"));
        assert!(out.contains("Student 'Zed' not found!"));
    }

    #[test]
    fn bad_grades_are_reported_and_entry_continues() {
        let script = "1\nDan\n2\nDan\n101\n-1\nabc\n70\ndone\n3\n5\n";
        let (out, _) = run_script(script, &Config::default());
        assert_eq!(out.matches("Grade must be between 0 and 100!").count(), 2);
        assert_eq!(out.matches("Invalid input. Please enter a number.").count(), 1);
        assert!(out.contains("Dan's average grade is 70.0."));
    }

    #[test]
    fn empty_states_have_their_own_messages() {
        let (out, _) = run_script("3\n4\n1\nDan\n3\n4\n5\n", &Config::default());
        assert_eq!(out.matches("No students available!").count(), 2);
        assert!(out.contains("Dan's average grade is N/A."));
        assert!(!out.contains("Overall Average"));
        assert!(out.contains("No students with grades available!"));
    }

    #[test]
    fn invalid_choice_is_rejected() {
        let (out, _) = run_script("9\nx\n5\n", &Config::default());
        assert_eq!(
            out.matches("Invalid choice! Please enter a number between 1-5.").count(),
            2
        );
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (out, students) = run_script("1\nAlice\n2\nAlice\n95\n", &Config::default());
        assert_eq!(students, 1);
        assert!(!out.contains("Exiting program."));
    }

    #[test]
    fn configured_keyword_and_precision_are_used() {
        let mut config = Config::default();
        config.display.precision = 2;
        config.session.done_keyword = "fin".to_string();

        let script = "1\nEve\n2\nEve\n70\n81\nFIN\n3\n5\n";
        let (out, _) = run_script(script, &config);
        assert!(out.contains("Enter a grade (or 'fin' to finish): "));
        assert!(out.contains("Eve's average grade is 75.50."));
    }
}
