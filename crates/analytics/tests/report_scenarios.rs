use analytics::{Average, ReportEngine, TopStudentOutcome};
use roster::Roster;

fn roster_of(entries: &[(&str, &[&str])]) -> Roster {
    let mut roster = Roster::new();
    for (name, grades) in entries {
        roster.add_student(name).unwrap();
        for grade in *grades {
            roster.append_grade(name, grade).unwrap();
        }
    }
    roster
}

#[test]
fn mixed_roster_report_excludes_ungraded_from_summary() {
    let roster = roster_of(&[("Alice", &["80", "90"]), ("Bob", &[]), ("Carol", &["100"])]);
    let report = ReportEngine::new().full_report(roster.students());

    let lines: Vec<(&str, Average)> = report
        .students
        .iter()
        .map(|e| (e.name.as_str(), e.average))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("Alice", Average::Value(85.0)),
            ("Bob", Average::NotAvailable),
            ("Carol", Average::Value(100.0)),
        ]
    );

    let summary = report.summary.unwrap();
    assert_eq!(summary.min_average, 85.0);
    assert_eq!(summary.max_average, 100.0);
    assert_eq!(summary.overall_average, 92.5);
    assert_eq!(summary.graded_students, 2);
}

#[test]
fn mixed_roster_top_student_is_carol() {
    let roster = roster_of(&[("Alice", &["80", "90"]), ("Bob", &[]), ("Carol", &["100"])]);
    let outcome = ReportEngine::new().top_student(roster.students());
    let top = outcome.found().unwrap();
    assert_eq!(top.name, "Carol");
    assert_eq!(top.average, 100.0);
}

#[test]
fn only_ungraded_students_has_no_summary_and_no_top() {
    let roster = roster_of(&[("Dan", &[])]);
    let engine = ReportEngine::new();

    let report = engine.full_report(roster.students());
    assert!(!report.is_empty());
    assert_eq!(report.students.len(), 1);
    assert_eq!(report.students[0].average.to_string(), "N/A");
    assert!(report.summary.is_none());

    assert_eq!(
        engine.top_student(roster.students()),
        TopStudentOutcome::NoGradedStudents
    );
}

#[test]
fn tied_averages_pick_first_added() {
    let roster = roster_of(&[("Eve", &["70", "80"]), ("Frank", &["75", "75"])]);
    let outcome = ReportEngine::new().top_student(roster.students());
    let top = outcome.found().unwrap();
    assert_eq!(top.name, "Eve");
    assert_eq!(top.average, 75.0);
}

#[test]
fn report_order_follows_roster_not_grade_entry() {
    let mut roster = Roster::new();
    for name in ["Zoe", "Adam", "Mila"] {
        roster.add_student(name).unwrap();
    }
    roster.append_grade("Mila", "40").unwrap();
    roster.append_grade("Adam", "90").unwrap();
    roster.append_grade("Zoe", "65").unwrap();

    let report = ReportEngine::new().full_report(roster.students());
    let names: Vec<&str> = report.students.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Zoe", "Adam", "Mila"]);
}

#[test]
fn rejected_grades_do_not_skew_averages() {
    let mut roster = roster_of(&[("Gus", &["60", "80"])]);
    assert!(roster.append_grade("Gus", "101").is_err());
    assert!(roster.append_grade("Gus", "-1").is_err());
    assert!(roster.append_grade("Gus", "eighty").is_err());

    let engine = ReportEngine::new();
    let gus = roster.find_student("gus").unwrap();
    assert_eq!(engine.average(gus), Average::Value(70.0));
}
