//! Interactive menu loop
//!
//! Presents the numbered menu, reads selections and record fields from
//! the input stream, and calls into the roster. All input validation
//! happens here: the engine only ever sees well-formed primitives.
//! Engine errors are turned into messages; nothing propagates past the
//! loop except I/O failures on the streams themselves.

use std::io::{BufRead, Write};

use anyhow::Result;
use roster_engine::{Roster, RosterError, StudentRecord, MAX_NAME_LEN};

const MENU: &str = "\
1 - add student
2 - remove student
3 - list students
4 - find student
0 - exit";

/// Run the menu loop until the user selects exit or the input stream
/// ends. Returns normally in both cases.
pub fn run<R: BufRead, W: Write>(roster: &mut Roster, input: &mut R, output: &mut W) -> Result<()> {
    loop {
        writeln!(output, "{}", MENU)?;
        let Some(choice) = read_line(input)? else {
            break;
        };

        match choice.trim() {
            "1" => add_student(roster, input, output)?,
            "2" => remove_student(roster, input, output)?,
            "3" => list_students(roster, output)?,
            "4" => find_student(roster, input, output)?,
            "0" => break,
            _ => writeln!(output, "invalid option")?,
        }
    }

    roster.release_all();
    Ok(())
}

fn add_student<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(name) = prompt_name(input, output)? else {
        return Ok(());
    };
    let Some(age) = prompt_number(input, output, "student age: ")? else {
        return Ok(());
    };
    let Some(enrollment) = prompt_number(input, output, "enrollment number: ")? else {
        return Ok(());
    };

    // prompt_name already enforced the field rules, so this only fails
    // on an engine-side write error
    let record = match StudentRecord::new(name, age, enrollment) {
        Ok(record) => record,
        Err(err) => {
            writeln!(output, "{}", err)?;
            return Ok(());
        }
    };

    match roster.add(record) {
        Ok(()) => writeln!(output, "student added")?,
        Err(err) => writeln!(output, "could not save student: {}", err)?,
    }
    Ok(())
}

fn remove_student<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    write!(output, "name of the student to remove: ")?;
    output.flush()?;
    let Some(name) = read_line(input)? else {
        return Ok(());
    };
    let name = name.trim();
    if name.is_empty() {
        writeln!(output, "name must not be empty")?;
        return Ok(());
    }

    match roster.remove(name) {
        Ok(removed) => writeln!(output, "removed {}", removed)?,
        Err(RosterError::EmptyStore) => writeln!(output, "empty list")?,
        Err(RosterError::NameNotFound { .. }) => writeln!(output, "student not found")?,
        Err(err) => writeln!(output, "could not remove student: {}", err)?,
    }
    Ok(())
}

fn list_students<W: Write>(roster: &Roster, output: &mut W) -> Result<()> {
    if roster.is_empty() {
        writeln!(output, "empty list")?;
        return Ok(());
    }
    for record in roster.iter() {
        writeln!(output, "STUDENT RECORD")?;
        writeln!(output, "NAME: {}", record.name)?;
        writeln!(output, "AGE: {}", record.age)?;
        writeln!(output, "ENROLLMENT: {}", record.enrollment)?;
    }
    Ok(())
}

fn find_student<R: BufRead, W: Write>(
    roster: &Roster,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    if roster.is_empty() {
        writeln!(output, "empty list")?;
        return Ok(());
    }
    let Some(enrollment) = prompt_number(input, output, "enrollment number to look up: ")? else {
        return Ok(());
    };

    match roster.find(enrollment) {
        Some(record) => {
            writeln!(output, "STUDENT FOUND")?;
            writeln!(output, "NAME: {}", record.name)?;
            writeln!(output, "AGE: {}", record.age)?;
        }
        None => writeln!(output, "student not found")?,
    }
    Ok(())
}

/// Prompt for a student name and apply the field rules before the
/// engine sees it: non-empty, at most [`MAX_NAME_LEN`] characters.
/// Over-long names are rejected, not truncated.
fn prompt_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<String>> {
    write!(output, "student name: ")?;
    output.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    let name = line.trim();
    if name.is_empty() {
        writeln!(output, "name must not be empty")?;
        return Ok(None);
    }
    if name.chars().count() > MAX_NAME_LEN {
        writeln!(output, "name is too long (limit {} characters)", MAX_NAME_LEN)?;
        return Ok(None);
    }
    Ok(Some(name.to_string()))
}

fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<u32>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    match line.trim().parse::<u32>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(output, "not a valid number")?;
            Ok(None)
        }
    }
}

/// Read one line; `None` means the input stream ended.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_script(dir: &tempfile::TempDir, script: &str) -> String {
        let path = dir.path().join("students.txt");
        let mut roster = Roster::open(&path).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run(&mut roster, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_list_exit() {
        let dir = tempdir().unwrap();
        let out = run_script(&dir, "1\nAna\n20\n1\n3\n0\n");
        assert!(out.contains("student added"));
        assert!(out.contains("NAME: Ana"));
        assert!(out.contains("ENROLLMENT: 1"));
    }

    #[test]
    fn test_add_persists_across_sessions() {
        let dir = tempdir().unwrap();
        run_script(&dir, "1\nAna\n20\n1\n0\n");
        let out = run_script(&dir, "3\n0\n");
        assert!(out.contains("NAME: Ana"));
    }

    #[test]
    fn test_remove_flow() {
        let dir = tempdir().unwrap();
        let out = run_script(&dir, "1\nAna\n20\n1\n1\nBruno\n21\n2\n2\nBruno\n3\n0\n");
        assert!(out.contains("removed Bruno"));
        assert!(out.contains("NAME: Ana"));
        assert!(!out.contains("NAME: Bruno"));
    }

    #[test]
    fn test_empty_list_guards() {
        let dir = tempdir().unwrap();
        let out = run_script(&dir, "3\n2\nX\n4\n0\n");
        // list, remove and find each hit the empty-list guard
        assert_eq!(out.matches("empty list").count(), 3);
    }

    #[test]
    fn test_find_by_enrollment() {
        let dir = tempdir().unwrap();
        let out = run_script(&dir, "1\nBruno\n21\n2\n4\n2\n4\n99\n0\n");
        assert!(out.contains("STUDENT FOUND"));
        assert!(out.contains("student not found"));
    }

    #[test]
    fn test_invalid_menu_option() {
        let dir = tempdir().unwrap();
        let out = run_script(&dir, "9\n0\n");
        assert!(out.contains("invalid option"));
    }

    #[test]
    fn test_invalid_age_aborts_add() {
        let dir = tempdir().unwrap();
        let out = run_script(&dir, "1\nAna\nold\n3\n0\n");
        assert!(out.contains("not a valid number"));
        assert!(out.contains("empty list"));
    }

    #[test]
    fn test_overlong_name_rejected() {
        let dir = tempdir().unwrap();
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let out = run_script(&dir, &format!("1\n{}\n3\n0\n", long));
        assert!(out.contains("name is too long"));
        assert!(out.contains("empty list"));
    }

    #[test]
    fn test_eof_exits_cleanly() {
        let dir = tempdir().unwrap();
        let out = run_script(&dir, "");
        assert!(out.contains("1 - add student"));
    }
}
