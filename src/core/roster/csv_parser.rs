//! CSV parsing and export for transcripts, curricula, and plans
//!
//! Files are header-driven: columns are located by case-insensitive substring
//! match on the header row, so "Course Code", "code" and "Mã môn" layouts all
//! work. Cells may be separated by commas or tabs and may be double-quoted.
//! Malformed rows are skipped with a warning rather than failing the import.

use crate::core::models::{Category, Course, CourseStatus, CurriculumCourse};
use crate::core::recommend::RecommendationResult;
use logger::warn;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Split a CSV/TSV line into trimmed, unquoted cells
fn split_line(line: &str) -> Vec<String> {
    line.split(|c| c == ',' || c == '\t')
        .map(|cell| cell.trim().trim_matches('"').to_string())
        .collect()
}

/// Position of the first header containing `needle` (case-insensitive)
fn header_index(headers: &[String], needle: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.to_lowercase().contains(needle))
}

/// Cell at `index`, or an empty string when the row is short
fn cell(fields: &[String], index: Option<usize>) -> String {
    index
        .and_then(|i| fields.get(i))
        .cloned()
        .unwrap_or_default()
}

/// Parse a boolean-ish cell ("true", "yes", "1")
fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "yes" | "1")
}

/// Parse a lifecycle status cell
fn parse_status(value: &str) -> Option<CourseStatus> {
    match value.to_ascii_lowercase().as_str() {
        "passed" => Some(CourseStatus::Passed),
        "failed" => Some(CourseStatus::Failed),
        "in_progress" | "in progress" => Some(CourseStatus::InProgress),
        _ => None,
    }
}

/// Parse transcript records from CSV/TSV text
///
/// Expected columns (located by header): code, name, credits, score,
/// semester, planned, status. Rows with an empty name or non-positive
/// credits are skipped with a warning; they must not reach the engine.
#[must_use]
pub fn parse_transcript_str(text: &str) -> Vec<Course> {
    let mut lines = text.trim().lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers = split_line(header_line);

    let code_idx = header_index(&headers, "code");
    let name_idx = header_index(&headers, "name");
    let credits_idx = header_index(&headers, "credit");
    let score_idx = header_index(&headers, "score");
    let semester_idx = header_index(&headers, "semester");
    let planned_idx = header_index(&headers, "plan");
    let status_idx = header_index(&headers, "status");

    let mut courses = Vec::new();

    for (row, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_line(line);
        if fields.len() < 3 {
            continue;
        }

        let name = cell(&fields, name_idx);
        let credits = cell(&fields, credits_idx).parse::<f32>().unwrap_or(0.0);
        let score10 = cell(&fields, score_idx).parse::<f32>().unwrap_or(0.0);

        if name.is_empty() || credits <= 0.0 {
            warn!("Skipping transcript row {}: missing name or credits", row + 2);
            continue;
        }

        let mut course = Course::new(format!("course-{}", row + 1), name, credits, score10);

        let code = cell(&fields, code_idx);
        if !code.is_empty() {
            course.set_code(code);
        }

        let semester = cell(&fields, semester_idx);
        if !semester.is_empty() {
            course.set_semester(semester);
        }

        if parse_flag(&cell(&fields, planned_idx)) {
            course.mark_planned();
        }

        if let Some(status) = parse_status(&cell(&fields, status_idx)) {
            course.set_status(status);
        }

        courses.push(course);
    }

    courses
}

/// Parse a transcript CSV file
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn parse_transcript_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Course>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_transcript_str(&content))
}

/// Parse curriculum records from CSV/TSV text
///
/// Expected columns (located by header): code, name, credits, semester/term,
/// category, difficulty. A missing code falls back to a synthetic
/// `COURSE_{row}` key; a missing or unparsable difficulty is left unset and
/// defaults to 3 downstream.
#[must_use]
pub fn parse_curriculum_str(text: &str) -> Vec<CurriculumCourse> {
    let mut lines = text.trim().lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers = split_line(header_line);

    let code_idx = header_index(&headers, "code");
    let name_idx = header_index(&headers, "name");
    let credits_idx = header_index(&headers, "credit");
    let term_idx = header_index(&headers, "semester").or_else(|| header_index(&headers, "term"));
    let category_idx = header_index(&headers, "category");
    let difficulty_idx = header_index(&headers, "difficulty");

    let mut courses = Vec::new();

    for (row, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_line(line);
        if fields.len() < 3 {
            continue;
        }

        let name = cell(&fields, name_idx);
        let credits = cell(&fields, credits_idx).parse::<f32>().unwrap_or(0.0);

        if name.is_empty() || credits <= 0.0 {
            warn!("Skipping curriculum row {}: missing name or credits", row + 2);
            continue;
        }

        let code = cell(&fields, code_idx);
        let code = if code.is_empty() {
            format!("COURSE_{}", row + 1)
        } else {
            code
        };

        let mut course = CurriculumCourse::new(code, name, credits);

        let term = cell(&fields, term_idx);
        if !term.is_empty() {
            course.recommended_term = Some(term);
        }

        course.category = cell(&fields, category_idx).parse::<Category>().ok();
        course.difficulty = cell(&fields, difficulty_idx).parse::<u8>().ok();

        courses.push(course);
    }

    courses
}

/// Parse a curriculum CSV file
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn parse_curriculum_csv<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<CurriculumCourse>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_curriculum_str(&content))
}

/// Serialize a curriculum to CSV with quoted cells
#[must_use]
pub fn export_curriculum_csv(curriculum: &[CurriculumCourse]) -> String {
    let mut out = String::from("code,name,credits,recommended_term,category,difficulty\n");

    for course in curriculum {
        let category = course
            .category
            .map_or_else(String::new, |c| c.to_string());
        let row = [
            course.code.clone(),
            course.name.clone(),
            course.credits.to_string(),
            course.recommended_term.clone().unwrap_or_default(),
            category,
            course.difficulty().to_string(),
        ];
        let quoted: Vec<String> = row.iter().map(|cell| format!("\"{cell}\"")).collect();
        out.push_str(&quoted.join(","));
        out.push('\n');
    }

    out
}

/// Write a recommendation plan to a CSV file
///
/// One row per recommended course, followed by aggregate summary rows.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn export_plan_csv(
    result: &RecommendationResult,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut out =
        String::from("code,name,credits,difficulty,suggested_gpa4,suggested_letter,score_min,score_max\n");

    for course in &result.plan {
        out.push_str(&format!(
            "{},\"{}\",{},{},{:.1},{},{:.1},{:.1}\n",
            course.code,
            course.name,
            course.credits,
            course.difficulty,
            course.suggested_gpa4,
            course.suggested_letter,
            course.suggested_score_range.min,
            course.suggested_score_range.max,
        ));
    }

    out.push('\n');
    out.push_str(&format!("Plan Credits,{}\n", result.plan_total_credits));
    out.push_str(&format!(
        "Plan Quality Points,{:.2}\n",
        result.plan_total_quality_points
    ));
    out.push_str(&format!(
        "Required Avg GPA On Remaining,{:.2}\n",
        result.required_avg_gpa_on_remaining
    ));

    fs::write(path, out)?;
    Ok(())
}

/// Built-in sample curriculum (management information systems program)
///
/// Used by the CLI when no curriculum file is given.
#[must_use]
pub fn default_curriculum() -> Vec<CurriculumCourse> {
    let entry = |code: &str, name: &str, credits: f32, category: Category, difficulty: u8| {
        CurriculumCourse::with_rating(
            code.to_string(),
            name.to_string(),
            credits,
            category,
            difficulty,
        )
    };

    vec![
        entry("MATH101", "Advanced Mathematics 1", 3.0, Category::General, 3),
        entry("MATH102", "Advanced Mathematics 2", 3.0, Category::General, 3),
        entry("PHYS101", "General Physics", 3.0, Category::General, 2),
        entry("ENG101", "English 1", 3.0, Category::General, 2),
        entry("ENG102", "English 2", 3.0, Category::General, 2),
        entry("CS101", "Introduction to Programming", 3.0, Category::Major, 2),
        entry("CS102", "Data Structures and Algorithms", 3.0, Category::Major, 4),
        entry("CS201", "Object-Oriented Programming", 3.0, Category::Major, 3),
        entry("CS202", "Database Systems", 3.0, Category::Major, 3),
        entry("CS203", "Computer Networks", 3.0, Category::Major, 3),
        entry("MIS301", "Management Information Systems", 3.0, Category::Major, 3),
        entry("MIS302", "Systems Analysis and Design", 3.0, Category::Major, 4),
        entry("MIS303", "IT Project Management", 3.0, Category::Major, 3),
        entry("MIS401", "E-Commerce", 3.0, Category::Major, 3),
        entry("MIS402", "Information Security", 3.0, Category::Major, 4),
        entry("MIS403", "ERP Systems", 3.0, Category::Major, 4),
        entry("MIS404", "Web Application Development", 3.0, Category::Major, 3),
        entry("MIS405", "Mobile Application Development", 3.0, Category::Major, 3),
        entry("MIS406", "AI in Management", 3.0, Category::Major, 4),
        entry("MIS407", "Big Data Analytics", 3.0, Category::Major, 4),
        entry("MIS408", "Information Systems Management", 3.0, Category::Major, 3),
        entry("MIS409", "Digital Transformation", 3.0, Category::Major, 3),
        entry("MIS410", "Graduation Internship", 6.0, Category::Internship, 2),
        entry("MIS411", "Graduation Thesis", 10.0, Category::Thesis, 5),
        entry("ELEC001", "Elective 1", 3.0, Category::Elective, 2),
        entry("ELEC002", "Elective 2", 3.0, Category::Elective, 2),
        entry("ELEC003", "Elective 3", 3.0, Category::Elective, 2),
        entry("ELEC004", "Elective 4", 3.0, Category::Elective, 2),
        entry("ELEC005", "Elective 5", 3.0, Category::Elective, 2),
        entry("ELEC006", "Elective 6", 3.0, Category::Elective, 2),
        entry("GEN001", "National Defense Education", 3.0, Category::General, 1),
        entry("GEN002", "Physical Education 1", 1.0, Category::General, 1),
        entry("GEN003", "Physical Education 2", 1.0, Category::General, 1),
        entry("GEN004", "Soft Skills", 2.0, Category::General, 1),
        entry("GEN005", "Introduction to Law", 2.0, Category::General, 2),
        entry("GEN006", "Principles of Economics", 2.0, Category::General, 2),
        entry("GEN007", "Principles of Management", 2.0, Category::General, 2),
        entry("GEN008", "Fundamentals of Marketing", 2.0, Category::General, 2),
        entry("GEN009", "Financial Accounting", 3.0, Category::General, 3),
        entry("GEN010", "Corporate Finance", 3.0, Category::General, 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_transcript_rows() {
        let text = "code,name,credits,score,semester,planned,status\n\
                    CS101,\"Introduction to Programming\",3,8.5,2023.1,,\n\
                    CS102,Data Structures,3,6.8,2023.2,false,passed\n\
                    ELEC001,Elective 1,3,0,,true,\n";

        let courses = parse_transcript_str(text);

        assert_eq!(courses.len(), 3);
        assert_eq!(courses[0].code.as_deref(), Some("CS101"));
        assert_eq!(courses[0].name, "Introduction to Programming");
        assert!((courses[0].score10 - 8.5).abs() < f32::EPSILON);
        assert_eq!(courses[0].semester.as_deref(), Some("2023.1"));
        assert_eq!(courses[1].status, Some(CourseStatus::Passed));
        assert!(courses[2].planned);
    }

    #[test]
    fn skips_rows_without_name_or_credits() {
        let text = "code,name,credits,score\n\
                    CS101,,3,8.5\n\
                    CS102,Data Structures,0,6.8\n\
                    CS103,Computer Networks,-1,6.8\n\
                    CS104,Operating Systems,3,7.0\n";

        let courses = parse_transcript_str(text);

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].code.as_deref(), Some("CS104"));
    }

    #[test]
    fn tolerates_tab_separated_input() {
        let text = "code\tname\tcredits\tscore\nCS101\tIntro\t3\t8.0\n";

        let courses = parse_transcript_str(text);

        assert_eq!(courses.len(), 1);
        assert!((courses[0].credits - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn parses_curriculum_rows_with_fallback_code() {
        let text = "code,name,credits,semester,category,difficulty\n\
                    CS101,Introduction to Programming,3,1,major,2\n\
                    ,Unnamed Code Course,3,,elective,9x\n";

        let courses = parse_curriculum_str(text);

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].category, Some(Category::Major));
        assert_eq!(courses[0].difficulty, Some(2));
        assert_eq!(courses[1].code, "COURSE_2");
        // Unparsable difficulty stays unset and defaults downstream
        assert_eq!(courses[1].difficulty, None);
        assert_eq!(courses[1].difficulty(), 3);
    }

    #[test]
    fn empty_input_parses_to_nothing() {
        assert!(parse_transcript_str("").is_empty());
        assert!(parse_curriculum_str("code,name,credits\n").is_empty());
    }

    #[test]
    fn curriculum_csv_round_trips() {
        let curriculum = default_curriculum();
        let csv = export_curriculum_csv(&curriculum);
        let parsed = parse_curriculum_str(&csv);

        assert_eq!(parsed.len(), curriculum.len());
        for (original, round_tripped) in curriculum.iter().zip(&parsed) {
            assert_eq!(original.code, round_tripped.code);
            assert_eq!(original.name, round_tripped.name);
            assert!((original.credits - round_tripped.credits).abs() < f32::EPSILON);
            assert_eq!(original.category, round_tripped.category);
            assert_eq!(original.difficulty(), round_tripped.difficulty());
        }
    }

    #[test]
    fn default_curriculum_has_unique_codes() {
        let curriculum = default_curriculum();
        let mut codes: Vec<&str> = curriculum.iter().map(|c| c.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();

        assert_eq!(codes.len(), curriculum.len());
    }
}
