//! Spreadsheet export: renders a survey's responses as an XLSX workbook.
//!
//! Layout:
//! - header: `Response ID`, `Submission Date`, then every question
//! - one row per response, answers aligned to question order
//! - a lone `No responses yet` row when there is nothing to export

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::models::survey::{ResponseRow, SurveyRow};

pub const SHEET_NAME: &str = "Survey Responses";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const ID_COLUMN_WIDTH: f64 = 15.0;
const DATE_COLUMN_WIDTH: f64 = 20.0;
const MIN_QUESTION_WIDTH: usize = 20;
const MAX_QUESTION_WIDTH: usize = 50;

/// Builds the header row followed by one row per response.
pub fn build_rows(survey: &SurveyRow, responses: &[ResponseRow]) -> Vec<Vec<String>> {
    let mut header = vec!["Response ID".to_string(), "Submission Date".to_string()];
    header.extend(survey.questions.iter().cloned());

    let mut rows = vec![header];

    if responses.is_empty() {
        rows.push(vec!["No responses yet".to_string()]);
        return rows;
    }

    for response in responses {
        let mut row = vec![
            response.id.clone(),
            response
                .submitted_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
        ];
        row.extend(
            (0..survey.questions.len())
                .map(|i| response.answers.get(i).cloned().unwrap_or_default()),
        );
        rows.push(row);
    }

    rows
}

/// Column widths in characters: id, date, then one per question.
pub fn column_widths(questions: &[String]) -> Vec<f64> {
    let mut widths = vec![ID_COLUMN_WIDTH, DATE_COLUMN_WIDTH];
    widths.extend(questions.iter().map(|q| {
        q.chars()
            .count()
            .clamp(MIN_QUESTION_WIDTH, MAX_QUESTION_WIDTH) as f64
    }));
    widths
}

/// `<title>_responses_<YYYY-MM-DD>.xlsx`, keeping only ASCII word characters and spaces.
pub fn export_filename(title: &str, date: NaiveDate) -> String {
    let cleaned: String = title
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                Some(c)
            } else if c.is_whitespace() {
                Some(' ')
            } else {
                None
            }
        })
        .collect();
    let cleaned = cleaned.trim();
    let stem = if cleaned.is_empty() { "survey" } else { cleaned };
    format!("{stem}_responses_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Renders the workbook to an in-memory buffer.
pub fn to_xlsx(survey: &SurveyRow, responses: &[ResponseRow]) -> Result<Vec<u8>, XlsxError> {
    let rows = build_rows(survey, responses);
    let header_format = Format::new().set_bold();

    let mut workbook = Workbook::new();
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if r == 0 {
                    worksheet.write_string_with_format(0, c as u16, value.as_str(), &header_format)?;
                } else {
                    worksheet.write_string(r as u32, c as u16, value.as_str())?;
                }
            }
        }

        for (c, width) in column_widths(&survey.questions).into_iter().enumerate() {
            worksheet.set_column_width(c as u16, width)?;
        }
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn survey(questions: &[&str]) -> SurveyRow {
        SurveyRow {
            id: "survey-abc123def".to_string(),
            owner_id: Uuid::new_v4(),
            title: "Team Pulse".to_string(),
            description: String::new(),
            questions: questions.iter().map(|q| q.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    fn response(id: &str, answers: &[&str]) -> ResponseRow {
        ResponseRow {
            id: id.to_string(),
            survey_id: "survey-abc123def".to_string(),
            answers: answers.iter().map(|a| a.to_string()).collect(),
            submitted_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    #[test]
    fn test_header_row_lists_questions() {
        let rows = build_rows(&survey(&["Name?", "Team?"]), &[]);
        assert_eq!(rows[0], vec!["Response ID", "Submission Date", "Name?", "Team?"]);
    }

    #[test]
    fn test_no_responses_row() {
        let rows = build_rows(&survey(&["Name?"]), &[]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["No responses yet"]);
    }

    #[test]
    fn test_response_rows_align_answers() {
        let rows = build_rows(
            &survey(&["Name?", "Team?"]),
            &[response("resp-1", &["Ada", "Core"]), response("resp-2", &["Linus"])],
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["resp-1", "2025-03-14 09:26:53 UTC", "Ada", "Core"]);
        // Missing trailing answer becomes an empty cell.
        assert_eq!(rows[2], vec!["resp-2", "2025-03-14 09:26:53 UTC", "Linus", ""]);
    }

    #[test]
    fn test_extra_answers_are_dropped() {
        let rows = build_rows(&survey(&["Only?"]), &[response("resp-1", &["a", "b"])]);
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn test_column_widths_clamped() {
        let long = "x".repeat(80);
        let widths = column_widths(&["Short?".to_string(), "y".repeat(33), long]);
        assert_eq!(widths, vec![15.0, 20.0, 20.0, 33.0, 50.0]);
    }

    #[test]
    fn test_export_filename_strips_punctuation() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(
            export_filename("Q1 Staff Survey!!", date),
            "Q1 Staff Survey_responses_2025-03-14.xlsx"
        );
        assert_eq!(
            export_filename("Café \"Feedback\"\n2025", date),
            "Caf Feedback 2025_responses_2025-03-14.xlsx"
        );
    }

    #[test]
    fn test_export_filename_falls_back_for_empty_title() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(export_filename("???", date), "survey_responses_2025-01-02.xlsx");
    }

    #[test]
    fn test_to_xlsx_produces_zip_container() {
        let bytes = to_xlsx(
            &survey(&["Name?"]),
            &[response("resp-1", &["Ada"])],
        )
        .unwrap();
        // XLSX files are zip archives.
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_to_xlsx_with_no_responses() {
        let bytes = to_xlsx(&survey(&["Name?"]), &[]).unwrap();
        assert!(!bytes.is_empty());
    }
}
