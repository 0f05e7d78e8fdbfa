//! Request validation for survey authoring and response submission.
//!
//! All checks are pure so handlers can reject bad input before touching the database.

use crate::errors::AppError;

/// Trims a survey title and rejects it when nothing is left.
pub fn validate_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("Survey title is required.".to_string()));
    }
    Ok(title.to_string())
}

/// Trims each question. The list must be non-empty and no question may be blank.
pub fn validate_questions(questions: &[String]) -> Result<Vec<String>, AppError> {
    if questions.is_empty() {
        return Err(AppError::Validation(
            "A survey needs at least one question.".to_string(),
        ));
    }

    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let q = q.trim();
            if q.is_empty() {
                Err(AppError::Validation(format!("Question {} is empty.", i + 1)))
            } else {
                Ok(q.to_string())
            }
        })
        .collect()
}

/// Answers are index-aligned with questions: exactly one non-blank answer each.
pub fn validate_answers(questions: &[String], answers: &[String]) -> Result<Vec<String>, AppError> {
    if answers.len() != questions.len() {
        return Err(AppError::Validation(format!(
            "Expected {} answers, got {}.",
            questions.len(),
            answers.len()
        )));
    }

    answers
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let a = a.trim();
            if a.is_empty() {
                Err(AppError::Validation(format!(
                    "An answer is required for question {}.",
                    i + 1
                )))
            } else {
                Ok(a.to_string())
            }
        })
        .collect()
}
