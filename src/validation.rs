//! Input validation for task models.
//!
//! The search itself accepts any input and treats malformed tasks as
//! never feasible. This module is the strict alternative: it checks the
//! model before solving and reports every problem at once. Detects:
//! - Ids that disagree with insertion order
//! - Non-finite profits, durations or window bounds
//! - Negative profits
//! - Non-positive durations
//! - Inverted windows and windows shorter than the duration

use thiserror::Error;

use crate::models::TaskModel;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("task {task_id}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending task id (position in the model).
    pub task_id: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Task id does not match its position in the model.
    IdMismatch,
    /// Profit, duration or a window bound is NaN or infinite.
    NonFiniteValue,
    /// Profit is below zero.
    NegativeProfit,
    /// Duration is zero or negative.
    NonPositiveDuration,
    /// Window end precedes window start.
    InvertedWindow,
    /// Window is shorter than the task's duration.
    WindowTooShort,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, task_id: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            task_id,
            message: message.into(),
        }
    }
}

/// Validates every task in the model.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_model(model: &TaskModel) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, task) in model.tasks().iter().enumerate() {
        if task.id != index {
            errors.push(ValidationError::new(
                ValidationErrorKind::IdMismatch,
                index,
                format!("id {} stored at position {index}", task.id),
            ));
        }

        let values = [
            ("profit", task.profit),
            ("duration", task.duration),
            ("window start", task.window_start()),
            ("window end", task.window_end()),
        ];
        let mut finite = true;
        for (name, value) in values {
            if !value.is_finite() {
                finite = false;
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonFiniteValue,
                    index,
                    format!("{name} is {value}"),
                ));
            }
        }
        // Remaining checks compare values; skip them on NaN/inf.
        if !finite {
            continue;
        }

        if task.profit < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeProfit,
                index,
                format!("negative profit {}", task.profit),
            ));
        }

        if task.duration <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                index,
                format!("non-positive duration {}", task.duration),
            ));
        }

        if task.window.is_inverted() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedWindow,
                index,
                format!(
                    "window [{}, {}] is inverted",
                    task.window_start(),
                    task.window_end()
                ),
            ));
        } else if task.duration > 0.0 && task.window.length() < task.duration {
            errors.push(ValidationError::new(
                ValidationErrorKind::WindowTooShort,
                index,
                format!(
                    "window [{}, {}] shorter than duration {}",
                    task.window_start(),
                    task.window_end(),
                    task.duration
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_model() {
        let model = TaskModel::new()
            .with_task(10.0, 5.0, 0.0, 10.0, [0.0; 3])
            .with_task(0.0, 1.0, 3.0, 4.0, [0.0; 3]);
        assert!(validate_model(&model).is_ok());
        assert!(validate_model(&TaskModel::new()).is_ok());
    }

    #[test]
    fn test_non_positive_duration() {
        let model = TaskModel::new().with_task(10.0, 0.0, 0.0, 10.0, [0.0; 3]);
        let errors = validate_model(&model).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NonPositiveDuration));
    }

    #[test]
    fn test_inverted_window() {
        let model = TaskModel::new().with_task(10.0, 1.0, 10.0, 2.0, [0.0; 3]);
        let errors = validate_model(&model).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvertedWindow));
        assert!(!has_kind(&errors, ValidationErrorKind::WindowTooShort));
    }

    #[test]
    fn test_window_too_short() {
        let model = TaskModel::new().with_task(10.0, 5.0, 0.0, 4.0, [0.0; 3]);
        let errors = validate_model(&model).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::WindowTooShort);
        assert_eq!(errors[0].task_id, 0);
    }

    #[test]
    fn test_negative_profit() {
        let model = TaskModel::new().with_task(-1.0, 5.0, 0.0, 10.0, [0.0; 3]);
        let errors = validate_model(&model).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NegativeProfit));
    }

    #[test]
    fn test_non_finite() {
        let model = TaskModel::new().with_task(f64::NAN, 5.0, 0.0, f64::INFINITY, [0.0; 3]);
        let errors = validate_model(&model).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonFiniteValue));
    }

    #[test]
    fn test_id_mismatch_from_deserialized_model() {
        let json = r#"{"tasks":[{"id":4,"profit":1.0,"duration":1.0,
            "window":{"start":0.0,"end":2.0},"position":[0.0,0.0,0.0]}]}"#;
        let model: TaskModel = serde_json::from_str(json).unwrap();
        let errors = validate_model(&model).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::IdMismatch));
    }

    #[test]
    fn test_multiple_errors() {
        let model = TaskModel::new()
            .with_task(-3.0, -1.0, 0.0, 10.0, [0.0; 3])
            .with_task(5.0, 2.0, 8.0, 1.0, [0.0; 3]);
        let errors = validate_model(&model).unwrap_err();
        assert!(errors.len() >= 3);
        assert!(errors.iter().any(|e| e.task_id == 1));
    }

    #[test]
    fn test_error_display() {
        let model = TaskModel::new().with_task(10.0, 0.0, 0.0, 10.0, [0.0; 3]);
        let errors = validate_model(&model).unwrap_err();
        assert_eq!(errors[0].to_string(), "task 0: non-positive duration 0");
    }
}
