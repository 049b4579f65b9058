//! Feedback form and submission display.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::feedback::{Feedback, FeedbackForm, MAX_RATING};

fn stars(rating: Option<u8>) -> String {
    let filled = usize::from(rating.unwrap_or(0).min(MAX_RATING));
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(usize::from(MAX_RATING) - filled)
    )
}

/// The feedback form as it is being filled in.
pub struct FeedbackFormView<'a>(pub &'a FeedbackForm);

impl fmt::Display for FeedbackFormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.0;
        writeln!(f, "# How did your cooking go?")?;
        writeln!(f)?;
        writeln!(f, "_{}_", form.recipe_title())?;
        writeln!(f)?;
        writeln!(f, "- Rating: {}", stars(form.rating()))?;
        if form.text().trim().is_empty() {
            writeln!(f, "- Thoughts: _How did it taste? Was the recipe easy to follow?_")?;
        } else {
            writeln!(f, "- Thoughts: {}", form.text().trim())?;
        }
        writeln!(f, "- Photos: {}", form.photos().len())?;
        for (index, photo) in form.photos().iter().enumerate() {
            writeln!(f, "  {}. {} ({})", index + 1, photo.file_name, photo.mime)?;
        }
        Ok(())
    }
}

/// Confirmation shown after feedback is submitted.
pub struct FeedbackSummary<'a>(pub &'a Feedback);

impl fmt::Display for FeedbackSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let feedback = self.0;
        writeln!(f, "## Feedback submitted")?;
        writeln!(f)?;
        writeln!(f, "Thank you for your feedback!")?;
        writeln!(f)?;
        writeln!(f, "- Recipe: {}", feedback.recipe_title)?;
        writeln!(f, "- Rating: {}", stars(feedback.rating))?;
        if !feedback.text.is_empty() {
            writeln!(f, "- Thoughts: {}", feedback.text)?;
        }
        if !feedback.photos.is_empty() {
            writeln!(f, "- Photos: {}", feedback.photos.len())?;
        }
        writeln!(f, "- Submitted: {}", LocalDateTime(&feedback.submitted_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(None), "☆☆☆☆☆");
        assert_eq!(stars(Some(3)), "★★★☆☆");
    }

    #[test]
    fn test_form_view() {
        let mut form = FeedbackForm::new("r1", "Tacos");
        form.set_rating(2).unwrap();
        let output = FeedbackFormView(&form).to_string();
        assert!(output.contains("_Tacos_"));
        assert!(output.contains("★★☆☆☆"));
        assert!(output.contains("Photos: 0"));
    }

    #[test]
    fn test_summary() {
        let mut form = FeedbackForm::new("r1", "Tacos");
        form.set_text("Great");
        let feedback = form.submit();
        let output = FeedbackSummary(&feedback).to_string();
        assert!(output.contains("Thank you for your feedback!"));
        assert!(output.contains("- Thoughts: Great"));
        assert!(!output.contains("Photos"));
    }
}
