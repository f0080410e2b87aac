//! Draft validation at the service boundary.
//!
//! A draft must pass here before it reaches the store. The checks mirror
//! the column constraints (presence, width limits) plus two shape rules
//! the schema cannot express: image/source links must parse as absolute
//! URLs, and a date range must not end before it starts.
//!
//! Callers are expected to run [`EventDraft::normalized`] first so that
//! whitespace-only titles and empty-string optionals have already been
//! collapsed; the title check trims again regardless so an unnormalized
//! draft cannot slip through.

use chrono::NaiveDate;
use histolinea_types::{DESCRIPTION_MAX_LEN, EventDraft, TITLE_MAX_LEN, URL_MAX_LEN};
use url::Url;

/// Why a draft was rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The title is empty after trimming.
    #[error("title must not be empty")]
    TitleEmpty,

    /// The title exceeds the column width.
    #[error("title is {len} characters, maximum is {TITLE_MAX_LEN}")]
    TitleTooLong {
        /// Actual character count.
        len: usize,
    },

    /// The description exceeds the column width.
    #[error("description is {len} characters, maximum is {DESCRIPTION_MAX_LEN}")]
    DescriptionTooLong {
        /// Actual character count.
        len: usize,
    },

    /// A URL field exceeds the column width.
    #[error("{field} is {len} characters, maximum is {URL_MAX_LEN}")]
    UrlTooLong {
        /// Which field (`imageUrl` or `sourceUrl`).
        field: &'static str,
        /// Actual character count.
        len: usize,
    },

    /// A URL field does not parse as an absolute URL.
    #[error("{field} is not a valid absolute URL: {reason}")]
    UrlInvalid {
        /// Which field (`imageUrl` or `sourceUrl`).
        field: &'static str,
        /// Parser diagnostic.
        reason: String,
    },

    /// The end date precedes the start date.
    #[error("end date {end} precedes start date {start}")]
    DateRangeInverted {
        /// The draft's start date.
        start: NaiveDate,
        /// The offending end date.
        end: NaiveDate,
    },
}

/// Validate a (normalized) draft against the store's constraints.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, checking fields in
/// declaration order: title, description, dates, image URL, source URL.
pub fn validate_draft(draft: &EventDraft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::TitleEmpty);
    }
    let title_len = draft.title.chars().count();
    if title_len > TITLE_MAX_LEN {
        return Err(ValidationError::TitleTooLong { len: title_len });
    }

    if let Some(description) = &draft.description {
        let len = description.chars().count();
        if len > DESCRIPTION_MAX_LEN {
            return Err(ValidationError::DescriptionTooLong { len });
        }
    }

    if let Some(end) = draft.end_date
        && end < draft.start_date
    {
        return Err(ValidationError::DateRangeInverted {
            start: draft.start_date,
            end,
        });
    }

    validate_url_field("imageUrl", draft.image_url.as_deref())?;
    validate_url_field("sourceUrl", draft.source_url.as_deref())?;

    Ok(())
}

/// Check one optional URL field for width and absolute-URL shape.
fn validate_url_field(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };

    let len = value.chars().count();
    if len > URL_MAX_LEN {
        return Err(ValidationError::UrlTooLong { field, len });
    }

    // Url::parse rejects relative references, which is exactly the
    // "absolute URL" requirement.
    Url::parse(value).map_err(|e| ValidationError::UrlInvalid {
        field,
        reason: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_draft() -> EventDraft {
        EventDraft {
            title: String::from("Signing of the Magna Carta"),
            description: Some(String::from("Sealed at Runnymede.")),
            start_date: date(1215, 6, 15),
            end_date: None,
            image_url: Some(String::from("https://example.org/carta.jpg")),
            source_url: Some(String::from("https://example.org/carta")),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(validate_draft(&valid_draft()), Ok(()));
    }

    #[test]
    fn whitespace_title_rejected() {
        let mut draft = valid_draft();
        draft.title = String::from("   ");
        assert_eq!(validate_draft(&draft), Err(ValidationError::TitleEmpty));
    }

    #[test]
    fn over_length_title_rejected() {
        let mut draft = valid_draft();
        draft.title = "x".repeat(201);
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::TitleTooLong { len: 201 })
        );
    }

    #[test]
    fn over_length_description_rejected() {
        let mut draft = valid_draft();
        draft.description = Some("x".repeat(4001));
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::DescriptionTooLong { len: 4001 })
        );
    }

    #[test]
    fn relative_url_rejected() {
        let mut draft = valid_draft();
        draft.image_url = Some(String::from("/images/carta.jpg"));
        assert!(matches!(
            validate_draft(&draft),
            Err(ValidationError::UrlInvalid {
                field: "imageUrl",
                ..
            })
        ));
    }

    #[test]
    fn garbage_source_url_rejected() {
        let mut draft = valid_draft();
        draft.source_url = Some(String::from("not a url"));
        assert!(matches!(
            validate_draft(&draft),
            Err(ValidationError::UrlInvalid {
                field: "sourceUrl",
                ..
            })
        ));
    }

    #[test]
    fn absent_urls_are_fine() {
        let mut draft = valid_draft();
        draft.image_url = None;
        draft.source_url = None;
        assert_eq!(validate_draft(&draft), Ok(()));
    }

    #[test]
    fn inverted_date_range_rejected() {
        let mut draft = valid_draft();
        draft.end_date = Some(date(1215, 6, 14));
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::DateRangeInverted {
                start: date(1215, 6, 15),
                end: date(1215, 6, 14),
            })
        );
    }

    #[test]
    fn single_day_range_accepted() {
        let mut draft = valid_draft();
        draft.end_date = Some(date(1215, 6, 15));
        assert_eq!(validate_draft(&draft), Ok(()));
    }
}
