use super::constants::{ALLOWED_UPLOAD_TYPES, MAX_UPLOAD_BYTES};

/// Local pre-flight rejections. Each one is terminal for the attempt and is
/// raised before any request leaves the browser.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UploadRejection {
    TooLarge,
    UnsupportedType,
}

impl UploadRejection {
    pub fn message(&self) -> &'static str {
        match self {
            UploadRejection::TooLarge => "File too large. Maximum size is 50MB.",
            UploadRejection::UnsupportedType => {
                "Invalid file type. Please upload a CSV or Excel file."
            }
        }
    }
}

impl std::fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Size check first, then MIME type, mirroring the order the user sees the
/// messages in.
pub fn validate_spreadsheet(mime_type: &str, size_bytes: u64) -> Result<(), UploadRejection> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge);
    }
    if !ALLOWED_UPLOAD_TYPES.contains(&mime_type) {
        return Err(UploadRejection::UnsupportedType);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn accepts_every_supported_spreadsheet_type() {
        for mime in ALLOWED_UPLOAD_TYPES {
            assert_eq!(validate_spreadsheet(mime, 4 * MB), Ok(()));
        }
    }

    #[test]
    fn rejects_a_60_mb_file_before_any_request() {
        assert_eq!(
            validate_spreadsheet("text/csv", 60 * MB),
            Err(UploadRejection::TooLarge)
        );
    }

    #[test]
    fn exactly_50_mb_still_passes() {
        assert_eq!(validate_spreadsheet("text/csv", 50 * MB), Ok(()));
        assert_eq!(
            validate_spreadsheet("text/csv", 50 * MB + 1),
            Err(UploadRejection::TooLarge)
        );
    }

    #[test]
    fn rejects_non_spreadsheet_types() {
        for mime in ["application/pdf", "image/png", "text/plain", ""] {
            assert_eq!(
                validate_spreadsheet(mime, MB),
                Err(UploadRejection::UnsupportedType)
            );
        }
    }

    #[test]
    fn oversize_wins_when_both_checks_would_fail() {
        assert_eq!(
            validate_spreadsheet("application/pdf", 60 * MB),
            Err(UploadRejection::TooLarge)
        );
    }

    #[test]
    fn rejection_messages_match_the_banners() {
        assert_eq!(
            UploadRejection::TooLarge.message(),
            "File too large. Maximum size is 50MB."
        );
        assert_eq!(
            UploadRejection::UnsupportedType.message(),
            "Invalid file type. Please upload a CSV or Excel file."
        );
    }
}
