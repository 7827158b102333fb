//! CV 文件的上传前校验
//!
//! 在发起任何网络请求之前拦截掉类型或体积不合规的文件。
//! 以 MIME 类型为准（浏览器的 `File.type`），与原始客户端一致。

use std::fmt;

/// 体积上限：10 MiB
pub const MAX_CV_BYTES: u64 = 10 * 1024 * 1024;

/// 允许的 MIME 类型：PDF / DOCX / TXT
pub const ALLOWED_CV_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvFileError {
    UnsupportedType,
    TooLarge,
}

impl fmt::Display for CvFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvFileError::UnsupportedType => {
                write!(f, "Only PDF, DOCX, and TXT files are allowed")
            }
            CvFileError::TooLarge => write!(f, "File size must be less than 10MB"),
        }
    }
}

/// 校验候选文件。类型不合规优先于体积报告。
pub fn validate_cv_file(mime_type: &str, size_bytes: u64) -> Result<(), CvFileError> {
    if !ALLOWED_CV_MIME_TYPES.contains(&mime_type) {
        return Err(CvFileError::UnsupportedType);
    }
    if size_bytes > MAX_CV_BYTES {
        return Err(CvFileError::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_allowed_types() {
        for mime in ALLOWED_CV_MIME_TYPES {
            assert_eq!(validate_cv_file(mime, 1024), Ok(()));
        }
    }

    #[test]
    fn rejects_unsupported_type() {
        assert_eq!(
            validate_cv_file("image/png", 1024),
            Err(CvFileError::UnsupportedType)
        );
        assert_eq!(validate_cv_file("", 0), Err(CvFileError::UnsupportedType));
    }

    #[test]
    fn rejects_eleven_megabytes() {
        assert_eq!(
            validate_cv_file("application/pdf", 11 * 1024 * 1024),
            Err(CvFileError::TooLarge)
        );
    }

    #[test]
    fn boundary_is_inclusive() {
        assert_eq!(validate_cv_file("text/plain", MAX_CV_BYTES), Ok(()));
        assert_eq!(
            validate_cv_file("text/plain", MAX_CV_BYTES + 1),
            Err(CvFileError::TooLarge)
        );
    }

    #[test]
    fn type_error_wins_over_size_error() {
        assert_eq!(
            validate_cv_file("image/png", 11 * 1024 * 1024),
            Err(CvFileError::UnsupportedType)
        );
    }
}
