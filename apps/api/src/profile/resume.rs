//! Resume Upload — turns an uploaded PDF or plain-text file into profile resume text.

use bytes::Bytes;
use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Unsupported resume format '{0}'. Upload a PDF or plain-text file.")]
    Unsupported(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Resume text is not valid UTF-8")]
    NotUtf8,

    #[error("No text could be extracted from the resume")]
    Empty,
}

impl From<ResumeError> for AppError {
    fn from(e: ResumeError) -> Self {
        match e {
            ResumeError::Unsupported(_) | ResumeError::NotUtf8 => AppError::Validation(e.to_string()),
            ResumeError::Pdf(_) | ResumeError::Empty => AppError::UnprocessableEntity(e.to_string()),
        }
    }
}

enum ResumeFormat {
    Pdf,
    Text,
}

fn detect_format(content_type: Option<&str>, file_name: Option<&str>) -> Result<ResumeFormat, ResumeError> {
    let content_type = content_type.unwrap_or_default().to_lowercase();
    let file_name = file_name.unwrap_or_default().to_lowercase();

    if content_type == "application/pdf" || file_name.ends_with(".pdf") {
        Ok(ResumeFormat::Pdf)
    } else if content_type.starts_with("text/") || file_name.ends_with(".txt") || file_name.ends_with(".md") {
        Ok(ResumeFormat::Text)
    } else if content_type.is_empty() {
        Err(ResumeError::Unsupported(file_name))
    } else {
        Err(ResumeError::Unsupported(content_type))
    }
}

/// Extracts resume text. Whitespace runs are collapsed line by line and blank lines dropped.
pub fn extract_resume_text(
    content_type: Option<&str>,
    file_name: Option<&str>,
    data: &Bytes,
) -> Result<String, ResumeError> {
    let raw = match detect_format(content_type, file_name)? {
        ResumeFormat::Pdf => {
            pdf_extract::extract_text_from_mem(data).map_err(|e| ResumeError::Pdf(e.to_string()))?
        }
        ResumeFormat::Text => std::str::from_utf8(data)
            .map_err(|_| ResumeError::NotUtf8)?
            .to_string(),
    };

    let text = normalize(&raw);
    if text.is_empty() {
        return Err(ResumeError::Empty);
    }
    Ok(text)
}

/// Runs [`extract_resume_text`] on the blocking pool. PDF parsing is CPU-bound and
/// `pdf-extract` panics on some malformed fonts; a panic is reported as `ResumeError::Pdf`.
pub async fn read_resume(
    content_type: Option<String>,
    file_name: Option<String>,
    data: Bytes,
) -> Result<String, ResumeError> {
    tokio::task::spawn_blocking(move || {
        extract_resume_text(content_type.as_deref(), file_name.as_deref(), &data)
    })
    .await
    .map_err(|e| {
        if e.is_panic() {
            ResumeError::Pdf("the document could not be parsed".to_string())
        } else {
            ResumeError::Pdf(format!("extraction task failed: {e}"))
        }
    })?
}

fn normalize(raw: &str) -> String {
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Hand-built PDF fixtures with valid xref tables.
#[cfg(test)]
pub(crate) mod fixtures {
    /// Assembles a PDF from object bodies numbered 1..=n, object 1 being the catalog.
    fn build_pdf(objects: &[String]) -> Vec<u8> {
        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_offset = pdf.len();
        let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            tail.push_str(&format!("{offset:010} 00000 n \n"));
        }
        tail.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.extend_from_slice(tail.as_bytes());
        pdf
    }

    /// One page whose content stream selects font `/F9` without any `/Resources`.
    pub(crate) fn pdf_with_undefined_font() -> Vec<u8> {
        let content = "BT /F9 12 Tf 72 720 Td (Hello) Tj ET";
        build_pdf(&[
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R >>".to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
        ])
    }

    /// One page whose font dictionary has no `/BaseFont`.
    pub(crate) fn pdf_with_font_missing_base_font() -> Vec<u8> {
        let content = "BT /F1 12 Tf 72 720 Td (Hello) Tj ET";
        build_pdf(&[
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
            "<< /Type /Font /Subtype /Type1 >>".to_string(),
        ])
    }
}
