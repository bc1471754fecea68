//! # QR Code Encoder

use crate::domain::code::CodeMatrix;
use crate::domain::errors::EncodingError;
use crate::ports::outbound::CodeEncoder;
use qrcode::types::QrError;
use qrcode::{Color, QrCode};

/// `CodeEncoder` producing QR codes at the smallest version that fits,
/// error correction level M.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrCodeEncoder;

impl QrCodeEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl CodeEncoder for QrCodeEncoder {
    fn encode(&self, payload: &str) -> Result<CodeMatrix, EncodingError> {
        if payload.is_empty() {
            return Err(EncodingError::Unencodable {
                reason: "empty payload".to_string(),
            });
        }

        let code = QrCode::new(payload.as_bytes()).map_err(|e| match e {
            QrError::DataTooLong => EncodingError::PayloadTooLong {
                length: payload.len(),
            },
            other => EncodingError::Unencodable {
                reason: other.to_string(),
            },
        })?;

        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();
        CodeMatrix::new(code.width(), modules)
    }
}
