use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("buffer too short: need {required} bytes, found {actual}")]
    BufferTooShort { required: usize, actual: usize },
}

impl Error {
    pub(crate) fn check(required: usize, actual: usize) -> Result<(), Self> {
        if actual < required {
            log::debug!("rejecting {actual}-byte buffer for {required}-byte access");
            Err(Self::BufferTooShort { required, actual })
        } else {
            Ok(())
        }
    }
}
