/// Errors raised by the slice-based entry points
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("expected {expected} values for {what}, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Check that `values` holds exactly `expected` numbers
pub(crate) fn expect_len(what: &'static str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(Error::InvalidLength {
            what,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}
