use alloy::sol_types::SolError;

/// Extension trait for asserting a call reverted with a given error.
pub trait Revert<E> {
    /// Checks that `Self` carries the abi-encoded `expected` error as its
    /// revert data.
    fn reverted_with(&self, expected: E) -> bool;
}

impl<E: SolError> Revert<E> for alloy::contract::Error {
    fn reverted_with(&self, expected: E) -> bool {
        let Self::TransportError(e) = self else {
            return false;
        };

        let Some(raw_value) =
            e.as_error_resp().and_then(|payload| payload.data.clone())
        else {
            return false;
        };

        let actual = raw_value.get().trim_matches('"').trim_start_matches("0x");
        let expected = alloy::hex::encode(expected.abi_encode());
        expected == actual
    }
}

impl<E: SolError> Revert<E> for eyre::Report {
    fn reverted_with(&self, expected: E) -> bool {
        // Deployment errors only surface as command output, so the revert
        // data is searched for in the rendered report.
        let rendered = format!("{self:#?}");
        let expected = alloy::hex::encode(expected.abi_encode());
        rendered.contains(&expected)
    }
}
