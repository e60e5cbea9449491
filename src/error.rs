/// Broad classification shared by every error of the numerical core.
///
/// Errors are detected where they occur and are never retried or clamped,
/// so the kind is enough for a caller to decide what to do next: fix the
/// calibration data, or reject a single physically invalid query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input data, such as mismatched lengths, too few points, or
    /// non-positive values where a log-linear fit needs strict positivity.
    InvalidInput,

    /// A physically invalid intermediate value, such as a non-positive
    /// resistance, a wire no hotter than ambient, or a zero fit exponent.
    Domain,
}
