#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Detailed debugging output from the tracing machinery itself
    Trace,
    /// Start and normal completion of a traced span
    Info,
    /// Suspicious condition, such as a detected caller-discipline violation
    Warning,
    /// Exceptional completion of a traced span
    Error,
}
