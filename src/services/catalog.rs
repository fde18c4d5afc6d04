/// Framework names recognized without an explicit catalog download, in the
/// order a bare `scan` evaluates them.
pub const NATIVE_FRAMEWORKS: &[&str] = &["nsa", "mitre"];
