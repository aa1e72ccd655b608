//! Darwin kernel major version to macOS marketing name.

/// Name reported for Darwin majors outside [`CODE_NAMES`].
pub const UNKNOWN_DARWIN_NAME: &str = "Unknown Mac OS X Version";

/// Darwin majors 5 through 15, in order.
const CODE_NAMES: [(u16, &str); 11] = [
    (5, "Mac OS X 10.1 Puma"),
    (6, "Mac OS X 10.2 Jaguar"),
    (7, "Mac OS X 10.3 Panther"),
    (8, "Mac OS X 10.4 Tiger"),
    (9, "Mac OS X 10.5 Leopard"),
    (10, "Mac OS X 10.6 Snow Leopard"),
    (11, "Mac OS X 10.7 Lion"),
    (12, "OS X 10.8 Mountain Lion"),
    (13, "OS X 10.9 Mavericks"),
    (14, "OS X 10.10 Yosemite"),
    (15, "OS X 10.11 El Capitan"),
];

/// Marketing name for a Darwin kernel major version.
#[must_use]
pub fn code_name(darwin_major: u16) -> &'static str {
    CODE_NAMES
        .iter()
        .find(|(major, _)| *major == darwin_major)
        .map_or(UNKNOWN_DARWIN_NAME, |(_, name)| name)
}
