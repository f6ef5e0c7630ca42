use std::path::Path;

use codecat::collect::walk::extension_of;
use proptest::prelude::*;

proptest! {
    /// A dotless stem with an allow-listed suffix is always recognized as
    /// that extension, and the bare stem never has one.
    #[test]
    fn extension_is_suffix_after_last_dot(
        stem in "[a-zA-Z0-9_]{1,12}",
        ext in prop::sample::select(vec![".py", ".js", ".css", ".go"]),
    ) {
        let name = format!("{stem}{ext}");
        let got = extension_of(Path::new(&name));
        prop_assert_eq!(got.as_deref(), Some(ext));
        prop_assert_eq!(extension_of(Path::new(&stem)), None);
    }

    /// Only the last dot counts: any dotted prefix still yields the same
    /// extension.
    #[test]
    fn multi_dot_names_use_last_segment(
        a in "[a-z]{1,6}",
        b in "[a-z]{1,6}",
    ) {
        let name = format!("{a}.{b}.py");
        let got = extension_of(Path::new(&name));
        prop_assert_eq!(got.as_deref(), Some(".py"));
    }
}
