// Centralized defaults
pub const DEFAULT_OUTPUT_FILE: &str = "all_code.txt";
pub const DEFAULT_EXCLUDED_DIR: &str = "node_modules";

/// Source-code extensions eligible for collection, leading dot included.
/// Matched case-sensitively against the text after the last dot of a file
/// name; files without an extension never match.
pub const CODE_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".java", ".cpp", ".c", ".cs", ".rb", ".go", ".php", ".html", ".css",
];
