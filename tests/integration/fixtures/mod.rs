// Comment-block fixtures with known inputs and expected normalized outputs

/// Single slash-commented line, no indentation
pub const SLASH_ONE_LINER: &str = "// This is a comment.";

/// Expected output for SLASH_ONE_LINER under default options
pub const SLASH_ONE_LINER_EXPECTED: &str = "This is a comment.";

/// Single hash-commented line, normalized with symbol "#"
pub const HASH_ONE_LINER: &str = "# This is a comment.";

pub const HASH_ONE_LINER_EXPECTED: &str = "This is a comment.";

/// Multi-line slash block with a leading blank line and trailing tab indentation
pub const SLASH_BLOCK: &str = "\n// This\n// is\n// a\n// comment.\n\t\t\t";

/// Expected output for SLASH_BLOCK: one joined sentence, outer whitespace gone
pub const SLASH_BLOCK_EXPECTED: &str = "This is a comment.";

/// Multi-line hash block indented with spaces, normalized with symbol "#"
pub const HASH_BLOCK: &str = "   # This\n   # is\n   # a\n   # comment.\n";

pub const HASH_BLOCK_EXPECTED: &str = "This is a comment.";

/// Three paragraphs separated by bare marker lines, with mixed tab and
/// space indentation across the block
pub const THREE_PARAGRAPHS: &str = "// This is\n// first comment.\n//\n\t// This is\n// second comment.\n//\n   // This is\n// third comment.\n";

/// Expected output for THREE_PARAGRAPHS: three sentences, one blank line between each
pub const THREE_PARAGRAPHS_EXPECTED: &str =
    "This is first comment.\n\nThis is second comment.\n\nThis is third comment.";

/// Two paragraphs separated by a run of consecutive bare marker lines
pub const DOUBLE_BLANK_RUN: &str = "// first paragraph.\n//\n//\n// second paragraph.\n";

/// Expected output for DOUBLE_BLANK_RUN: the blank run collapses to one break
pub const DOUBLE_BLANK_RUN_EXPECTED: &str = "first paragraph.\n\nsecond paragraph.";

/// Comment block saved with Windows CRLF line endings
pub const CRLF_BLOCK: &str = "// This is first comment.\r\n//\r\n// And second line.\r\n";

/// Expected output after the reader rewrites CRLF endings to LF
pub const CRLF_BLOCK_EXPECTED: &str = "This is first comment.\n\nAnd second line.";

/// Large comment block for stress testing (500 commented lines with
/// periodic paragraph breaks)
pub fn generate_large_block() -> String {
    let mut result = String::new();

    for i in 1..=500 {
        result.push_str(&format!("  // This is comment line number {i}.\n"));
        if i % 50 == 0 {
            result.push_str("  //\n");
        }
    }

    result
}
