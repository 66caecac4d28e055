//! Builds the `_SCALE_TIE` dispatch chain pasted into the aggregate
//! decomposition header, one line per supported field count.

/// Indent carried by every emitted line, matching the surrounding
/// `if constexpr` chain in the consuming header.
pub const INDENT: &str = "    ";

/// Marker delimiting the start of the generated section in the header.
pub const BEGIN_MARKER: &str = "// -BEGIN-GENERATED-SECTION-";

/// Marker delimiting the end of the generated section in the header.
pub const END_MARKER: &str = "// -END-GENERATED-SECTION-";

/// Builds the dispatch chain for aggregates of 1 up to `count` fields.
///
/// Line `i` (0-indexed) ties `i + 1` fields, so the full output for a
/// `count` of 3 is:
///
/// ```text
///     else _SCALE_TIE(v0)
///     else _SCALE_TIE(v0, v1)
///     else _SCALE_TIE(v0, v1, v2)
/// ```
///
/// Every line is newline-terminated. A zero or negative `count` is an
/// empty range and yields an empty string.
pub fn chain(count: i64) -> String {
    let mut out = String::new();
    for i in 0..count {
        let fields: Vec<String> = (0..=i).map(|j| format!("v{j}")).collect();
        out.push_str(INDENT);
        out.push_str("else _SCALE_TIE(");
        out.push_str(&fields.join(", "));
        out.push_str(")\n");
    }
    out
}

/// Same chain, wrapped in the generated-section markers the consuming
/// header uses to delimit where the output is pasted.
pub fn chain_with_markers(count: i64) -> String {
    format!(
        "{INDENT}{BEGIN_MARKER}\n{}{INDENT}{END_MARKER}\n",
        chain(count)
    )
}
