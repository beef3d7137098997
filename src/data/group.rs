use std::fmt;
use std::str::FromStr;

use super::error::TableError;

// ---------------------------------------------------------------------------
// ColumnGroup – the semantic role of one column
// ---------------------------------------------------------------------------

/// Semantic group of a column, inferred from its header text and position.
///
/// `Ord` is derived so groups can key a `BTreeMap` downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnGroup {
    /// Sample identifier (first column, left of the spectral block).
    Sid,
    /// Spectral axis: the header itself is a wavelength / wavenumber.
    X,
    /// Reference laboratory value.
    Y,
    /// Predicted value.
    Prd,
    /// Metadata value.
    Md,
    /// Timestamp-like column.
    Time,
    /// Categorical / product column.
    Cat,
    /// Anything the rules do not recognise.
    Unknown,
}

impl ColumnGroup {
    /// Every group, in display order.
    pub const ALL: [ColumnGroup; 8] = [
        ColumnGroup::Sid,
        ColumnGroup::X,
        ColumnGroup::Y,
        ColumnGroup::Prd,
        ColumnGroup::Md,
        ColumnGroup::Time,
        ColumnGroup::Cat,
        ColumnGroup::Unknown,
    ];

    /// Short lowercase name used in queries, logs, and the UI legend.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnGroup::Sid => "sid",
            ColumnGroup::X => "x",
            ColumnGroup::Y => "y",
            ColumnGroup::Prd => "prd",
            ColumnGroup::Md => "md",
            ColumnGroup::Time => "time",
            ColumnGroup::Cat => "cat",
            ColumnGroup::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ColumnGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnGroup {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnGroup::ALL
            .iter()
            .find(|g| g.as_str() == s)
            .copied()
            .ok_or_else(|| TableError::UnknownGroup(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Header classification
// ---------------------------------------------------------------------------

/// Whether a header reads as a plain decimal number (`1200`, `1201.5`,
/// `-3.2e4`). Surrounding whitespace is ignored; a blank header is not
/// numeric. The same predicate decides the x-group boundary in
/// [`assign_groups`], so the two passes cannot disagree.
pub fn is_numeric_header(header: &str) -> bool {
    let trimmed = header.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// Classify one column header. Pure and total: unrecognised headers come
/// back as [`ColumnGroup::Unknown`].
///
/// The rules fire top to bottom, first match wins. The sid rule is checked
/// before the numeric rule, so a numeric header that is also the first
/// column left of the spectral block still classifies as `sid`.
pub fn classify_column(header: &str, is_first_col: bool, is_before_x_group: bool) -> ColumnGroup {
    if is_first_col && is_before_x_group {
        return ColumnGroup::Sid;
    }
    if is_numeric_header(header) {
        return ColumnGroup::X;
    }
    if header.ends_with("(LAB)") {
        return ColumnGroup::Y;
    }
    if header.ends_with("(NIR)") {
        return ColumnGroup::Prd;
    }
    if header.starts_with("MD value") {
        return ColumnGroup::Md;
    }
    if header.starts_with("Start") || header.starts_with("Time") || header.starts_with("Date") {
        return ColumnGroup::Time;
    }
    if header.starts_with("Product") {
        return ColumnGroup::Cat;
    }
    ColumnGroup::Unknown
}

/// Assign a group to every header, position-aligned with the input.
///
/// The x-group boundary is the first numeric header. With no numeric header
/// anywhere, every column counts as "before the x-group", which keeps the
/// first column eligible for `sid`.
pub fn assign_groups(headers: &[String]) -> Vec<ColumnGroup> {
    let first_x_idx = headers.iter().position(|h| is_numeric_header(h));

    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let is_before_x = first_x_idx.is_none_or(|x| i < x);
            classify_column(header, i == 0, is_before_x)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn numeric_headers_classify_as_x() {
        for h in ["1200", "1201.5", "-3.2e4", " 850 ", "0"] {
            assert_eq!(classify_column(h, false, false), ColumnGroup::X, "{h:?}");
        }
    }

    #[test]
    fn blank_headers_are_not_numeric() {
        assert!(!is_numeric_header(""));
        assert!(!is_numeric_header("   "));
        assert!(!is_numeric_header("12a"));
    }

    #[test]
    fn suffix_and_prefix_rules() {
        assert_eq!(classify_column("Protein(LAB)", false, false), ColumnGroup::Y);
        assert_eq!(classify_column("Predicted(NIR)", false, false), ColumnGroup::Prd);
        assert_eq!(classify_column("MD value pH", false, false), ColumnGroup::Md);
        assert_eq!(classify_column("StartTime", false, false), ColumnGroup::Time);
        assert_eq!(classify_column("Time", false, false), ColumnGroup::Time);
        assert_eq!(classify_column("Date of run", false, false), ColumnGroup::Time);
        assert_eq!(classify_column("Product A", false, false), ColumnGroup::Cat);
    }

    #[test]
    fn unmatched_headers_fall_through_to_unknown() {
        for h in ["Comment", "LAB", "NIR", "value MD", "product a"] {
            assert_eq!(classify_column(h, false, false), ColumnGroup::Unknown, "{h:?}");
        }
    }

    #[test]
    fn sid_rule_outranks_the_numeric_rule() {
        // A numeric header that is first and left of the boundary is still sid.
        assert_eq!(classify_column("1200", true, true), ColumnGroup::Sid);
        // Either condition alone is not enough.
        assert_eq!(classify_column("1200", true, false), ColumnGroup::X);
        assert_eq!(classify_column("Sample", false, true), ColumnGroup::Unknown);
    }

    #[test]
    fn typical_export_layout() {
        let got = assign_groups(&headers(&[
            "Sample",
            "1200",
            "1201.5",
            "Protein(LAB)",
            "Predicted(NIR)",
            "MD value pH",
            "StartTime",
            "Product A",
        ]));
        assert_eq!(
            got,
            vec![
                ColumnGroup::Sid,
                ColumnGroup::X,
                ColumnGroup::X,
                ColumnGroup::Y,
                ColumnGroup::Prd,
                ColumnGroup::Md,
                ColumnGroup::Time,
                ColumnGroup::Cat,
            ]
        );
    }

    #[test]
    fn leading_numeric_column_is_x_not_sid() {
        // The boundary sits at index 0, so column 0 is not before the
        // x-group and the numeric rule fires.
        let got = assign_groups(&headers(&["1200", "1201"]));
        assert_eq!(got, vec![ColumnGroup::X, ColumnGroup::X]);
    }

    #[test]
    fn first_column_is_sid_even_without_any_x_columns() {
        let got = assign_groups(&headers(&["Sample", "Protein(LAB)", "Comment"]));
        assert_eq!(
            got,
            vec![ColumnGroup::Sid, ColumnGroup::Y, ColumnGroup::Unknown]
        );
    }

    #[test]
    fn group_names_round_trip_through_from_str() {
        for g in ColumnGroup::ALL {
            assert_eq!(g.as_str().parse::<ColumnGroup>().unwrap(), g);
        }
        assert!(matches!(
            "spectrum".parse::<ColumnGroup>(),
            Err(TableError::UnknownGroup(_))
        ));
    }
}
