//! Distribution metadata headers.
//!
//! `METADATA` (dist-info) and `PKG-INFO` (egg-info) files start with an
//! RFC 822 style header block terminated by the first blank line. Only the
//! `Name` and `Version` headers are needed.

/// Name and version read from a metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionMetadata {
    pub name: String,
    pub version: String,
}

/// Parse the header block of a metadata file.
///
/// Returns `None` unless both `Name` and `Version` are present. The first
/// occurrence of each header wins.
pub fn parse_metadata(content: &str) -> Option<DistributionMetadata> {
    let mut name = None;
    let mut version = None;

    for line in content.lines() {
        if line.trim().is_empty() {
            break;
        }
        // Continuation lines belong to multi-line headers such as Description.
        if line.starts_with(' ') || line.starts_with('\t') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if key.eq_ignore_ascii_case("name") && name.is_none() {
            name = Some(value.to_string());
        } else if key.eq_ignore_ascii_case("version") && version.is_none() {
            version = Some(value.to_string());
        }
    }

    match (name, version) {
        (Some(name), Some(version)) if !name.is_empty() && !version.is_empty() => {
            Some(DistributionMetadata { name, version })
        }
        _ => None,
    }
}
