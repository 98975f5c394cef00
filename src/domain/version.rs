use crate::error::{Result, SemverError};
use std::fmt;
use std::str::FromStr;

/// Minimum number of numeric segments (major.minor.patch)
pub const MIN_SEGMENTS: usize = 3;

/// Semantic version with any number (>= 3) of numeric segments
///
/// Tags are stored without their leading separator: `1.2.3-beta+001` holds
/// `prerelease = Some("beta")` and `build_metadata = Some("001")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    segments: Vec<u64>,
    prerelease: Option<String>,
    build_metadata: Option<String>,
}

/// Structured bump request, applied in major -> minor -> patch order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpFlags {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
}

impl BumpFlags {
    pub fn new(major: bool, minor: bool, patch: bool) -> Self {
        BumpFlags {
            major,
            minor,
            patch,
        }
    }

    /// True when any of major, minor or patch is requested
    pub fn is_structural(&self) -> bool {
        self.major || self.minor || self.patch
    }

    /// Flags indexed by segment position
    pub fn as_flags(&self) -> [bool; 3] {
        [self.major, self.minor, self.patch]
    }
}

impl SemanticVersion {
    /// Parse a version string of the form `N.N.N[.N...][-tag][+meta]`
    ///
    /// # Returns
    /// * `Ok(SemanticVersion)` - Parsed version
    /// * `Err(InvalidVersionFormat)` - If any segment is empty, non-numeric,
    ///   has a leading zero or overflows, or if a tag is empty or malformed
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();

        let (rest, build_metadata) = match text.split_once('+') {
            Some((rest, meta)) => (rest, Some(parse_build_metadata(text, meta)?)),
            None => (text, None),
        };

        let (core, prerelease) = match rest.split_once('-') {
            Some((core, tag)) => (core, Some(parse_prerelease(text, tag)?)),
            None => (rest, None),
        };

        let segments = core
            .split('.')
            .map(|segment| parse_segment(text, segment))
            .collect::<Result<Vec<u64>>>()?;

        if segments.len() < MIN_SEGMENTS {
            return Err(SemverError::version(
                text,
                format!(
                    "expected at least {} dot-separated segments, found {}",
                    MIN_SEGMENTS,
                    segments.len()
                ),
            ));
        }

        Ok(SemanticVersion {
            segments,
            prerelease,
            build_metadata,
        })
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// Increment the segments selected by `flags` and return the joined core
    ///
    /// Flags are visited in ascending index order. The first flagged index is
    /// incremented and every later segment is reset to zero; a reset segment
    /// is not incremented again even if its own flag is set, so a major+patch
    /// bump of `1.2.3` gives `2.0.0`.
    pub fn increment_segments(&self, flags: &[bool]) -> Result<String> {
        let mut segments = self.segments.clone();

        if let Some(index) = flags
            .iter()
            .take(segments.len())
            .position(|&flagged| flagged)
        {
            segments[index] = segments[index].checked_add(1).ok_or_else(|| {
                SemverError::version(self.to_string(), format!("segment {} overflows", index))
            })?;
            for segment in segments.iter_mut().skip(index + 1) {
                *segment = 0;
            }
        }

        Ok(join_segments(&segments))
    }

    /// Produce the next version from a structured bump and tag overrides
    ///
    /// A non-empty `tag` or `metadata` always wins. Otherwise a structural
    /// bump clears the existing value and a tag-only update keeps it.
    pub fn update(&self, bump: BumpFlags, tag: &str, metadata: &str) -> Result<Self> {
        let structural = bump.is_structural();
        let core = self.increment_segments(&bump.as_flags())?;

        let prerelease = resolve_tag(tag, self.prerelease(), structural);
        let build_metadata = resolve_tag(metadata, self.build_metadata(), structural);

        let mut next = core;
        if let Some(pre) = prerelease {
            next.push('-');
            next.push_str(pre);
        }
        if let Some(meta) = build_metadata {
            next.push('+');
            next.push_str(meta);
        }

        Self::parse(&next)
    }
}

fn resolve_tag<'a>(requested: &'a str, existing: Option<&'a str>, structural: bool) -> Option<&'a str> {
    if !requested.is_empty() {
        Some(requested)
    } else if structural {
        None
    } else {
        existing
    }
}

fn join_segments(segments: &[u64]) -> String {
    segments
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

fn parse_segment(input: &str, segment: &str) -> Result<u64> {
    if segment.is_empty() {
        return Err(SemverError::version(input, "empty numeric segment"));
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SemverError::version(
            input,
            format!("segment '{}' is not a non-negative integer", segment),
        ));
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return Err(SemverError::version(
            input,
            format!("segment '{}' has a leading zero", segment),
        ));
    }
    segment
        .parse::<u64>()
        .map_err(|e| SemverError::version(input, format!("segment '{}': {}", segment, e)))
}

fn parse_prerelease(input: &str, tag: &str) -> Result<String> {
    if tag.is_empty() {
        return Err(SemverError::version(input, "empty prerelease tag"));
    }
    semver::Prerelease::new(tag)
        .map(|pre| pre.as_str().to_string())
        .map_err(|e| SemverError::version(input, format!("prerelease '{}': {}", tag, e)))
}

fn parse_build_metadata(input: &str, meta: &str) -> Result<String> {
    if meta.is_empty() {
        return Err(SemverError::version(input, "empty build metadata"));
    }
    semver::BuildMetadata::new(meta)
        .map(|build| build.as_str().to_string())
        .map_err(|e| SemverError::version(input, format!("build metadata '{}': {}", meta, e)))
}

impl FromStr for SemanticVersion {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join_segments(&self.segments))?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(meta) = &self.build_metadata {
            write!(f, "+{}", meta)?;
        }
        Ok(())
    }
}
