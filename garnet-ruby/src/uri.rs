/*!
Parsing of `http` trait URI templates; static path segments, `{label}` placeholders, greedy
`{label+}` placeholders, and any static query string following `?`. Host prefix templates from
`endpoint` traits parse here too; literal text interleaved with `{label}` placeholders.
*/

use garnet_core::error::{ErrorKind, Result};
use garnet_core::model::Identifier;
use regex::Regex;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// One segment of a URI template path.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// A literal path segment, used as-is.
    Literal(String),
    /// A `{name}` placeholder bound to an input member.
    Label(String),
    /// A `{name+}` placeholder bound to an input member; preserves `/` in the bound value.
    Greedy(String),
}

///
/// A parsed URI template from an `http` trait.
///
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UriTemplate {
    segments: Vec<PathSegment>,
    static_query: Vec<(String, Option<String>)>,
}

///
/// One part of a host prefix template from an `endpoint` trait.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostPrefixPart {
    /// Literal text, used as-is.
    Literal(String),
    /// A `{name}` placeholder bound to a host-label input member.
    Label(String),
}

///
/// A parsed host prefix template from an `endpoint` trait. Unlike path labels, host labels may
/// appear anywhere within the prefix text.
///
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct HostPrefixTemplate {
    parts: Vec<HostPrefixPart>,
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

lazy_static! {
    static ref LABEL: Regex = Regex::new(r"^\{([A-Za-z_][A-Za-z0-9_]*)(\+)?\}$").unwrap();
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl UriTemplate {
    ///
    /// Parse a URI template; the template must be absolute (begin with `/`).
    ///
    pub fn parse(uri: &str) -> Result<Self> {
        if !uri.starts_with('/') {
            return Err(ErrorKind::InvalidUriTemplate(uri.to_string()).into());
        }
        let (path, query) = match uri.find('?') {
            Some(index) => (&uri[..index], Some(&uri[index + 1..])),
            None => (uri, None),
        };

        let mut segments: Vec<PathSegment> = Default::default();
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            segments.push(match LABEL.captures(segment) {
                Some(captures) => {
                    let name = captures.get(1).unwrap().as_str().to_string();
                    if captures.get(2).is_some() {
                        PathSegment::Greedy(name)
                    } else {
                        PathSegment::Label(name)
                    }
                }
                None => PathSegment::Literal(segment.to_string()),
            });
        }

        let mut static_query: Vec<(String, Option<String>)> = Default::default();
        if let Some(query) = query {
            for pair in query.split('&').filter(|pair| !pair.is_empty()) {
                match pair.find('=') {
                    Some(index) => static_query.push((
                        pair[..index].to_string(),
                        Some(pair[index + 1..].to_string()),
                    )),
                    None => static_query.push((pair.to_string(), None)),
                }
            }
        }

        Ok(Self {
            segments,
            static_query,
        })
    }

    /// The parsed path segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// The static query key/value pairs, in template order.
    pub fn static_query(&self) -> impl Iterator<Item = &(String, Option<String>)> {
        self.static_query.iter()
    }

    /// The names of all labels in the template, with their greedy flag, in order.
    pub fn labels(&self) -> Vec<(&str, bool)> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                PathSegment::Label(name) => Some((name.as_str(), false)),
                PathSegment::Greedy(name) => Some((name.as_str(), true)),
                PathSegment::Literal(_) => None,
            })
            .collect()
    }

    /// Returns `true` if the template contains any label placeholders, else `false`.
    pub fn has_labels(&self) -> bool {
        !self.labels().is_empty()
    }

    ///
    /// The Ruby `format` string for this path; labels become `%<name>s` references and literal
    /// `%` characters are doubled.
    ///
    pub fn format_string(&self) -> String {
        let mut result = String::new();
        for segment in &self.segments {
            result.push('/');
            match segment {
                PathSegment::Literal(text) => result.push_str(&text.replace('%', "%%")),
                PathSegment::Label(name) | PathSegment::Greedy(name) => {
                    result.push_str(&format!("%<{}>s", name));
                }
            }
        }
        if result.is_empty() {
            result.push('/');
        }
        result
    }
}

// ------------------------------------------------------------------------------------------------

impl HostPrefixTemplate {
    ///
    /// Parse a host prefix template; `{` and `}` must pair around valid identifiers.
    ///
    pub fn parse(template: &str) -> Result<Self> {
        let mut parts: Vec<HostPrefixPart> = Default::default();
        let mut literal = String::new();
        let mut chars = template.chars();
        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if !literal.is_empty() {
                        parts.push(HostPrefixPart::Literal(std::mem::take(&mut literal)));
                    }
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => {
                                return Err(
                                    ErrorKind::InvalidUriTemplate(template.to_string()).into()
                                )
                            }
                        }
                    }
                    if !Identifier::is_valid(&name) {
                        return Err(ErrorKind::InvalidUriTemplate(template.to_string()).into());
                    }
                    parts.push(HostPrefixPart::Label(name));
                }
                '}' => return Err(ErrorKind::InvalidUriTemplate(template.to_string()).into()),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            parts.push(HostPrefixPart::Literal(literal));
        }
        Ok(Self { parts })
    }

    /// The parsed parts, in template order.
    pub fn parts(&self) -> impl Iterator<Item = &HostPrefixPart> {
        self.parts.iter()
    }

    /// The names of all labels in the template, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                HostPrefixPart::Label(name) => Some(name.as_str()),
                HostPrefixPart::Literal(_) => None,
            })
            .collect()
    }

    /// Returns `true` if the template contains any label placeholders, else `false`.
    pub fn has_labels(&self) -> bool {
        !self.labels().is_empty()
    }
}
