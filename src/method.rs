//! # HTTP Methods
//!
//! The router serves a fixed, closed set of request methods. Every route table
//! is pre-seeded with one slot per member of that set, and registration only
//! writes into existing slots: tokens outside the set are dropped silently.
//!
//! ## Method specifiers
//!
//! Registration accepts several forms, all normalized through [`IntoMethods`]:
//!
//! - a single token: `"get"`, `"POST"`
//! - a composite token: `"GET|POST"` (pieces are trimmed)
//! - the literal `"ALL"`: every member of the closed set
//! - a collection of tokens: `["GET", "PUT"]` (used verbatim)
//! - one or more [`Method`] values

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use crate::error::RouterError;

/// Number of members in the closed method set
pub const METHOD_COUNT: usize = 6;

/// Normalized set of methods produced by a method specifier
pub type MethodSet = SmallVec<[Method; METHOD_COUNT]>;

/// Request method supported by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Options,
    Connect,
}

impl Method {
    /// Every supported method, in table order
    pub const ALL: [Method; METHOD_COUNT] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Options,
        Method::Connect,
    ];

    /// Canonical uppercase token
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Connect => "CONNECT",
        }
    }

    /// Slot of this method in a per-method table
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Exact lookup of an already-canonical token (no case folding, no trimming)
    #[must_use]
    pub fn from_token(token: &str) -> Option<Method> {
        Method::ALL.into_iter().find(|m| m.as_str() == token)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RouterError;

    /// Case-insensitive parse of a single method token
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::from_token(&s.to_ascii_uppercase()).ok_or_else(|| RouterError::UnknownMethod {
            token: s.to_string(),
        })
    }
}

impl TryFrom<&http::Method> for Method {
    type Error = RouterError;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
            Method::Options => http::Method::OPTIONS,
            Method::Connect => http::Method::CONNECT,
        }
    }
}

/// Conversion of a method specifier into a normalized [`MethodSet`]
///
/// Unknown tokens never fail: they are left out of the resulting set.
pub trait IntoMethods {
    fn into_methods(self) -> MethodSet;
}

/// Normalize a string specifier: uppercase, then `ALL`, composite or single
///
/// A single token is not trimmed; only the pieces of a composite are.
#[must_use]
pub fn parse_method_spec(spec: &str) -> MethodSet {
    let spec = spec.to_ascii_uppercase();
    let mut methods = MethodSet::new();

    if spec == "ALL" {
        methods.extend(Method::ALL);
    } else if spec.contains('|') {
        for token in spec.split('|').map(str::trim) {
            push_token(&mut methods, token);
        }
    } else {
        push_token(&mut methods, &spec);
    }
    methods
}

fn push_token(methods: &mut MethodSet, token: &str) {
    if let Some(method) = Method::from_token(token) {
        push_unique(methods, method);
    }
}

fn push_unique(methods: &mut MethodSet, method: Method) {
    if !methods.contains(&method) {
        methods.push(method);
    }
}

impl IntoMethods for &str {
    fn into_methods(self) -> MethodSet {
        parse_method_spec(self)
    }
}

impl IntoMethods for &String {
    fn into_methods(self) -> MethodSet {
        parse_method_spec(self)
    }
}

impl IntoMethods for String {
    fn into_methods(self) -> MethodSet {
        parse_method_spec(&self)
    }
}

impl IntoMethods for Method {
    fn into_methods(self) -> MethodSet {
        let mut methods = MethodSet::new();
        methods.push(self);
        methods
    }
}

impl IntoMethods for &[Method] {
    fn into_methods(self) -> MethodSet {
        let mut methods = MethodSet::new();
        for &method in self {
            push_unique(&mut methods, method);
        }
        methods
    }
}

impl<const N: usize> IntoMethods for [Method; N] {
    fn into_methods(self) -> MethodSet {
        self.as_slice().into_methods()
    }
}

impl IntoMethods for &[&str] {
    fn into_methods(self) -> MethodSet {
        let mut methods = MethodSet::new();
        for token in self {
            push_token(&mut methods, token);
        }
        methods
    }
}

impl<const N: usize> IntoMethods for [&str; N] {
    fn into_methods(self) -> MethodSet {
        self.as_slice().into_methods()
    }
}

impl IntoMethods for Vec<&str> {
    fn into_methods(self) -> MethodSet {
        self.as_slice().into_methods()
    }
}

impl IntoMethods for &[String] {
    fn into_methods(self) -> MethodSet {
        let mut methods = MethodSet::new();
        for token in self {
            push_token(&mut methods, token);
        }
        methods
    }
}

impl IntoMethods for Vec<String> {
    fn into_methods(self) -> MethodSet {
        self.as_slice().into_methods()
    }
}
