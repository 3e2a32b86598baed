//! Dynamic template matching.
//!
//! Templates are scanned in insertion order and the scan never exits early:
//! when several templates match the same path, the one evaluated **last** wins.
//! Registering `/a/{x}` and then `/a/{y}` makes `/a/5` resolve to `/a/{y}`.

use crate::handler::ParamVec;

use super::table::{DynamicRoute, Segment};

/// Result of a successful template scan
#[derive(Debug)]
pub(crate) struct TemplateMatch<'a, H> {
    pub(crate) route: &'a DynamicRoute<H>,
    pub(crate) params: ParamVec,
}

/// Match one template against pre-split request segments
///
/// Returns the captured wildcard values, or `None` on the first mismatch.
fn match_template<H>(route: &DynamicRoute<H>, request: &[&str]) -> Option<ParamVec> {
    if route.segments.len() != request.len() {
        return None;
    }

    let mut params = ParamVec::new();
    for (segment, value) in route.segments.iter().zip(request) {
        match segment {
            Segment::Wildcard => params.push((*value).to_string()),
            Segment::Literal(literal) if &**literal == *value => {}
            Segment::Literal(_) => return None,
        }
    }
    Some(params)
}

/// Find the last template in `routes` matching the normalized `path`
pub(crate) fn find_dynamic<'a, H>(
    routes: &'a [DynamicRoute<H>],
    path: &str,
) -> Option<TemplateMatch<'a, H>> {
    let request: Vec<&str> = path.split('/').collect();

    let mut found = None;
    for route in routes {
        if let Some(params) = match_template(route, &request) {
            found = Some(TemplateMatch { route, params });
        }
    }
    found
}
