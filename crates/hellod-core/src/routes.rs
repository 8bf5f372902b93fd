//! Static route table.
//!
//! Routes are declared once, as data, and consumed by the server's router
//! builder. Keeping the table enumerable means the full GET surface can be
//! inspected and tested without binding a socket.

use crate::error::{HellodError, Result};

/// HTTP verb a route is declared for.
///
/// The demo surface is GET-only; the enum keeps declarations explicit and
/// leaves room for other verbs without changing the table shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMethod {
    Get,
}

impl RouteMethod {
    /// Uppercase wire name, as used in metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
        }
    }
}

/// One declared route: a literal path mapped to a fixed JSON payload.
#[derive(Debug, Clone, Copy)]
pub struct RouteSpec {
    pub method: RouteMethod,
    pub path: &'static str,
    /// Compact JSON, served byte-for-byte.
    pub payload: &'static str,
}

impl RouteSpec {
    /// Parse the payload literal for introspection.
    pub fn payload_value(&self) -> Result<serde_json::Value> {
        serde_json::from_str(self.payload).map_err(|e| {
            HellodError::Internal(format!("route {} payload is not valid JSON: {e}", self.path))
        })
    }
}

/// The declared table, in declaration order. Duplicates are legal here;
/// resolution happens in [`effective_routes`].
pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        method: RouteMethod::Get,
        path: "/",
        payload: r#"{"Hello":"World"}"#,
    },
    RouteSpec {
        method: RouteMethod::Get,
        path: "/test",
        payload: r#"{"Hello":"Test World"}"#,
    },
    RouteSpec {
        method: RouteMethod::Get,
        path: "/try",
        payload: r#"{"Hello":"Try World"}"#,
    },
    RouteSpec {
        method: RouteMethod::Get,
        path: "/work",
        payload: r#"{"Hello":"Work World"}"#,
    },
    RouteSpec {
        method: RouteMethod::Get,
        path: "/testing",
        payload: r#"{"Hello":"Testing World"}"#,
    },
    RouteSpec {
        method: RouteMethod::Get,
        path: "/ansible",
        payload: r#"{"Ansible":"Deployment using Ansible done successfully"}"#,
    },
];

/// The declared table after duplicate resolution.
pub fn effective_routes() -> Vec<&'static RouteSpec> {
    resolve_table(ROUTES)
}

/// Last-declaration-wins resolution: when two entries share (method, path),
/// the later one silently shadows the earlier, keeping the earlier slot's
/// position. The router registers the result, so shadowing is settled before
/// axum (which rejects duplicate registrations) ever sees the table.
pub fn resolve_table(table: &[RouteSpec]) -> Vec<&RouteSpec> {
    let mut out: Vec<&RouteSpec> = Vec::with_capacity(table.len());
    for spec in table {
        match out
            .iter_mut()
            .find(|s| s.method == spec.method && s.path == spec.path)
        {
            Some(slot) => *slot = spec,
            None => out.push(spec),
        }
    }
    out
}

/// Look up the effective entry for (method, path), if any.
pub fn lookup(method: RouteMethod, path: &str) -> Option<&'static RouteSpec> {
    effective_routes()
        .into_iter()
        .find(|s| s.method == method && s.path == path)
}
