//! Declarative route table for the loan management UI.
//!
//! # Design
//! A pure data table plus a matcher, no I/O and no view state. Each entry
//! maps a path pattern to a view name; `:param` segments capture their value.
//! Captured params are forwarded in the match result only when the route
//! declares `props: true`, mirroring how the views receive them. Matching is
//! first-entry-wins, so static routes (`/solicitudes/crear`) are declared
//! before dynamic ones (`/solicitudes/:id`) that would shadow them.
//!
//! An unmatched path yields `None`; there is no fallback entry, and the
//! caller decides how to surface the not-found outcome.

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    /// Forward captured `:param` segments to the view.
    pub props: bool,
}

/// The full route table, in declaration order.
pub const ROUTES: &[Route] = &[
    Route { path: "/", name: "dashboard", props: false },
    Route { path: "/clientes", name: "cliente-list", props: false },
    Route { path: "/clientes/crear", name: "cliente-create", props: false },
    Route { path: "/clientes/editar/:id", name: "cliente-edit", props: true },
    Route { path: "/solicitudes/crear", name: "solicitud-create", props: false },
    Route { path: "/solicitudes", name: "solicitud-list", props: false },
    Route { path: "/solicitudes/:id", name: "solicitud-detail", props: true },
    Route { path: "/prestamos", name: "prestamo-list", props: false },
    Route { path: "/prestamos/:id/pagos/registrar", name: "pago-create", props: true },
];

/// A successful route match: the view name plus any captured params the
/// route forwards as props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub name: &'static str,
    pub params: Vec<(&'static str, &'a str)>,
}

/// Resolve `path` against the route table. Trailing slashes are ignored.
pub fn match_path(path: &str) -> Option<RouteMatch<'_>> {
    let segments: Vec<&str> = split_segments(path);
    ROUTES.iter().find_map(|route| {
        let params = match_route(route.path, &segments)?;
        Some(RouteMatch {
            name: route.name,
            params: if route.props { params } else { Vec::new() },
        })
    })
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Segment-wise match of `pattern` against `segments`, capturing `:param`
/// values. Returns `None` on any mismatch, including length.
fn match_route<'a>(
    pattern: &'static str,
    segments: &[&'a str],
) -> Option<Vec<(&'static str, &'a str)>> {
    let pattern_segments = split_segments(pattern);
    if pattern_segments.len() != segments.len() {
        return None;
    }
    let mut params = Vec::new();
    for (pat, seg) in pattern_segments.iter().zip(segments) {
        if let Some(param) = pat.strip_prefix(':') {
            params.push((param, *seg));
        } else if pat != seg {
            return None;
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> RouteMatch<'_> {
        match_path(path).unwrap_or_else(|| panic!("no route matched {path}"))
    }

    #[test]
    fn root_resolves_to_dashboard() {
        let m = resolve("/");
        assert_eq!(m.name, "dashboard");
        assert!(m.params.is_empty());
    }

    #[test]
    fn static_cliente_routes_resolve() {
        assert_eq!(resolve("/clientes").name, "cliente-list");
        assert_eq!(resolve("/clientes/crear").name, "cliente-create");
    }

    #[test]
    fn cliente_edit_forwards_the_id_prop() {
        let m = resolve("/clientes/editar/42");
        assert_eq!(m.name, "cliente-edit");
        assert_eq!(m.params, vec![("id", "42")]);
    }

    #[test]
    fn solicitud_crear_wins_over_the_dynamic_detail_route() {
        let m = resolve("/solicitudes/crear");
        assert_eq!(m.name, "solicitud-create");
        assert!(m.params.is_empty());
    }

    #[test]
    fn solicitud_detail_forwards_the_id_prop() {
        let m = resolve("/solicitudes/15");
        assert_eq!(m.name, "solicitud-detail");
        assert_eq!(m.params, vec![("id", "15")]);
    }

    #[test]
    fn pago_create_forwards_the_prestamo_id_prop() {
        let m = resolve("/prestamos/7/pagos/registrar");
        assert_eq!(m.name, "pago-create");
        assert_eq!(m.params, vec![("id", "7")]);
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(resolve("/clientes/").name, "cliente-list");
        assert_eq!(resolve("/clientes/editar/42/").params, vec![("id", "42")]);
    }

    #[test]
    fn unmatched_paths_yield_none() {
        assert!(match_path("/pagos").is_none());
        assert!(match_path("/clientes/editar").is_none());
        assert!(match_path("/prestamos/7/pagos").is_none());
        assert!(match_path("/no-such-view").is_none());
    }
}
