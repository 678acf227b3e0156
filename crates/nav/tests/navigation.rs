//! End-to-end navigation scenarios over a realistic restaurant catalog.

use comanda_auth::{PrincipalId, SessionState};
use comanda_nav::{RouteCatalog, SIGN_IN_ROUTE, build_menu, evaluate};

fn catalog() -> RouteCatalog {
    comanda_observability::init();

    let source = r#"[
        {
            "path": "mesas",
            "menu": { "label": "Mesas", "icon": "table", "displayOrder": 1, "hasSubmenu": true }
        },
        {
            "path": "mesas/listado",
            "menu": { "label": "Listado", "icon": "list" },
            "parentModule": "mesas"
        },
        {
            "path": "mesas/asignar",
            "menu": { "label": "Asignar mesa", "icon": "assign" },
            "parentModule": "mesas"
        },
        {
            "path": "reservas",
            "menu": { "label": "Reservas", "icon": "calendar", "displayOrder": 2 },
            "requiredCapability": "viewReservations"
        },
        {
            "path": "productos",
            "menu": { "label": "Productos", "icon": "dish", "displayOrder": 3 }
        },
        {
            "path": "usuarios",
            "menu": { "label": "Usuarios", "icon": "people", "displayOrder": 4, "hasSubmenu": true }
        },
        {
            "path": "usuarios/listado",
            "menu": { "label": "Listado", "icon": "list" },
            "parentModule": "usuarios"
        },
        {
            "path": "usuarios/roles",
            "menu": { "label": "Roles y cuentas", "icon": "shield" },
            "parentModule": "usuarios",
            "requiredRoles": ["administrator"],
            "requiredCapability": "manageAccounts"
        },
        {
            "path": "reportes",
            "menu": { "label": "Reportes", "icon": "chart", "displayOrder": 5 }
        },
        {
            "path": "perfil",
            "menu": { "label": "Mi perfil", "icon": "person" }
        }
    ]"#;

    RouteCatalog::from_json(source).expect("catalog fixture must validate")
}

fn signed_in(role_name: &str) -> SessionState {
    SessionState::signed_in(PrincipalId::new(), role_name)
}

#[test]
fn administrator_sees_every_visible_entry() {
    let catalog = catalog();
    let menu = build_menu(&catalog, &signed_in("administrator"));

    let ids: Vec<&str> = menu.iter().map(|node| node.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["mesas", "reservas", "productos", "usuarios", "reportes", "perfil"]
    );

    let usuarios = menu.iter().find(|node| node.id == "usuarios").unwrap();
    assert!(
        usuarios
            .children
            .iter()
            .any(|child| child.target_route == "usuarios/roles"),
        "account management child must be present for the administrator"
    );
}

#[test]
fn kitchen_is_denied_reservations_at_the_guard() {
    let catalog = catalog();
    let reservas = catalog.find("reservas").unwrap();

    let decision = evaluate(reservas, &signed_in("kitchen"));
    assert!(!decision.allowed);
    assert_eq!(decision.redirect_to.as_deref(), Some(SIGN_IN_ROUTE));
}

#[test]
fn kitchen_menu_matches_its_guard_outcomes() {
    let catalog = catalog();
    let menu = build_menu(&catalog, &signed_in("cocinero"));

    let ids: Vec<&str> = menu.iter().map(|node| node.id.as_str()).collect();
    assert_eq!(ids, vec!["productos", "perfil"]);
}

#[test]
fn customer_keeps_reservations_and_loses_staff_modules() {
    let catalog = catalog();
    let session = signed_in("cliente");
    let menu = build_menu(&catalog, &session);

    let ids: Vec<&str> = menu.iter().map(|node| node.id.as_str()).collect();
    assert_eq!(ids, vec!["reservas", "perfil"]);

    assert!(evaluate(catalog.find("reservas").unwrap(), &session).allowed);
    assert!(!evaluate(catalog.find("mesas").unwrap(), &session).allowed);
}

#[test]
fn anonymous_caller_gets_no_menu_and_no_entry() {
    let catalog = catalog();
    let session = SessionState::anonymous();

    assert!(build_menu(&catalog, &session).is_empty());
    for entry in catalog.entries() {
        let decision = evaluate(entry, &session);
        assert!(!decision.allowed);
        assert_eq!(decision.redirect_to.as_deref(), Some(SIGN_IN_ROUTE));
    }
}

/// Every route the menu surfaces without explicit role/capability
/// requirements must be enterable through the guard for the same session.
#[test]
fn menu_visibility_implies_guard_allowance() {
    let catalog = catalog();

    for role_name in ["administrator", "gerente", "mesero", "cocinero", "cliente"] {
        let session = signed_in(role_name);
        for node in build_menu(&catalog, &session) {
            let mut routes = vec![node.target_route.clone()];
            routes.extend(node.children.iter().map(|child| child.target_route.clone()));

            for route in routes {
                let entry = catalog.find(&route).expect("menu routes come from the catalog");
                if entry.required_roles.is_some() || entry.required_capability.is_some() {
                    continue;
                }
                assert!(
                    evaluate(entry, &session).allowed,
                    "menu shows '{route}' to {role_name} but the guard denies it"
                );
            }
        }
    }
}

#[test]
fn rebuilding_for_the_same_session_is_idempotent() {
    let catalog = catalog();
    let session = signed_in("gerente");
    assert_eq!(build_menu(&catalog, &session), build_menu(&catalog, &session));
}
