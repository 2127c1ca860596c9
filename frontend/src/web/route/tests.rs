use super::*;

// =========================================================
// 路径解析测试
// =========================================================

#[test]
fn test_from_path_static_routes() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
    assert_eq!(AppRoute::from_path("/get-help"), AppRoute::GetHelp);
    assert_eq!(AppRoute::from_path("/help-list"), AppRoute::HelpList);
    assert_eq!(AppRoute::from_path("/suppliers"), AppRoute::Suppliers);
    assert_eq!(AppRoute::from_path("/add-supplier"), AppRoute::AddSupplier);
    assert_eq!(AppRoute::from_path("/blog"), AppRoute::Blog);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/about"), AppRoute::About);
    assert_eq!(AppRoute::from_path("/contact"), AppRoute::Contact);
}

#[test]
fn test_from_path_parameterized_routes() {
    assert_eq!(
        AppRoute::from_path("/help/42"),
        AppRoute::HelpDetail("42".to_string())
    );
    assert_eq!(
        AppRoute::from_path("/blog/7"),
        AppRoute::BlogDetail("7".to_string())
    );
    assert_eq!(
        AppRoute::from_path("/blog/7/edit"),
        AppRoute::BlogEdit("7".to_string())
    );
}

#[test]
fn test_blog_create_wins_over_detail_param() {
    // "/blog/create" 是固定路由，不能被吞进 BlogDetail("create")
    assert_eq!(AppRoute::from_path("/blog/create"), AppRoute::BlogCreate);
}

#[test]
fn test_from_path_tolerates_trailing_slash() {
    assert_eq!(AppRoute::from_path("/get-help/"), AppRoute::GetHelp);
    assert_eq!(AppRoute::from_path("/help/42/"), AppRoute::HelpDetail("42".to_string()));
}

#[test]
fn test_unknown_path_is_not_found() {
    assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/help/1/2/3"), AppRoute::NotFound);
}

#[test]
fn test_to_path_round_trips() {
    let routes = [
        AppRoute::Home,
        AppRoute::GetHelp,
        AppRoute::HelpList,
        AppRoute::HelpDetail("9".to_string()),
        AppRoute::Suppliers,
        AppRoute::AddSupplier,
        AppRoute::Blog,
        AppRoute::BlogDetail("9".to_string()),
        AppRoute::BlogCreate,
        AppRoute::BlogEdit("9".to_string()),
        AppRoute::Login,
        AppRoute::About,
        AppRoute::Contact,
    ];

    for route in routes {
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
    }
}

// =========================================================
// 守卫谓词测试
// =========================================================

#[test]
fn test_protected_routes_require_auth() {
    assert!(AppRoute::Suppliers.requires_auth());
    assert!(AppRoute::AddSupplier.requires_auth());
    assert!(AppRoute::BlogCreate.requires_auth());
    assert!(AppRoute::BlogEdit("1".to_string()).requires_auth());
}

#[test]
fn test_public_routes_do_not_require_auth() {
    for route in [
        AppRoute::Home,
        AppRoute::GetHelp,
        AppRoute::HelpList,
        AppRoute::HelpDetail("1".to_string()),
        AppRoute::Blog,
        AppRoute::BlogDetail("1".to_string()),
        AppRoute::Login,
        AppRoute::About,
        AppRoute::Contact,
        AppRoute::NotFound,
    ] {
        assert!(!route.requires_auth(), "{route} should be public");
    }
}

#[test]
fn test_login_redirects_when_authenticated() {
    assert!(AppRoute::Login.should_redirect_when_authenticated());
    assert!(!AppRoute::Suppliers.should_redirect_when_authenticated());
}

#[test]
fn test_redirect_targets() {
    assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
    assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Suppliers);
}
