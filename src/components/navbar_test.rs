use super::*;

#[test]
fn home_link_matches_only_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/dashboard", "/"));
}

#[test]
fn dashboard_link_matches_with_or_without_trailing_slash() {
    assert!(is_active("/dashboard", "/dashboard"));
    assert!(is_active("/dashboard/", "/dashboard"));
    assert!(!is_active("/plans/new", "/dashboard"));
}

#[test]
fn greeting_includes_name() {
    assert_eq!(greeting("a@b.com"), "Hello a@b.com");
}

#[test]
fn nav_links_start_with_home() {
    assert_eq!(NAV_LINKS[0], ("/", "Home"));
    assert_eq!(NAV_LINKS.len(), 2);
}
