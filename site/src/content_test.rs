use super::*;

#[test]
fn donation_tiles_render_amounts_and_custom_slot() {
    let tiles: Vec<(String, &str)> = DONATION_TIERS.iter().map(|tier| donation_tile(*tier)).collect();
    assert_eq!(
        tiles,
        vec![
            ("$25".to_owned(), "DONATE_NOW"),
            ("$50".to_owned(), "DONATE_NOW"),
            ("$100".to_owned(), "DONATE_NOW"),
            ("...".to_owned(), "CUSTOM_AMOUNT"),
        ]
    );
}

#[test]
fn get_involved_anchors_point_at_page_sections() {
    let hrefs: Vec<&str> = GET_INVOLVED.iter().map(|a| a.href).collect();
    assert_eq!(hrefs, vec!["#volunteer-execute", "#submit-op", "#fund-relay", "#partner-req"]);
}

#[test]
fn every_project_lists_roles() {
    assert_eq!(ACTIVE_PROJECTS.len(), 3);
    assert!(ACTIVE_PROJECTS.iter().all(|p| !p.roles.is_empty()));
}

#[test]
fn footer_donate_link_targets_donation_section() {
    assert!(FOOTER_LINKS.contains(&("DONATE", LinkTarget::Anchor("#fund-relay"))));
}

#[test]
fn faq_lists_are_populated() {
    assert_eq!(HOME_FAQ.len(), 4);
    assert_eq!(ABOUT_FAQ.len(), 3);
    assert!(HOME_FAQ.iter().all(|e| e.title.starts_with("Q: ") && e.body.starts_with("A: ")));
}
