use std::collections::BTreeSet;

use ui::content;

/// Navigation consistency test.
/// The anchor ids in `SECTION_IDS` are a public contract: the nav (desktop
/// and drawer both iterate `NAV_LINKS`), the hero CTAs and any external deep
/// link depend on them. This cross-checks the content consts so a renamed
/// section id fails the build instead of shipping a dangling `#anchor`.
#[test]
fn every_nav_link_resolves_to_a_section() {
    let sections: BTreeSet<&str> = content::SECTION_IDS.iter().copied().collect();
    assert_eq!(
        sections.len(),
        content::SECTION_IDS.len(),
        "duplicate section id"
    );

    for link in content::NAV_LINKS {
        let id = link
            .href
            .strip_prefix('#')
            .unwrap_or_else(|| panic!("nav href `{}` must be a same-page anchor", link.href));
        assert!(
            sections.contains(id),
            "nav entry `{}` points at missing section `#{id}`",
            link.label
        );
    }
}

#[test]
fn nav_follows_page_order() {
    // NAV_LINKS and SECTION_IDS enumerate the same anchors in the same order;
    // the drawer shares NAV_LINKS so this covers both menus.
    let nav_ids: Vec<&str> = content::NAV_LINKS
        .iter()
        .map(|l| l.href.trim_start_matches('#'))
        .collect();
    assert_eq!(nav_ids, content::SECTION_IDS);
}

#[test]
fn hero_ctas_and_reservation_target_sections() {
    for href in [
        content::HERO.primary_cta.href,
        content::HERO.secondary_cta.href,
        "#kontakt", // both reservation buttons
    ] {
        let id = href.strip_prefix('#').expect("CTA must be an anchor");
        assert!(
            content::SECTION_IDS.contains(&id),
            "CTA `{href}` has no section"
        );
    }
}

#[test]
fn contact_channels_cover_the_outbound_surfaces() {
    // Booking runs over e-mail, so the page must expose phone, mail and the
    // social link alongside the plain-text address.
    let hrefs: Vec<&str> = content::CONTACT.channels.iter().filter_map(|c| c.href).collect();
    assert!(hrefs.iter().filter(|h| h.starts_with("tel:")).count() >= 2);
    assert_eq!(
        hrefs.iter().filter(|h| h.starts_with("mailto:")).count(),
        1
    );
    assert_eq!(
        hrefs.iter().filter(|h| h.starts_with("https://")).count(),
        1
    );
    assert!(content::CONTACT
        .channels
        .iter()
        .any(|c| c.href.is_none()), "address row should be plain text");
}
