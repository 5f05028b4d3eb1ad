//! Static site content for Hotel TTC Vrchlabí.
//!
//! Everything here is hand-authored configuration compiled into the binary:
//! the renderer reads it, nothing mutates it, and no validation runs at
//! runtime (the integration tests cross-check the invariants instead).
//! Image paths resolve against the static asset host; icon URLs point at the
//! Tabler/Heroicons CDNs.

/// A single navigation entry. `href` is always a same-page anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Main navigation, iterated in this order by both the desktop nav and the
/// mobile drawer.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "#sluzby",
        label: "Služby",
    },
    NavLink {
        href: "#ubytovani",
        label: "Ubytování",
    },
    NavLink {
        href: "#balicky",
        label: "Pobytové balíčky",
    },
    NavLink {
        href: "#kontakt",
        label: "Kontakt",
    },
];

/// Anchor ids the section components render, in page order. External deep
/// links depend on these exact ids, so treat them as a public contract.
pub const SECTION_IDS: &[&str] = &["sluzby", "ubytovani", "balicky", "kontakt"];

pub const LOGO_SRC: &str = "/images/logo-hotel-ttc-restaurace.png";
pub const LOGO_ALT: &str = "Logo Hotel TTC";

/// Icon URLs used across the page.
pub mod icons {
    pub const MENU: &str = "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/menu-2.svg";
    pub const CLOSE: &str = "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/x.svg";
    pub const BED: &str = "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/bed.svg";
    pub const KITCHEN: &str =
        "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/tools-kitchen-2.svg";
    pub const SPA: &str = "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/spa.svg";
    pub const GAMEPAD: &str =
        "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/device-gamepad-2.svg";
    pub const MAP_PIN: &str =
        "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/map-pin.svg";
    pub const PHONE: &str = "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/phone.svg";
    pub const MOBILE: &str =
        "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/device-mobile.svg";
    pub const MAIL: &str = "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/mail.svg";
    pub const FACEBOOK: &str =
        "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/brand-facebook.svg";
    pub const CHECK: &str = "https://heroicons.com/24/solid/check.svg";
    pub const CHECK_CIRCLE: &str = "https://heroicons.com/24/solid/check-circle.svg";

    #[cfg(test)]
    mod tests {
        #[test]
        fn icon_urls_stay_on_known_cdns() {
            let all = [
                super::MENU,
                super::CLOSE,
                super::BED,
                super::KITCHEN,
                super::SPA,
                super::GAMEPAD,
                super::MAP_PIN,
                super::PHONE,
                super::MOBILE,
                super::MAIL,
                super::FACEBOOK,
                super::CHECK,
                super::CHECK_CIRCLE,
            ];
            for url in all {
                assert!(
                    url.starts_with("https://cdn.jsdelivr.net/npm/@tabler/icons")
                        || url.starts_with("https://heroicons.com/24/solid"),
                    "unexpected icon host: {url}"
                );
                assert!(url.ends_with(".svg"), "icon is not an svg: {url}");
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroContent {
    pub image: &'static str,
    pub image_alt: &'static str,
    pub heading: &'static str,
    pub lede: &'static str,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
}

pub const HERO: HeroContent = HeroContent {
    image: "/images/hero-hotel-exterior-winter.jpg",
    image_alt: "Exteriér Hotelu TTC v zimě",
    heading: "Váš Únik do Srdce Krkonoš",
    lede: "Objevte komfort, skvělou gastronomii a relaxaci v Hotelu TTC, jen pár kroků od centra Vrchlabí a na dosah krásám hor.",
    primary_cta: CallToAction {
        href: "#sluzby",
        label: "Prozkoumat Služby",
    },
    secondary_cta: CallToAction {
        href: "#ubytovani",
        label: "Naše Pokoje",
    },
};

/// Heading block shared by the services, rooms and packages sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionIntro {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub lede: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const SERVICES_INTRO: SectionIntro = SectionIntro {
    eyebrow: "Komplexní péče",
    title: "Vše pod jednou střechou",
    lede: "Ať už hledáte aktivní odpočinek, relaxaci, gurmánský zážitek nebo místo pro vaši akci, u nás naleznete vše potřebné.",
};

pub const SERVICE_CARDS: &[ServiceCard] = &[
    ServiceCard {
        icon: icons::BED,
        title: "Stylové Ubytování",
        body: "Unikátní mezonetové pokoje poskytují maximální komfort a soukromí pro páry i rodiny.",
    },
    ServiceCard {
        icon: icons::KITCHEN,
        title: "Restaurace & Bar",
        body: "Ochutnejte speciality naší kuchyně v restauraci s námořní tématikou nebo si užijte drink na terase.",
    },
    ServiceCard {
        icon: icons::SPA,
        title: "Wellness & Masáže",
        body: "Dopřejte si zasloužený odpočinek v naší privátní wellness zóně s vířivkou, saunami a relaxačními masážemi.",
    },
    ServiceCard {
        icon: icons::GAMEPAD,
        title: "Sport & Konference",
        body: "Využijte naši velkou tělocvičnu pro stolní tenis, soustředění nebo uspořádejte firemní akci v našich prostorách.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomsContent {
    pub intro: SectionIntro,
    pub features: &'static [&'static str],
    pub image: &'static str,
    pub image_alt: &'static str,
}

pub const ROOMS: RoomsContent = RoomsContent {
    intro: SectionIntro {
        eyebrow: "Domov daleko od domova",
        title: "Mezonetové pokoje pro Váš komfort",
        lede: "Našich 12 hotelových pokojů, snadno dostupných výtahem, je navrženo pro vaše maximální pohodlí. Unikátní mezonetové uspořádání nabízí oddělené prostory pro spánek a odpočinek, což ocení rodiny i páry hledající více prostoru.",
    },
    features: &[
        "Spodní podlaží se 2 lůžky a horní mezonet se 2 komfortními přistýlkami.",
        "Moderní koupelna, satelitní TV, Wi-Fi připojení a lednička.",
        "Příjemný interiér s dřevěnými prvky a kvalitními materiály vytváří útulnou atmosféru.",
    ],
    image: "/images/hero-bedroom-interior-bed.jpg",
    image_alt: "Interiér hotelového pokoje",
};

/// Gallery images come in two crops arranged in a loose masonry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    /// 4:5, the taller crop.
    Portrait,
    /// 4:3.
    Landscape,
}

impl Aspect {
    pub fn class(self) -> &'static str {
        match self {
            Aspect::Portrait => "aspect-[4/5]",
            Aspect::Landscape => "aspect-[4/3]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub aspect: Aspect,
}

pub const GALLERY_TITLE: &str = "Nahlédněte do našeho hotelu";
pub const GALLERY_LEDE: &str = "Prohlédněte si prostory, které pro vás s péčí připravujeme.";

/// Four columns of two images each; column order matters for the layout.
pub const GALLERY_COLUMNS: &[&[GalleryImage]] = &[
    &[
        GalleryImage {
            src: "/images/gallery-bedroom-mezzanine-lower.jpg",
            alt: "Spodní část mezonetového pokoje",
            aspect: Aspect::Portrait,
        },
        GalleryImage {
            src: "/images/gallery-restaurant-burger-fries.jpg",
            alt: "Burger s hranolky",
            aspect: Aspect::Landscape,
        },
    ],
    &[
        GalleryImage {
            src: "/images/hero-restaurant-bar.jpg",
            alt: "Bar v restauraci",
            aspect: Aspect::Landscape,
        },
        GalleryImage {
            src: "/images/gallery-restaurant-dining-area-wide.jpg",
            alt: "Jídelní část restaurace",
            aspect: Aspect::Portrait,
        },
    ],
    &[
        GalleryImage {
            src: "/images/gallery-conference-room-event-setup.jpg",
            alt: "Sál připravený na akci",
            aspect: Aspect::Portrait,
        },
        GalleryImage {
            src: "/images/gallery-bathroom-bathtub.jpg",
            alt: "Koupelna s vanou",
            aspect: Aspect::Landscape,
        },
    ],
    &[
        GalleryImage {
            src: "/images/hero-hotel-terrace-summer.jpg",
            alt: "Letní terasa hotelu",
            aspect: Aspect::Landscape,
        },
        GalleryImage {
            src: "/images/gallery-bedroom-mezzanine-upper.jpg",
            alt: "Horní část mezonetového pokoje",
            aspect: Aspect::Portrait,
        },
    ],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub name: &'static str,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub price_czk: u32,
    pub price_note: &'static str,
    /// Ribbon shown above the card, e.g. "Nejoblíbenější".
    pub badge: Option<&'static str>,
}

pub const PACKAGES_INTRO: SectionIntro = SectionIntro {
    eyebrow: "Zvýhodněné nabídky",
    title: "Naše pobytové balíčky",
    lede: "Vyberte si jeden z našich balíčků a užijte si pobyt plný zážitků za skvělou cenu.",
};

pub const PACKAGES: &[Package] = &[
    Package {
        name: "Wellness Pobyt",
        tagline: "Dokonalý relax pro tělo i duši.",
        features: &[
            "2x privátní vstup do wellness (60 min)",
            "2x snídaně formou bufetu",
            "Neomezený vstup do tělocvičny (stolní tenis)",
        ],
        price_czk: 4999,
        price_note: "pro 2 osoby na 2 noci",
        badge: None,
    },
    Package {
        name: "Relax Pobyt",
        tagline: "Uvolnění a regenerace s profesionální péčí.",
        features: &[
            "2x relaxační masáž (60 min)",
            "2x snídaně formou bufetu",
            "Neomezený vstup do tělocvičny (stolní tenis)",
        ],
        price_czk: 4999,
        price_note: "pro 2 osoby na 2 noci",
        badge: Some("Nejoblíbenější"),
    },
    Package {
        name: "Pobyt s Polopenzí",
        tagline: "Gurmánský zážitek bez starostí.",
        features: &[
            "2x polopenze (večeře o 3 chodech)",
            "2x snídaně formou bufetu",
            "Neomezený vstup do tělocvičny (stolní tenis)",
        ],
        price_czk: 4999,
        price_note: "pro 2 osoby na 2 noci",
        badge: None,
    },
];

pub const PACKAGES_FOOTNOTE: &str =
    "Rezervace balíčků probíhají e-mailem. Všechny balíčky zahrnují parkování zdarma.";

/// One row in the contact block. `href` is `None` for plain text (address),
/// otherwise a `tel:`/`mailto:`/`https:` URI rendered as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub href: Option<&'static str>,
    pub label: &'static str,
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactContent {
    pub title: &'static str,
    pub lede: &'static str,
    pub hotel_name: &'static str,
    pub operator: &'static str,
    pub channels: &'static [ContactChannel],
}

pub const CONTACT: ContactContent = ContactContent {
    title: "Kontaktujte nás",
    lede: "Máte dotaz nebo si přejete rezervovat pobyt? Jsme tu pro vás. Těšíme se na vaši návštěvu!",
    hotel_name: "Hotel TTC Vrchlabí",
    operator: "provozují manželé Tomášovi",
    channels: &[
        ContactChannel {
            icon: icons::MAP_PIN,
            href: None,
            label: "Tkalcovská 357, 543 01 Vrchlabí",
            note: None,
        },
        ContactChannel {
            icon: icons::PHONE,
            href: Some("tel:+420499775112"),
            label: "+420 499 775 112",
            note: None,
        },
        ContactChannel {
            icon: icons::MOBILE,
            href: Some("tel:+420724801745"),
            label: "+420 724 801 745",
            note: Some("(Wellness, masáže, rezervace)"),
        },
        ContactChannel {
            icon: icons::MAIL,
            href: Some("mailto:hotel@hotel-ttc.cz"),
            label: "hotel@hotel-ttc.cz",
            note: None,
        },
        ContactChannel {
            icon: icons::FACEBOOK,
            href: Some("https://www.facebook.com/HotelTTC"),
            label: "Sledujte nás na Facebooku",
            note: None,
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursEntry {
    pub facility: &'static str,
    pub hours: &'static str,
    pub note: Option<&'static str>,
}

pub const HOURS_TITLE: &str = "Provozní doba";

pub const OPENING_HOURS: &[HoursEntry] = &[
    HoursEntry {
        facility: "Recepce",
        hours: "7:00 – 24:00",
        note: None,
    },
    HoursEntry {
        facility: "Restaurace & Terasa",
        hours: "17:00 – 21:00",
        note: Some("Snídaně: 7:30 – 9:30"),
    },
    HoursEntry {
        facility: "Wellness",
        hours: "13:00 – 22:00 (nutná rezervace)",
        note: None,
    },
    HoursEntry {
        facility: "Masáže",
        hours: "Dle telefonických objednávek",
        note: None,
    },
];

pub const FOOTER_RIGHTS: &str = "Hotel TTC Vrchlabí. Všechna práva vyhrazena.";
pub const FOOTER_CREDIT_PREFIX: &str = "Vytvořeno s láskou od";
pub const FOOTER_CREDIT_LABEL: &str = "DigitalFusion";
pub const FOOTER_CREDIT_URL: &str = "https://digitalfusion.cz";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_point_at_rendered_sections() {
        for link in NAV_LINKS {
            let id = link
                .href
                .strip_prefix('#')
                .unwrap_or_else(|| panic!("nav href `{}` is not an anchor", link.href));
            assert!(
                SECTION_IDS.contains(&id),
                "nav href `{}` has no matching section id",
                link.href
            );
            assert!(!link.label.trim().is_empty());
        }
    }

    #[test]
    fn nav_links_are_unique() {
        for (i, link) in NAV_LINKS.iter().enumerate() {
            for other in &NAV_LINKS[i + 1..] {
                assert_ne!(link.href, other.href, "duplicate nav href");
            }
        }
    }

    #[test]
    fn hero_ctas_target_known_anchors() {
        for cta in [HERO.primary_cta, HERO.secondary_cta] {
            let id = cta.href.strip_prefix('#').expect("hero CTA is an anchor");
            assert!(SECTION_IDS.contains(&id), "hero CTA `{}` dangles", cta.href);
        }
    }

    #[test]
    fn gallery_is_four_columns_of_two() {
        assert_eq!(GALLERY_COLUMNS.len(), 4);
        for column in GALLERY_COLUMNS {
            assert_eq!(column.len(), 2);
            for image in *column {
                assert!(image.src.starts_with("/images/"), "gallery src `{}`", image.src);
                assert!(!image.alt.trim().is_empty(), "gallery alt missing for {}", image.src);
            }
        }
    }

    #[test]
    fn exactly_one_package_carries_a_badge() {
        let badged = PACKAGES.iter().filter(|p| p.badge.is_some()).count();
        assert_eq!(badged, 1);
        for package in PACKAGES {
            assert!(!package.features.is_empty(), "{} has no features", package.name);
            assert!(package.price_czk > 0);
        }
    }

    #[test]
    fn contact_channel_hrefs_use_expected_schemes() {
        for channel in CONTACT.channels {
            if let Some(href) = channel.href {
                assert!(
                    href.starts_with("tel:")
                        || href.starts_with("mailto:")
                        || href.starts_with("https://"),
                    "unexpected contact href `{href}`"
                );
            }
        }
    }
}
