//! Static page content: security packages, services, highlights and
//! contact details.
//!
//! Everything here is compile-time data and never mutated.

use crate::config::PLACEHOLDER_BASE;

/// A predefined security package shown in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price_range: &'static str,
    /// Path under `/images` or absolute URL
    pub image: Option<&'static str>,
    pub badge: Option<&'static str>,
}

impl Product {
    /// DOM id of the package card.
    pub fn anchor(&self) -> String {
        format!("product-{}", self.id)
    }

    /// Image to request first: the configured one, else the placeholder.
    pub fn image_src(&self) -> String {
        self.image
            .map(str::to_string)
            .unwrap_or_else(|| placeholder_url(self.title))
    }
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "basic",
        title: "Alap Biztonság",
        description: "Belépő szintű védelem kisebb lakásokhoz. Telepíthető Zigbee-s (vezeték nélküli) és hagyományos vezetékes érzékelőkkel is.",
        features: &[
            "Központi vezérlő (Zigbee vagy vezetékes opció)",
            "1x mozgásérzékelő",
            "1x ajtó-/ablakérzékelő",
            "Egyszerű telefonos értesítések",
        ],
        price_range: "200–300 ezer Ft",
        image: Some("/images/basic-security.jpg"),
        badge: None,
    },
    Product {
        id: "simple",
        title: "Családi Biztonság",
        description: "Kiegyensúlyozott védelem családi házakhoz — hibrid (Zigbee + vezetékes) megoldással, bővíthető érzékelőkkel.",
        features: &[
            "Zigbee + vezetékes hibrid kialakítás",
            "Több mozgásérzékelő",
            "Ajtó- és ablakérzékelők",
            "Alap automatizálás és távoli hozzáférés",
        ],
        price_range: "400–500 ezer Ft",
        image: Some("/images/simple-security.jpg"),
        badge: None,
    },
    Product {
        id: "strong",
        title: "Teljes Védelem",
        description: "Professzionális, bővíthető rendszer teljes ingatlanvédelemhez. Vezetékes és vezeték nélküli szenzorok kombinálhatók.",
        features: &[
            "Teljes érzékelő lefedettség",
            "Vezetékes + vezeték nélküli szenzorok",
            "Haladó automatizmusok, sziréna és riasztási logika",
            "Skálázható, igény szerint bővíthető",
        ],
        price_range: "500–800 ezer Ft (érzékelők számától függ)",
        image: Some("/images/strong-security.jpg"),
        badge: None,
    },
];

/// A service card in the services grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🌡️",
        title: "Fűtés- és Hűtésvezérlés",
        description: "Okos termosztátok és klímavezérlés — helyi vezérlés vagy távoli elérés.",
    },
    Service {
        icon: "⚡",
        title: "Okosotthon Automatizálás",
        description: "Világítás, kapcsolók, szenzorok, automatizmusok — Zigbee és vezetékes integráció.",
    },
    Service {
        icon: "🛡️",
        title: "Biztonsági Rendszerek",
        description: "Kamerák, mozgásérzékelők, riasztók — vezetékes és Zigbee eszközök telepítése és konfigurálása.",
    },
];

/// Services listed in the footer.
pub const FOOTER_SERVICES: &[&str] = &[
    "Fűtés- és Hűtésvezérlés",
    "Okosotthon Automatizálás",
    "Biztonsági Rendszerek (Zigbee & vezetékes)",
    "Zigbee Eszköz Telepítés",
];

/// "Why us" entry in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Piacvezető árak",
        description: "Verhetetlen árak, kompromisszum nélkül a minőségben",
    },
    Highlight {
        title: "Helyi Szakértelem",
        description: "Szegeden alapítva, büszkén szolgálva a régiót",
    },
    Highlight {
        title: "Megbízható Technológia",
        description: "Zigbee és vezetékes rendszerek a nagy megbízhatóságért",
    },
    Highlight {
        title: "Személyre Szabott Szolgáltatás",
        description: "Közvetlen kommunikáció a tulajdonosokkal",
    },
];

/// Paragraphs of the "Családi Kiválóság" story.
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Szegeden élő apa-fia csapat vagyunk, akik szenvedéllyel hozzák el az okosotthon-technológiát minden háztartásba és vállalkozásba.",
    "Küldetésünk egyszerű: a legköltséghatékonyabb okosotthon- és biztonsági megoldásokat nyújtani kompromisszumok nélkül a minőségben. Mind Zigbee-s (vezeték nélküli), mind vezetékes rendszereket telepítünk.",
    "Velünk személyre szabott szolgáltatást, helyi szakértelmet és azt a biztonságot kapja, amit egy megbízható családi vállalkozás biztosít.",
];

/// One line of the contact details block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub heading: &'static str,
    pub value: &'static str,
    pub note: Option<&'static str>,
    pub href: Option<&'static str>,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: "📞",
        heading: "Telefon",
        value: "+36 20 454 5501",
        note: None,
        href: Some("tel:+36204545501"),
    },
    ContactDetail {
        icon: "✉️",
        heading: "Email",
        value: "info@okosor.hu",
        note: None,
        href: Some("mailto:info@okosor.hu"),
    },
    ContactDetail {
        icon: "📍",
        heading: "Cím",
        value: "Szeged, Magyarország",
        note: Some("Szeged és környéke kiszolgálása"),
        href: None,
    },
];

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Placeholder image URL labeled with `label`.
///
/// The label is percent-encoded over its UTF-8 bytes with the same
/// unreserved set as JavaScript's `encodeURIComponent`.
pub fn placeholder_url(label: &str) -> String {
    let mut url = String::with_capacity(PLACEHOLDER_BASE.len() + label.len() * 3);
    url.push_str(PLACEHOLDER_BASE);

    for byte in label.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => url.push(char::from(byte)),
            _ => {
                url.push('%');
                url.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
                url.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
            }
        }
    }

    url
}
