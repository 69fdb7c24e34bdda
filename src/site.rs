//! Static business data: profile, service catalog, work pages, serviced zips.
//!
//! Nothing here is mutable or persisted. Handlers serialize these records
//! straight into API responses.

use serde::Serialize;

// =============================================================================
// BUSINESS PROFILE
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BusinessProfile {
    pub name: &'static str,
    pub phone_display: &'static str,
    pub email: &'static str,
    pub service_area: &'static str,
}

impl BusinessProfile {
    /// `tel:`-ready phone number.
    #[must_use]
    pub fn phone_tel(&self) -> String {
        format_phone_for_tel(self.phone_display)
    }
}

pub const BUSINESS: BusinessProfile = BusinessProfile {
    name: "Magic Glove Window Cleaning",
    phone_display: "(818) 942-4177",
    email: "Armando29gonzalez@gmail.com",
    service_area: "Los Angeles & San Bernardino Counties",
};

/// Keep digits only and prefix the US country code. Empty when no digits.
#[must_use]
pub fn format_phone_for_tel(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    format!("+1{digits}")
}

// =============================================================================
// SERVICE CATALOG
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Windows,
    Storefront,
    Solar,
    Tint,
}

impl ServiceKind {
    pub const ALL: [Self; 4] = [Self::Windows, Self::Storefront, Self::Solar, Self::Tint];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Storefront => "storefront",
            Self::Solar => "solar",
            Self::Tint => "tint",
        }
    }

    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::Windows => "/work/windows",
            Self::Storefront => "/work/storefront",
            Self::Solar => "/work/solar",
            Self::Tint => "/work/tint",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeoBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecentJob {
    pub title: &'static str,
    pub area: &'static str,
}

/// Content of the `#/work/<service>` page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorkPage {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub seo_title: &'static str,
    pub seo_blocks: &'static [SeoBlock],
    pub recent: &'static [RecentJob],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub kind: ServiceKind,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub route: &'static str,
    pub work: WorkPage,
}

/// Catalog lookup by service kind.
#[must_use]
pub fn service(kind: ServiceKind) -> &'static Service {
    match kind {
        ServiceKind::Windows => &SERVICES[0],
        ServiceKind::Storefront => &SERVICES[1],
        ServiceKind::Solar => &SERVICES[2],
        ServiceKind::Tint => &SERVICES[3],
    }
}

const fn seo(heading: &'static str, body: &'static str) -> SeoBlock {
    SeoBlock { heading: Some(heading), body }
}

const fn intro(body: &'static str) -> SeoBlock {
    SeoBlock { heading: None, body }
}

const fn job(title: &'static str, area: &'static str) -> RecentJob {
    RecentJob { title, area }
}

/// Ordered service catalog, as shown on the home page.
pub static SERVICES: [Service; 4] = [
    Service {
        kind: ServiceKind::Windows,
        title: "Residential Window Cleaning",
        description: "Interior + exterior options with a premium finish.",
        features: &["Streak-free glass", "Screens (optional)", "Track/sill detailing (optional)"],
        route: "/work/windows",
        work: WorkPage {
            heading: "Window Cleaning — See Our Work",
            subtitle: "Interior & exterior window cleaning with a premium finish, clear communication, and fair pricing across Los Angeles.",
            seo_title: "Interior & Exterior Window Washing Services",
            seo_blocks: &[
                intro(
                    "At Magic Glove Window Cleaning, we provide exterior and interior window cleaning across Los Angeles & surrounding areas. Homeowners choose us because we treat every home with care, communicate clearly, and aim for a finish you can feel proud of.",
                ),
                seo(
                    "Why regular window cleaning matters",
                    "Over time, dust, grime, and buildup can dull your view and make your home feel less clean overall. Keeping windows maintained helps protect your glass, supports a brighter interior, and can help prevent long-term issues that lead to costly repairs.",
                ),
                seo(
                    "Our exterior window cleaning approach",
                    "We use safe, professional methods designed for the home. Our goal is a consistent, streak-free finish—then we do a final check to make sure it looks right from the inside too. The difference is in the details.",
                ),
                seo(
                    "Our interior window cleaning approach",
                    "When we work inside your home, we treat your space with respect. We take care around floors and furniture, work clean, and inspect our results before we leave. If you’re not happy, we’re not done.",
                ),
                seo(
                    "How often should windows be cleaned?",
                    "Most LA homeowners benefit from cleaning twice a year—spring and fall. Some prefer quarterly for a consistently sharp look, especially in high-dust areas or near busy streets.",
                ),
            ],
            recent: &[
                job("Full exterior wash + detail", "Granada Hills"),
                job("Interior + exterior (2-story)", "Northridge"),
                job("Water spot improvement (options)", "Porter Ranch"),
            ],
        },
    },
    Service {
        kind: ServiceKind::Storefront,
        title: "Commercial & Storefront Cleaning",
        description: "Reliable routes that keep your business sharp.",
        features: &["Weekly/bi-weekly/monthly plans", "Early-morning options", "Professional invoicing"],
        route: "/work/storefront",
        work: WorkPage {
            heading: "Storefront Cleaning — See Our Work",
            subtitle: "Reliable storefront maintenance plans that keep your business looking sharp week after week.",
            seo_title: "Storefront Window Cleaning & Maintenance",
            seo_blocks: &[
                intro(
                    "For storefronts and small businesses, clean glass is part of your brand. Magic Glove provides dependable routes with clear communication, on-time service, and a finish that matches the quality of your business.",
                ),
                seo(
                    "Why storefront cleaning is needed",
                    "Foot traffic, dust, fingerprints, and weather can make glass look dull fast. Regular maintenance keeps your storefront inviting, professional, and consistent—especially during peak hours and high-visibility seasons.",
                ),
                seo(
                    "Our route options",
                    "We offer weekly, bi-weekly, and monthly maintenance schedules. We can plan early-morning service so your business is ready before customers arrive.",
                ),
                seo(
                    "A smoother process",
                    "Professional invoicing, reminders, and reliable service are the standard. Our goal is to make storefront maintenance easy—so you never have to chase it.",
                ),
            ],
            recent: &[
                job("Weekly storefront maintenance", "Reseda"),
                job("Route cleanup + detail finish", "Van Nuys"),
                job("Morning clean before opening", "Burbank"),
            ],
        },
    },
    Service {
        kind: ServiceKind::Solar,
        title: "Solar Panel Cleaning",
        description: "Safe methods designed for panels.",
        features: &["Soft brush + purified water", "Seasonal maintenance", "Before/after photos (optional)"],
        route: "/work/solar",
        work: WorkPage {
            heading: "Solar Panel Cleaning — See Our Work",
            subtitle: "Safe cleaning methods designed for panels. A clean surface can help panels perform closer to their best.",
            seo_title: "Solar Panel Cleaning Services",
            seo_blocks: &[
                intro(
                    "Solar panels collect dust, pollen, and debris that can reduce how clean they look—and potentially how efficiently they operate. Magic Glove uses careful methods designed for solar surfaces, with attention to safety and detail.",
                ),
                seo(
                    "Why solar cleaning matters",
                    "Even a light film of dust can build up over time. Many homeowners choose seasonal cleanings—especially before high-sun months—to keep panels looking sharp and performing consistently.",
                ),
                seo(
                    "Our approach",
                    "We use safe, low-abrasion methods and avoid anything that could damage the surface. We focus on a clean finish and clear communication—so you know exactly what’s happening on your roof.",
                ),
                seo(
                    "How often should panels be cleaned?",
                    "Many homes benefit from 1–2 cleanings per year, depending on dust levels and surrounding conditions. We can recommend a schedule after your first cleaning.",
                ),
            ],
            recent: &[
                job("Seasonal solar cleaning", "Glendale"),
                job("Roof panel wash (soft methods)", "Pasadena"),
                job("Multi-array cleaning", "Ontario"),
            ],
        },
    },
    Service {
        kind: ServiceKind::Tint,
        title: "Tint Removal",
        description: "Clean removal + adhesive cleanup.",
        features: &["Heat/steam method when appropriate", "Adhesive cleanup", "Glass-safe finish"],
        route: "/work/tint",
        work: WorkPage {
            heading: "Tint Removal — See Our Work",
            subtitle: "Clean removal with careful adhesive cleanup—so your glass looks clear again.",
            seo_title: "Window Tint Removal Services",
            seo_blocks: &[
                intro(
                    "Old tint can peel, bubble, and leave glass looking messy. Magic Glove removes tint carefully and focuses on a clean finish—especially during the adhesive cleanup stage.",
                ),
                seo(
                    "Why tint removal is needed",
                    "Aging tint can become cloudy, cracked, or uneven. Removing it restores clarity and can improve the overall look of your home or storefront.",
                ),
                seo(
                    "Our approach",
                    "We use appropriate heat/steam methods when needed, remove film carefully, and then focus on adhesive cleanup so the glass looks clean and clear.",
                ),
                seo(
                    "What to expect",
                    "Every job is different depending on the tint age and adhesive type. We’ll explain options clearly and set expectations upfront—no surprises.",
                ),
            ],
            recent: &[
                job("Office tint removal + cleanup", "San Fernando Valley"),
                job("Storefront tint removal", "Rialto"),
                job("Residential glass tint removal", "Rancho Cucamonga"),
            ],
        },
    },
];

// =============================================================================
// SERVICE AREA
// =============================================================================

pub const SERVICED_ZIPS: &[&str] = &[
    "91344", "91325", "91326", "91324", "91306", "91406", "91402", "91505", "91201", "91103", "91311", "91331",
    "91335", "91730", "91739", "91701", "91762", "91764", "92335", "92336", "92324",
];

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
