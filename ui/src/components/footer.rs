use dioxus::prelude::*;

struct SocialLink {
    label: &'static str,
    href: &'static str,
    icon: &'static str,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/yuvraj-baloriya",
        icon: "in",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/yuvraj-baloriya",
        icon: "gh",
    },
    SocialLink {
        label: "WhatsApp",
        href: "https://wa.me/919999999999",
        icon: "wa",
    },
    SocialLink {
        label: "Telegram",
        href: "https://t.me/yuvraj_baloriya",
        icon: "tg",
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/Yuvraj_Baloriya_.in",
        icon: "ig",
    },
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                p {
                    "This Website was made with "
                    span { "❤️" }
                }
            }
            div {
                class: "social-media",
                for link in SOCIAL_LINKS {
                    a {
                        href: "{link.href}",
                        target: "_blank",
                        rel: "noreferrer",
                        "aria-label": "{link.label}",
                        span { class: "social-icon social-icon-{link.icon}", "{link.label}" }
                    }
                }
            }
        }
    }
}
