use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;
use url::Url;

use crate::constants::{SHARE_HASHTAG, SHARE_TITLE};
use crate::species::Species;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Twitter,
    Facebook,
    LinkedIn,
    WhatsApp,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 4] = [
        SharePlatform::Twitter,
        SharePlatform::Facebook,
        SharePlatform::LinkedIn,
        SharePlatform::WhatsApp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Partager sur X",
            SharePlatform::Facebook => "Partager sur Facebook",
            SharePlatform::LinkedIn => "Partager sur LinkedIn",
            SharePlatform::WhatsApp => "Partager sur WhatsApp",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SharePlatform::Twitter => "𝕏",
            SharePlatform::Facebook => "📘",
            SharePlatform::LinkedIn => "💼",
            SharePlatform::WhatsApp => "💬",
        }
    }

    /// Tailwind background class in the platform's brand colour.
    pub fn background_class(self) -> &'static str {
        match self {
            SharePlatform::Twitter => "bg-[#1DA1F2]",
            SharePlatform::Facebook => "bg-[#1877F2]",
            SharePlatform::LinkedIn => "bg-[#0A66C2]",
            SharePlatform::WhatsApp => "bg-[#25D366]",
        }
    }
}

/// Wording of the share message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTone {
    Twitter,
    WhatsApp,
    Default,
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("invalid share url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Share-intent links, one per platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub whatsapp: String,
}

impl ShareLinks {
    pub fn get(&self, platform: SharePlatform) -> &str {
        match platform {
            SharePlatform::Twitter => &self.twitter,
            SharePlatform::Facebook => &self.facebook,
            SharePlatform::LinkedIn => &self.linkedin,
            SharePlatform::WhatsApp => &self.whatsapp,
        }
    }
}

/// What the OS share sheet receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeSharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Sharing features the host environment offers, resolved once per session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShareCapability {
    pub native_share: bool,
}

pub fn share_text(species: &Species, tone: ShareTone) -> String {
    match tone {
        ShareTone::Twitter => format!(
            "🧬 Je suis {}% {} ! {}\n\n{}\n\n{}",
            species.percentage, species.name, species.emoji, species.fun_fact, SHARE_HASHTAG
        ),
        ShareTone::WhatsApp => format!(
            "Hey ! 🧬 Je viens de découvrir que je suis {}% {} ! {}\n\n{}\n\nEssaie toi aussi :",
            species.percentage, species.name, species.emoji, species.fun_fact
        ),
        ShareTone::Default => format!(
            "🧬 Je suis {}% {} ! {}\n\n{}\n\nTrouve ton match ADN :",
            species.percentage, species.name, species.emoji, species.fun_fact
        ),
    }
}

/// Characters left as-is inside a URI component; everything else is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Builds the platform links. `share_url` must be an absolute URL; it is
/// embedded exactly as given.
pub fn share_links(species: &Species, share_url: &str) -> Result<ShareLinks, ShareError> {
    Url::parse(share_url)?;
    let url = encode_component(share_url);

    Ok(ShareLinks {
        twitter: format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            encode_component(&share_text(species, ShareTone::Twitter)),
            url
        ),
        facebook: format!(
            "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
            url,
            encode_component(&share_text(species, ShareTone::Default))
        ),
        linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url),
        whatsapp: format!(
            "https://wa.me/?text={}",
            encode_component(&format!("{} {}", share_text(species, ShareTone::WhatsApp), share_url))
        ),
    })
}

/// Text written to the clipboard by the copy-link fallback.
pub fn clipboard_text(species: &Species, share_url: &str) -> String {
    format!("{} {}", share_text(species, ShareTone::Default), share_url)
}

/// True when a rejected native share means the user dismissed the sheet.
pub fn is_share_cancelled(error_name: &str) -> bool {
    error_name == "AbortError"
}

pub fn native_share_payload(species: &Species, share_url: &str) -> NativeSharePayload {
    NativeSharePayload {
        title: SHARE_TITLE.to_string(),
        text: share_text(species, ShareTone::Default),
        url: share_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chimp() -> Species {
        Species {
            id: 1,
            name: "Chimpanzé".to_string(),
            scientific_name: "Pan troglodytes".to_string(),
            percentage: 98.8,
            emoji: "🐒".to_string(),
            category: "primate".to_string(),
            fun_fact: "Ils utilisent des outils.".to_string(),
        }
    }

    fn query(link: &str) -> Vec<(String, String)> {
        Url::parse(link).unwrap().query_pairs().into_owned().collect()
    }

    const SITE: &str = "https://dna-roulette.vercel.app/";

    #[test]
    fn test_share_text_tones() {
        let species = chimp();
        let twitter = share_text(&species, ShareTone::Twitter);
        assert!(twitter.starts_with("🧬 Je suis 98.8% Chimpanzé ! 🐒"));
        assert!(twitter.ends_with("#DNARoulette"));

        let whatsapp = share_text(&species, ShareTone::WhatsApp);
        assert!(whatsapp.starts_with("Hey ! "));
        assert!(whatsapp.ends_with("Essaie toi aussi :"));

        let default = share_text(&species, ShareTone::Default);
        assert!(default.contains("Ils utilisent des outils."));
        assert!(default.ends_with("Trouve ton match ADN :"));
    }

    #[test]
    fn test_whole_percentages_have_no_decimals() {
        let mut species = chimp();
        species.percentage = 60.0;
        assert!(share_text(&species, ShareTone::Default).starts_with("🧬 Je suis 60% "));
    }

    #[test]
    fn test_share_links_carry_text_and_url() {
        let species = chimp();
        let links = share_links(&species, SITE).unwrap();

        assert!(links.twitter.starts_with("https://twitter.com/intent/tweet?"));
        assert_eq!(
            query(&links.twitter),
            vec![
                ("text".to_string(), share_text(&species, ShareTone::Twitter)),
                ("url".to_string(), SITE.to_string()),
            ]
        );

        assert!(links.facebook.starts_with("https://www.facebook.com/sharer/sharer.php?"));
        assert_eq!(
            query(&links.facebook),
            vec![
                ("u".to_string(), SITE.to_string()),
                ("quote".to_string(), share_text(&species, ShareTone::Default)),
            ]
        );

        assert_eq!(query(&links.linkedin), vec![("url".to_string(), SITE.to_string())]);

        assert!(links.whatsapp.starts_with("https://wa.me/?"));
        let whatsapp = query(&links.whatsapp);
        assert_eq!(whatsapp[0].0, "text");
        assert!(whatsapp[0].1.ends_with(&format!("Essaie toi aussi : {}", SITE)));
    }

    #[test]
    fn test_links_are_encoded() {
        let links = share_links(&chimp(), SITE).unwrap();
        for platform in SharePlatform::ALL {
            let link = links.get(platform);
            assert!(!link.contains(' '));
            assert!(!link.contains('\n'));
        }
    }

    #[test]
    fn test_links_use_uri_component_encoding() {
        let links = share_links(&chimp(), SITE).unwrap();
        assert!(!links.whatsapp.contains('+'));
        assert!(links.whatsapp.starts_with("https://wa.me/?text=Hey%20!%20%F0%9F%A7%AC%20Je%20viens"));
        assert!(links.twitter.contains("%0A%0A%23DNARoulette&url="));
    }

    #[test]
    fn test_share_url_is_embedded_verbatim() {
        let species = chimp();
        let bare = "https://dna-roulette.vercel.app";
        let links = share_links(&species, bare).unwrap();

        assert_eq!(
            links.linkedin,
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fdna-roulette.vercel.app"
        );
        assert_eq!(query(&links.twitter)[1], ("url".to_string(), bare.to_string()));
        assert_eq!(query(&links.facebook)[0], ("u".to_string(), bare.to_string()));
        assert!(query(&links.whatsapp)[0].1.ends_with(&format!(" {}", bare)));
        assert!(clipboard_text(&species, bare).ends_with(&format!(" {}", bare)));
        assert_eq!(native_share_payload(&species, bare).url, bare);
    }

    #[test]
    fn test_invalid_share_url_is_an_error() {
        assert!(matches!(share_links(&chimp(), "not a url"), Err(ShareError::InvalidUrl(_))));
    }

    #[test]
    fn test_links_depend_only_on_species_and_url() {
        let species = chimp();
        let first = share_links(&species, SITE).unwrap();
        assert_eq!(first, share_links(&species.clone(), SITE).unwrap());

        let mut other = chimp();
        other.id = 2;
        other.name = "Bonobo".to_string();
        assert_ne!(first, share_links(&other, SITE).unwrap());
        assert_ne!(first, share_links(&species, "https://example.org/").unwrap());
    }

    #[test]
    fn test_only_abort_counts_as_cancelled_share() {
        assert!(is_share_cancelled("AbortError"));
        assert!(!is_share_cancelled("NotAllowedError"));
        assert!(!is_share_cancelled("DataError"));
        assert!(!is_share_cancelled(""));
    }

    #[test]
    fn test_clipboard_and_native_payload() {
        let species = chimp();
        assert_eq!(
            clipboard_text(&species, SITE),
            format!("{} {}", share_text(&species, ShareTone::Default), SITE)
        );
        let payload = native_share_payload(&species, SITE);
        assert_eq!(payload.title, "Résultat DNA Roulette");
        assert_eq!(payload.url, SITE);
    }
}
