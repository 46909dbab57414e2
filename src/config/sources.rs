//! Source catalog and curated seed domains.
//!
//! Each [`Source`] is tagged with the [`SourceFormat`] that decides which
//! extractor reads its content, so dispatch never depends on the URL text.

use strum_macros::{Display, EnumIter};

/// Output category a source (or seed domain) contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    /// Streaming, gaming, and smart-home services
    Home,
    /// Productivity and collaboration suites
    Enterprise,
}

/// Text format of a source, selecting the extractor applied to its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SourceFormat {
    /// Adblock filter syntax (`||domain^`)
    Adblock,
    /// One hostname per line, `#` comments
    PlainList,
    /// Prose or HTML mentioning known vendor names
    VendorMention,
    /// Prose or HTML listing `<sub>.<vendor>.<tld>` hosts
    VendorSuffix,
    /// `"domain": "value"` style key/value text
    LabeledField,
}

/// A remote source of domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Absolute URL fetched with a single GET
    pub url: String,
    /// List the extracted domains are merged into
    pub category: Category,
    /// Extractor applied to the fetched content
    pub format: SourceFormat,
}

impl Source {
    /// Creates a source entry.
    pub fn new(url: impl Into<String>, category: Category, format: SourceFormat) -> Self {
        Self {
            url: url.into(),
            category,
            format,
        }
    }
}

const ADGUARD_GENERAL_EXTENSIONS_URL: &str =
    "https://raw.githubusercontent.com/AdguardTeam/AdguardFilters/master/GeneralExtensionsFilter/filters.txt";
const ADGUARD_SPYWARE_URL: &str =
    "https://raw.githubusercontent.com/AdguardTeam/AdguardFilters/master/SpywareFilter/filters.txt";
const OISD_STRICT_URL: &str =
    "https://raw.githubusercontent.com/oisd/oisd-domains/master/domains_strict.txt";
const M365_ENDPOINTS_URL: &str =
    "https://learn.microsoft.com/en-us/microsoft-365/enterprise/urls-and-ip-address-ranges?view=o365-worldwide";
const DINGTALK_DOMAINS_URL: &str = "https://open.dingtalk.com/document/org/open-api-domain-list";
const FEISHU_DOMAINS_URL: &str = "https://www.feishu.cn/hc/zh-cn/articles/360041195034";

/// Built-in source catalog, in fetch order.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new(
            ADGUARD_GENERAL_EXTENSIONS_URL,
            Category::Home,
            SourceFormat::Adblock,
        ),
        Source::new(ADGUARD_SPYWARE_URL, Category::Home, SourceFormat::Adblock),
        Source::new(OISD_STRICT_URL, Category::Home, SourceFormat::PlainList),
        Source::new(
            M365_ENDPOINTS_URL,
            Category::Enterprise,
            SourceFormat::VendorSuffix,
        ),
        Source::new(
            DINGTALK_DOMAINS_URL,
            Category::Enterprise,
            SourceFormat::LabeledField,
        ),
        Source::new(
            FEISHU_DOMAINS_URL,
            Category::Enterprise,
            SourceFormat::LabeledField,
        ),
    ]
}

const HOME_SEEDS: &[&str] = &[
    "*.youtube.com",
    "*.ytimg.com",
    "*.googlevideo.com",
    "*.ggpht.com",
    "*.netflix.com",
    "*.nflximg.com",
    "*.nflxvideo.net",
    "*.disneyplus.com",
    "*.steampowered.com",
    "*.steamstatic.com",
    "*.xboxlive.com",
    "*.playstation.com",
    "*.nintendo.com",
    "*.mi.com",
    "*.xiaomi.com",
    "*.apple.com",
    "*.icloud.com",
    "*.tuya.com",
    "*.smartlife.cloud",
];

const ENTERPRISE_SEEDS: &[&str] = &[
    "*.office.com",
    "*.office.net",
    "*.microsoftonline.com",
    "*.sharepoint.com",
    "*.onedrive.com",
    "*.outlook.com",
    "*.teams.microsoft.com",
    "*.skype.com",
    "*.live.com",
    "*.dingtalk.com",
    "*.alibaba.com",
    "*.feishu.cn",
    "*.larksuite.com",
    "*.zoom.us",
    "*.zoom.com",
    "*.webex.com",
    "*.cisco.com",
    "*.google.com",
    "*.gstatic.com",
    "*.googleapis.com",
    "*.slack.com",
    "*.dropbox.com",
];

/// Curated home domains, always included regardless of fetch outcomes.
pub fn default_home_seeds() -> Vec<String> {
    HOME_SEEDS.iter().map(|d| d.to_string()).collect()
}

/// Curated enterprise domains, always included regardless of fetch outcomes.
pub fn default_enterprise_seeds() -> Vec<String> {
    ENTERPRISE_SEEDS.iter().map(|d| d.to_string()).collect()
}
