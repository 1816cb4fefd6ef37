use anyhow::{anyhow, Result};
use url::Url;

use super::eligibility::ResolutionRecord;

/// Locale segment of every course link.
pub const LOCALE: &str = "en";
/// Role segment of every course link.
pub const ROLE: &str = "student";

pub const WELCOME_TEXT: &str =
    "✅  እንኳን ወደ ዳሩል-ኩብራ የቁርአን ማእከል በደህና መጡ! ኮርሱን ለመከታተል ከታች ያለውን ማስፈንጠሪያ ይጫኑ፡፡";
pub const DENIAL_TEXT: &str = "🚫 የኮርሱን ፕላትፎርም ለማግኘት አልተፈቀደለዎትም!";

/// Inline button opening the course page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkButton {
    pub label: String,
    pub url: Url,
}

/// One outbound Telegram message: text plus at most one URL button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyMessage {
    pub text: String,
    pub link: Option<LinkButton>,
}

impl ReplyMessage {
    pub fn denial() -> Self {
        Self {
            text: DENIAL_TEXT.to_string(),
            link: None,
        }
    }

    pub fn is_denial(&self) -> bool {
        self.link.is_none() && self.text == DENIAL_TEXT
    }
}

/// Builds `{base}/{locale}/{role}/{student}/{course}/{chapter}` links.
#[derive(Debug, Clone)]
pub struct DeepLinkBuilder {
    base: Url,
}

impl DeepLinkBuilder {
    pub fn new(base: Url) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(anyhow!("Course platform URL {} cannot carry a path", base));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn link_for(&self, record: &ResolutionRecord) -> Url {
        let student_id = record.student_id.to_string();
        let mut url = self.base.clone();

        // Cannot fail: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                LOCALE,
                ROLE,
                student_id.as_str(),
                record.course_id.as_str(),
                record.chapter_id.as_str(),
            ]);
        }

        url
    }
}

/// Button text naming whose course page the link opens.
pub fn button_label(display_name: &str) -> String {
    format!("📚 የ{display_name}ን የትምህርት ገጽ ይክፈቱ")
}

/// One welcome message per record, or a single denial when there are none.
pub fn build_replies(links: &DeepLinkBuilder, records: &[ResolutionRecord]) -> Vec<ReplyMessage> {
    if records.is_empty() {
        return vec![ReplyMessage::denial()];
    }

    records
        .iter()
        .map(|record| ReplyMessage {
            text: WELCOME_TEXT.to_string(),
            link: Some(LinkButton {
                label: button_label(&record.display_name),
                url: links.link_for(record),
            }),
        })
        .collect()
}
