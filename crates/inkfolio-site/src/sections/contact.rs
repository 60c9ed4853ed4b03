//! Contact form, studio details and social links.

use crate::context::LanguageSnapshot;
use crate::selector::Localized;
use inkfolio_common::normalize_whitespace;
use inkfolio_i18n::LanguageCode;
use serde::Serialize;
use tracing::info;

/// Contact copy not shared through the locale catalog
#[derive(Debug, Clone, Copy)]
pub struct ContactCopy {
    pub subtitle: &'static str,
    pub subject: &'static str,
    pub success: &'static str,
    pub info_heading: &'static str,
    pub location_heading: &'static str,
    pub location: &'static str,
    pub availability_heading: &'static str,
    pub availability: &'static str,
    pub email_heading: &'static str,
    pub response_heading: &'static str,
    pub response_time: &'static str,
    pub social_title: &'static str,
}

/// Contact copy per language.
pub const CONTACT_COPY: Localized<ContactCopy> = Localized::new(
    ContactCopy {
        subtitle: "Ready to Start Your Art Adventure?",
        subject: "Subject",
        success: "Thank you! Your message has been sent successfully!",
        info_heading: "Get in Touch",
        location_heading: "Location",
        location: "Grand Line, New World",
        availability_heading: "Availability",
        availability: "Available 24/7 for adventures",
        email_heading: "Email",
        response_heading: "Response Time",
        response_time: "Usually responds within 2-4 hours",
        social_title: "Follow My Adventures",
    },
    ContactCopy {
        subtitle: "アートの冒険を始める準備はできましたか？",
        subject: "件名",
        success: "ありがとうございます！メッセージが正常に送信されました！",
        info_heading: "お問い合わせ",
        location_heading: "場所",
        location: "グランドライン、新世界",
        availability_heading: "利用可能時間",
        availability: "冒険のため24時間365日利用可能",
        email_heading: "メール",
        response_heading: "返信時間",
        response_time: "通常2-4時間以内に返信します",
        social_title: "私の冒険をフォロー",
    },
);

/// Studio contact address.
pub const STUDIO_EMAIL: &str = "luffy@artstudio.com";

/// Social network profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub network: &'static str,
    pub handle: &'static str,
}

/// Social profiles in display order.
pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        network: "Instagram",
        handle: "@luffyartstudio",
    },
    SocialLink {
        network: "Twitter",
        handle: "@luffyart",
    },
    SocialLink {
        network: "Pixiv",
        handle: "LuffyArtist",
    },
    SocialLink {
        network: "ArtStation",
        handle: "luffy-manga-art",
    },
];

/// Fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// Values entered in the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Labelled detail in the info block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoItemView {
    pub heading: &'static str,
    pub value: &'static str,
}

/// Rendered contact section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub title: String,
    pub subtitle: &'static str,
    pub name_label: String,
    pub email_label: String,
    pub subject_label: &'static str,
    pub message_label: String,
    pub submit_label: String,
    pub values: ContactForm,
    pub success: Option<&'static str>,
    pub info_heading: &'static str,
    pub info: Vec<InfoItemView>,
    pub social_title: &'static str,
    pub social: Vec<SocialLink>,
}

/// Contact form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    form: ContactForm,
    submitted: bool,
}

impl ContactState {
    /// Set a form field
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.form.name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Subject => self.form.subject = value,
            ContactField::Message => self.form.message = value,
        }
    }

    /// Current form values
    #[must_use]
    pub const fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Whether the form has been sent
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Send the message; it is only logged
    pub fn submit(&mut self) -> ContactForm {
        let message = ContactForm {
            name: normalize_whitespace(&self.form.name),
            email: self.form.email.trim().to_string(),
            subject: normalize_whitespace(&self.form.subject),
            message: self.form.message.clone(),
        };

        self.submitted = true;
        info!(subject = %message.subject, "Contact message submitted");
        message
    }

    /// Render the contact section
    #[must_use]
    pub fn view(&self, snapshot: &LanguageSnapshot) -> ContactView {
        let strings = &snapshot.bundle().contact;
        let copy = CONTACT_COPY.get(snapshot.language());

        ContactView {
            title: strings.title.clone(),
            subtitle: copy.subtitle,
            name_label: strings.form_name.clone(),
            email_label: strings.form_email.clone(),
            subject_label: copy.subject,
            message_label: strings.form_message.clone(),
            submit_label: strings.form_submit.clone(),
            values: self.form.clone(),
            success: self.submitted.then_some(copy.success),
            info_heading: copy.info_heading,
            info: info_items(copy),
            social_title: copy.social_title,
            social: SOCIAL_LINKS.to_vec(),
        }
    }
}

fn info_items(copy: &ContactCopy) -> Vec<InfoItemView> {
    vec![
        InfoItemView {
            heading: copy.location_heading,
            value: copy.location,
        },
        InfoItemView {
            heading: copy.availability_heading,
            value: copy.availability,
        },
        InfoItemView {
            heading: copy.email_heading,
            value: STUDIO_EMAIL,
        },
        InfoItemView {
            heading: copy.response_heading,
            value: copy.response_time,
        },
    ]
}

/// Labels of the info block for a language
#[must_use]
pub fn info_headings(language: LanguageCode) -> [&'static str; 4] {
    let copy = CONTACT_COPY.get(language);
    [
        copy.location_heading,
        copy.availability_heading,
        copy.email_heading,
        copy.response_heading,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_keeps_message_text() {
        let mut state = ContactState::default();
        state.update_field(ContactField::Name, " Nico  Robin ");
        state.update_field(ContactField::Subject, "Poneglyph   sketch");
        state.update_field(ContactField::Message, "Line one\n\nLine two");

        let sent = state.submit();
        assert!(state.is_submitted());
        assert_eq!(sent.name, "Nico Robin");
        assert_eq!(sent.subject, "Poneglyph sketch");
        assert_eq!(sent.message, "Line one\n\nLine two");
    }

    #[test]
    fn test_info_headings_are_translated() {
        assert_eq!(info_headings(LanguageCode::En)[0], "Location");
        assert_eq!(info_headings(LanguageCode::Jp)[0], "場所");
    }
}
