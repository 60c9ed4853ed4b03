//! Commission packages and request form.
//!
//! The form remembers the selected package by id, so its name follows the
//! active language instead of freezing the language it was picked in.

use crate::context::LanguageSnapshot;
use crate::selector::{Localize, Localized};
use inkfolio_common::normalize_whitespace;
use inkfolio_i18n::LanguageCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Commission package identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageId {
    Sketch,
    Colored,
    Digital,
    Premium,
}

impl PackageId {
    /// Packages in display order
    pub const ALL: [Self; 4] = [Self::Sketch, Self::Colored, Self::Digital, Self::Premium];

    /// Stable key of the package
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sketch => "sketch",
            Self::Colored => "colored",
            Self::Digital => "digital",
            Self::Premium => "premium",
        }
    }

    /// Parse a package key, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|package| package.key().eq_ignore_ascii_case(key))
    }

    /// Package definition
    #[must_use]
    pub fn package(self) -> &'static Package {
        match self {
            Self::Sketch => &PACKAGES[0],
            Self::Colored => &PACKAGES[1],
            Self::Digital => &PACKAGES[2],
            Self::Premium => &PACKAGES[3],
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Commission package
#[derive(Debug, Clone, Copy)]
pub struct Package {
    pub id: PackageId,
    pub name: Localized<&'static str>,
    pub price: Localized<&'static str>,
    pub features: Localized<[&'static str; 5]>,
    pub popular: bool,
}

/// Packages in display order, indexed consistently with [`PackageId::ALL`].
pub static PACKAGES: [Package; 4] = [
    Package {
        id: PackageId::Sketch,
        name: Localized::new("Sketch Package", "スケッチパッケージ"),
        price: Localized::new("$25", "¥2,500"),
        features: Localized::new(
            [
                "Black & white sketch",
                "Character design",
                "Basic background",
                "2-3 revisions",
                "3-5 days delivery",
            ],
            [
                "白黒スケッチ",
                "キャラクターデザイン",
                "基本背景",
                "2-3回修正",
                "3-5日納期",
            ],
        ),
        popular: false,
    },
    Package {
        id: PackageId::Colored,
        name: Localized::new("Full Color", "フルカラー"),
        price: Localized::new("$75", "¥7,500"),
        features: Localized::new(
            [
                "Full color illustration",
                "Detailed character design",
                "Complex background",
                "5 revisions",
                "7-10 days delivery",
            ],
            [
                "フルカラーイラスト",
                "詳細キャラクターデザイン",
                "複雑な背景",
                "5回修正",
                "7-10日納期",
            ],
        ),
        popular: true,
    },
    Package {
        id: PackageId::Digital,
        name: Localized::new("Digital Master", "デジタルマスター"),
        price: Localized::new("$150", "¥15,000"),
        features: Localized::new(
            [
                "High-res digital art",
                "Multiple poses/expressions",
                "Detailed background",
                "Unlimited revisions",
                "14-21 days delivery",
            ],
            [
                "高解像度デジタルアート",
                "複数ポーズ/表情",
                "詳細背景",
                "無制限修正",
                "14-21日納期",
            ],
        ),
        popular: false,
    },
    Package {
        id: PackageId::Premium,
        name: Localized::new("Premium Package", "プレミアムパッケージ"),
        price: Localized::new("$300", "¥30,000"),
        features: Localized::new(
            [
                "Complete character sheet",
                "Multiple illustrations",
                "Commercial license",
                "Priority support",
                "21-30 days delivery",
            ],
            [
                "完全キャラクターシート",
                "複数イラスト",
                "商用ライセンス",
                "優先サポート",
                "21-30日納期",
            ],
        ),
        popular: false,
    },
];

/// Commission copy not shared through the locale catalog
#[derive(Debug, Clone, Copy)]
pub struct CommissionCopy {
    pub subtitle: &'static str,
    pub popular: &'static str,
    pub select: &'static str,
    pub form_title: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub package: &'static str,
    pub package_placeholder: &'static str,
    pub description: &'static str,
    pub deadline: &'static str,
    pub reference: &'static str,
    pub submit: &'static str,
    pub success: &'static str,
}

/// Commission copy per language.
pub const COMMISSION_COPY: Localized<CommissionCopy> = Localized::new(
    CommissionCopy {
        subtitle: "Bring Your Ideas to Life",
        popular: "POPULAR",
        select: "Select",
        form_title: "Commission Request Form",
        name: "Your Name",
        email: "Email Address",
        package: "Select Package",
        package_placeholder: "Choose a package...",
        description: "Describe Your Vision",
        deadline: "Preferred Deadline",
        reference: "Reference Images (Optional)",
        submit: "Send Request",
        success: "Thank you! Your commission request has been sent!",
    },
    CommissionCopy {
        subtitle: "あなたのアイデアを実現させる",
        popular: "人気",
        select: "選択",
        form_title: "依頼リクエストフォーム",
        name: "お名前",
        email: "メールアドレス",
        package: "パッケージを選択",
        package_placeholder: "パッケージを選択...",
        description: "ご希望の内容を記述",
        deadline: "希望納期",
        reference: "参考画像（任意）",
        submit: "リクエストを送信",
        success: "ありがとうございます！依頼リクエストが送信されました！",
    },
);

/// Rendered package card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageView {
    pub id: PackageId,
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    pub popular: bool,
    pub selected: bool,
}

impl Localize for Package {
    type View = PackageView;

    fn localize(&self, language: LanguageCode) -> PackageView {
        PackageView {
            id: self.id,
            name: self.name.text(language),
            price: self.price.text(language),
            features: self
                .features
                .get(language)
                .iter()
                .map(ToString::to_string)
                .collect(),
            popular: self.popular,
            selected: false,
        }
    }
}

/// Free-text fields of the request form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommissionField {
    Name,
    Email,
    Description,
    Deadline,
    Reference,
}

/// Values entered in the request form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommissionForm {
    pub name: String,
    pub email: String,
    pub description: String,
    pub deadline: String,
    pub reference: String,
}

/// Submitted commission request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRequest {
    pub package: Option<PackageId>,
    pub package_name: Option<String>,
    pub name: String,
    pub email: String,
    pub description: String,
    pub deadline: String,
    pub reference: String,
}

/// Rendered request form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionFormView {
    pub title: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub package_label: &'static str,
    pub package_placeholder: &'static str,
    pub package_options: Vec<PackageOptionView>,
    pub selected_package: Option<String>,
    pub description_label: &'static str,
    pub deadline_label: &'static str,
    pub reference_label: &'static str,
    pub submit_label: &'static str,
    pub values: CommissionForm,
    pub success: Option<&'static str>,
}

/// Entry of the package dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageOptionView {
    pub id: PackageId,
    pub name: String,
}

/// Rendered commission section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionsView {
    pub title: String,
    pub subtitle: &'static str,
    pub popular_badge: &'static str,
    pub select_label: &'static str,
    pub packages: Vec<PackageView>,
    pub form: CommissionFormView,
}

/// Package selection and form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommissionState {
    selected: Option<PackageId>,
    form: CommissionForm,
    submitted: bool,
}

impl CommissionState {
    /// Select a package for the request
    pub fn select_package(&mut self, id: PackageId) {
        debug!(package = %id, "Commission package selected");
        self.selected = Some(id);
    }

    /// Clear the package selection
    pub fn clear_package(&mut self) {
        self.selected = None;
    }

    /// Selected package
    #[must_use]
    pub const fn selected_package(&self) -> Option<PackageId> {
        self.selected
    }

    /// Set a free-text field
    pub fn update_field(&mut self, field: CommissionField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CommissionField::Name => self.form.name = value,
            CommissionField::Email => self.form.email = value,
            CommissionField::Description => self.form.description = value,
            CommissionField::Deadline => self.form.deadline = value,
            CommissionField::Reference => self.form.reference = value,
        }
    }

    /// Current form values
    #[must_use]
    pub const fn form(&self) -> &CommissionForm {
        &self.form
    }

    /// Whether the form has been sent
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Send the request
    ///
    /// Nothing leaves the process: the request is logged, the confirmation
    /// is shown and the entered values are kept.
    pub fn submit(&mut self, language: LanguageCode) -> CommissionRequest {
        let request = CommissionRequest {
            package: self.selected,
            package_name: self
                .selected
                .map(|id| id.package().name.text(language)),
            name: normalize_whitespace(&self.form.name),
            email: self.form.email.trim().to_string(),
            description: self.form.description.clone(),
            deadline: self.form.deadline.trim().to_string(),
            reference: self.form.reference.trim().to_string(),
        };

        self.submitted = true;
        info!(
            package = ?request.package,
            deadline = %request.deadline,
            "Commission request submitted"
        );
        request
    }

    /// Render the commission section
    #[must_use]
    pub fn view(&self, snapshot: &LanguageSnapshot) -> CommissionsView {
        let language = snapshot.language();
        let copy = COMMISSION_COPY.get(language);

        let packages = PACKAGES
            .iter()
            .map(|package| {
                let mut view = package.localize(language);
                view.selected = self.selected == Some(package.id);
                view
            })
            .collect();

        CommissionsView {
            title: snapshot.bundle().commissions.title.clone(),
            subtitle: copy.subtitle,
            popular_badge: copy.popular,
            select_label: copy.select,
            packages,
            form: CommissionFormView {
                title: copy.form_title,
                name_label: copy.name,
                email_label: copy.email,
                package_label: copy.package,
                package_placeholder: copy.package_placeholder,
                package_options: PACKAGES
                    .iter()
                    .map(|package| PackageOptionView {
                        id: package.id,
                        name: package.name.text(language),
                    })
                    .collect(),
                selected_package: self.selected.map(|id| id.package().name.text(language)),
                description_label: copy.description,
                deadline_label: copy.deadline,
                reference_label: copy.reference,
                submit_label: copy.submit,
                values: self.form.clone(),
                success: self.submitted.then_some(copy.success),
            },
        }
    }
}
