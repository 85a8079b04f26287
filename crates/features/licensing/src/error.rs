use std::borrow::Cow;

/// Error types specific to the licensing feature.
#[preface_derive::preface_error]
pub enum LicenseError {
    /// A license name was explicitly requested (flag or `license` key) but matches no alias.
    #[error("unknown license{}: {requested}", format_context(.context))]
    UnknownLicense { requested: String, context: Option<Cow<'static, str>> },

    #[error("Duplicate license key{}: {key}", format_context(.context))]
    DuplicateKey { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("License declares no aliases{}: {key}", format_context(.context))]
    EmptyAliases { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Every license must be selectable by its own canonical key.
    #[error("License key is not among its aliases{}: {key}", format_context(.context))]
    KeyNotAliased { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error(
        "Alias '{alias}' is claimed by both '{first}' and '{second}'{}",
        format_context(.context)
    )]
    AliasCollision {
        alias: String,
        first: Cow<'static, str>,
        second: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Registry is missing the reserved 'none' license{}", format_context(.context))]
    MissingNone { context: Option<Cow<'static, str>> },
}

pub type Result<T> = std::result::Result<T, LicenseError>;
