use preface_licensing::Resolution;
use serde::Serialize;

/// JSON shape printed by `preface resolve --format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLicense<'a> {
    pub name: &'a str,
    pub source: &'a str,
    pub copyright: &'a str,
    pub text: String,
    pub header: String,
}

impl<'a> ResolvedLicense<'a> {
    #[must_use]
    pub fn new(resolution: &'a Resolution, copyright: &'a str) -> Self {
        let license = &resolution.license;
        Self {
            name: &license.name,
            source: resolution.source.as_ref(),
            copyright,
            text: license.render_text(copyright).into_owned(),
            header: license.render_header(copyright).into_owned(),
        }
    }
}
