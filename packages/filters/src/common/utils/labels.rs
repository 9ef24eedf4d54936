// Display labels for small enumerated codes used in search pages

/// Search result ordering selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Recent,
    Viewed,
    Best,
}

impl SortOrder {
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "recent" => Some(SortOrder::Recent),
            "viewed" => Some(SortOrder::Viewed),
            "best" => Some(SortOrder::Best),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Recent => "Most recent",
            SortOrder::Viewed => "Most viewed",
            SortOrder::Best => "Best match",
        }
    }
}

/// Label for a sort-order code; `None` for codes the page does not offer.
pub fn sorted_by_display(code: &str) -> Option<&'static str> {
    SortOrder::parse(code).map(|order| order.label())
}

/// Publisher category used in the organisation-type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganisationType {
    CentralGovernment,
    LocalAuthority,
    Other,
}

impl OrganisationType {
    /// Any unrecognised abbreviation is an "other" body.
    pub fn from_abbreviation(code: &str) -> Self {
        match code {
            "central-gov" => OrganisationType::CentralGovernment,
            "local-auth" => OrganisationType::LocalAuthority,
            _ => OrganisationType::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrganisationType::CentralGovernment => "Central Government",
            OrganisationType::LocalAuthority => "Local Authorities",
            OrganisationType::Other => "Other government bodies",
        }
    }
}

/// Human list of the selected organisation types, e.g.
/// `Central Government <span class="normal">or</span> Local Authorities`.
pub fn org_type_display<S: AsRef<str>>(codes: &[S]) -> String {
    let labels: Vec<&'static str> = codes
        .iter()
        .map(|code| OrganisationType::from_abbreviation(code.as_ref()).label())
        .collect();

    match labels.split_last() {
        None => String::new(),
        Some((only, [])) => only.to_string(),
        Some((last, rest)) => format!(
            r#"{} <span class="normal">or</span> {}"#,
            rest.join(", "),
            last
        ),
    }
}
