use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Where an application currently stands.
///
/// The string forms are what ends up in the `Status` column, so renaming one breaks every
/// existing sheet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ApplicationStatus {
    #[strum(serialize = "To Apply")]
    ToApply,
    Applied,
    Interview,
    Rejected,
    Offer,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
