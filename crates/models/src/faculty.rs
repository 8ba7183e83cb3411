use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Top-level academic divisions a subject code can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Faculty {
    #[strum(serialize = "Faculty of Mathematics")]
    Mathematics,
    #[strum(serialize = "Faculty of Engineering")]
    Engineering,
    #[strum(serialize = "Faculty of Arts")]
    Arts,
    #[strum(serialize = "Faculty of Science")]
    Science,
    #[strum(serialize = "Faculty of Environment")]
    Environment,
    #[strum(serialize = "Faculty of Health")]
    Health,
    #[strum(serialize = "UNKNOWN")]
    Unknown,
}

impl Faculty {
    /// All faculties a subject can actually be attributed to
    pub fn known() -> Vec<Faculty> {
        Faculty::iter().filter(|f| *f != Faculty::Unknown).collect()
    }
}
