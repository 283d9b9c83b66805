/// Employee identity as carried on every punch.
///
/// The `code` is the stable key; two employees may share a display name, so
/// grouping always pairs the name with the code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Employee {
    pub code: String,
    pub name: String,
}

impl Employee {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
