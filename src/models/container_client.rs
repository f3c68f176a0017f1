/// One entry of the engine's container list, reduced to what gets printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    /// First entry of the engine's `Names`, leading slash included.
    pub name: String,
    pub id: String,
    pub status: String,
}

/// A container summary that cannot be turned into a [`ContainerRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidSummary {
    MissingField(&'static str),
    EmptyNames,
}

impl std::fmt::Display for InvalidSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidSummary::MissingField(field) => write!(f, "missing field `{}`", field),
            InvalidSummary::EmptyNames => write!(f, "`Names` is empty"),
        }
    }
}

impl TryFrom<bollard::models::ContainerSummary> for ContainerRecord {
    type Error = InvalidSummary;

    fn try_from(value: bollard::models::ContainerSummary) -> Result<Self, Self::Error> {
        let name = value
            .names
            .ok_or(InvalidSummary::MissingField("Names"))?
            .into_iter()
            .next()
            .ok_or(InvalidSummary::EmptyNames)?;
        let id = value.id.ok_or(InvalidSummary::MissingField("Id"))?;
        let status = value.status.ok_or(InvalidSummary::MissingField("Status"))?;

        Ok(ContainerRecord { name, id, status })
    }
}
